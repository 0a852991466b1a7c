//! Build script for nbody-sys
//!
//! Locates a pre-built nbody library, or falls back to compiling the bundled
//! C sources for the two utility entry points this crate binds.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=native/nbody_tools.c");
    println!("cargo:rerun-if-env-changed=NBODY_LIB_DIR");

    // Strategy 1: pre-built library via environment variable
    if let Ok(lib_dir) = env::var("NBODY_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:rustc-link-lib=dylib=nbody");
        return;
    }

    // Strategy 2: pkg-config
    if try_pkg_config() {
        return;
    }

    // Strategy 3: look for the library in common locations
    let search_paths = ["/usr/local/lib", "/usr/lib", "/usr/lib/x86_64-linux-gnu"];

    for path in &search_paths {
        let lib_path = PathBuf::from(path).join("libnbody.so");
        if lib_path.exists() {
            println!("cargo:rustc-link-search=native={}", path);
            println!("cargo:rustc-link-lib=dylib=nbody");
            return;
        }
    }

    // Strategy 4: compile the bundled sources
    #[cfg(feature = "bundled")]
    {
        cc::Build::new()
            .file("native/nbody_tools.c")
            .opt_level(2)
            .compile("nbody");
        return;
    }

    // If we get here, we couldn't find the library
    #[cfg(not(feature = "bundled"))]
    {
        eprintln!("Could not find the nbody library.");
        eprintln!("Options:");
        eprintln!("  1. Set the NBODY_LIB_DIR environment variable");
        eprintln!("  2. Install libnbody system-wide");
        eprintln!("  3. Enable the 'bundled' feature to build the utility entry points from source");
        panic!("nbody library not found");
    }
}

fn try_pkg_config() -> bool {
    match pkg_config::Config::new().probe("nbody") {
        Ok(_) => {
            println!("cargo:info=Found libnbody via pkg-config");
            true
        }
        Err(_) => false,
    }
}

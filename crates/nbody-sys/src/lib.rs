//! # nbody-sys
//!
//! Low-level FFI bindings to the utility entry points of the nbody simulation
//! library.
//!
//! This crate provides raw, unsafe bindings to the C API. For a safe,
//! ergonomic API, use the `nbody` crate instead.
//!
//! ## Safety
//!
//! All functions in this crate are unsafe. Users must ensure:
//! - Pointers passed to `nb_hash` are valid, NUL-terminated byte strings
//! - The pointed-to bytes are not mutated for the duration of the call
//!
//! ## Example
//!
//! ```rust,ignore
//! use nbody_sys::*;
//! use std::ffi::CString;
//!
//! let name = CString::new("planetesimal").unwrap();
//! let h = unsafe { nb_hash(name.as_ptr()) };
//! ```

use std::os::raw::{c_char, c_double};

extern "C" {
    /// Hash a NUL-terminated byte string into a 32-bit unsigned value.
    pub fn nb_hash(key: *const c_char) -> u32;

    /// Reduce an angle in radians to the interval `[0, 2*pi)`.
    pub fn nb_tools_mod2pi(x: c_double) -> c_double;
}

//! Example documentation generator binary.
//!
//! Walks an examples tree for `<name>/problem.c` files and writes one
//! `<name>.md` page per example into the output directory.
//!
//! # Usage
//!
//! ```bash
//! # Regenerate the example pages from the repository root
//! exdoc --examples ../examples --out docs/c_examples
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "exdoc")]
#[command(about = "Generate Markdown pages from C example description blocks", long_about = None)]
struct Cli {
    /// Directory containing one subdirectory per example
    #[arg(short, long, default_value = "examples")]
    examples: PathBuf,

    /// Directory the generated Markdown pages are written to
    #[arg(short, long, default_value = ".")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let summary = exdoc::generate_all(&cli.examples, &cli.out)?;
    info!(
        pages = summary.pages_written,
        missing_description = summary.missing_description,
        "generation finished"
    );
    Ok(())
}

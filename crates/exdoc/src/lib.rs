//! # exdoc
//!
//! Scrapes the leading `/** ... */` description block out of each C example
//! (`<examples>/<name>/problem.c`) and renders one Markdown page per example:
//! the description prose, the remaining source in a fenced code block, and a
//! trailer pointing at the example directory.
//!
//! Examples without a description block still get a trailer page; a warning
//! is logged and the batch continues. Output files are truncated and fully
//! rewritten on every run.

mod extract;
mod render;

pub use extract::{Description, ExampleSource};
pub use render::render_page;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a generation pass
#[derive(Error, Debug)]
pub enum Error {
    /// Examples root is missing or not a directory
    #[error("Examples directory not found: {0}")]
    MissingExamplesDir(PathBuf),

    /// File read or write failure
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a generation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Pages written, including trailer-only pages.
    pub pages_written: usize,
    /// Inputs in which no description block was found.
    pub missing_description: usize,
}

/// Generate one Markdown page per example under `examples_dir` into `out_dir`.
///
/// Examples are the immediate subdirectories of `examples_dir` that contain a
/// `problem.c`, processed in name order. A missing description block is a
/// warning, not an error; I/O failures abort the pass.
pub fn generate_all(examples_dir: &Path, out_dir: &Path) -> Result<Summary> {
    if !examples_dir.is_dir() {
        return Err(Error::MissingExamplesDir(examples_dir.to_path_buf()));
    }

    let mut summary = Summary::default();
    for entry in WalkDir::new(examples_dir)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == "problem.c")
    {
        // The parent directory's name is the example's name.
        let name = entry
            .path()
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned());
        let Some(name) = name else { continue };

        if generate_page(&name, entry.path(), out_dir)? {
            debug!(example = %name, "page generated");
        } else {
            summary.missing_description += 1;
        }
        summary.pages_written += 1;
    }
    Ok(summary)
}

/// Generate the page for a single example source file.
///
/// Returns whether a description block was found. The output file
/// `<out_dir>/<name>.md` is created or truncated.
pub fn generate_page(name: &str, source_path: &Path, out_dir: &Path) -> Result<bool> {
    let text = fs::read_to_string(source_path).map_err(|source| Error::Io {
        path: source_path.to_path_buf(),
        source,
    })?;

    let parsed = ExampleSource::parse(&text);
    if parsed.description.is_none() {
        warn!(
            example = %name,
            path = %source_path.display(),
            "no description block found"
        );
    }

    let out_path = out_dir.join(format!("{name}.md"));
    fs::write(&out_path, render_page(name, &parsed)).map_err(|source| Error::Io {
        path: out_path.clone(),
        source,
    })?;

    Ok(parsed.description.is_some())
}

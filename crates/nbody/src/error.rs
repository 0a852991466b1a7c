//! Error types for nbody

use thiserror::Error;

/// Result type for nbody operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when marshalling values across the FFI boundary
#[derive(Error, Debug)]
pub enum Error {
    /// Key rejected before reaching the native library
    #[error("Invalid hash key: {0}")]
    InvalidKey(String),
}

// crates/salesclean-core/src/error.rs

use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid file format for {}: expected a .{expected} file", path.display())]
    InvalidFormat { path: PathBuf, expected: String },

    #[error("Failed to parse {}: {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Polars operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, CleanError>;

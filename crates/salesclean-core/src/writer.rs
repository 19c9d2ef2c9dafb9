use std::fs::{self, File};
use std::io;
use std::path::Path;

use polars::prelude::*;
use tracing::{error, info};

use crate::error::{CleanError, Result};

/// Write `df` as CSV with a header row, creating parent directories and
/// replacing any existing file. Nulls are written as empty fields.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    match write_csv(df, path) {
        Ok(()) => {
            info!(path = %path.display(), rows = df.height(), "Saved cleaned data to {}", path.display());
            Ok(())
        }
        Err(source) => {
            error!(path = %path.display(), "Failed to save data: {source}");
            Err(CleanError::WriteFailure {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn write_csv(df: &mut DataFrame, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(io::Error::other)
}

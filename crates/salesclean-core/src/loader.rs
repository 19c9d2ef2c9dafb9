use std::path::Path;

use polars::prelude::*;
use tracing::{error, info};

use crate::error::{CleanError, Result};

/// Check the extension, then existence, then parse. Every cell is read as text.
pub fn load_table(path: &Path, extension: &str) -> Result<DataFrame> {
    let result = check_path(path, extension).and_then(|()| read_csv(path));
    match result {
        Ok(df) => {
            info!(path = %path.display(), rows = df.height(), "Loaded {} rows", df.height());
            Ok(df)
        }
        Err(err) => {
            error!(path = %path.display(), "{err}");
            Err(err)
        }
    }
}

fn check_path(path: &Path, extension: &str) -> Result<()> {
    let matches_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if !matches_extension {
        return Err(CleanError::InvalidFormat {
            path: path.to_path_buf(),
            expected: extension.to_string(),
        });
    }

    if !path.is_file() {
        return Err(CleanError::NotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|source| CleanError::ParseFailure {
            path: path.to_path_buf(),
            source,
        })
}

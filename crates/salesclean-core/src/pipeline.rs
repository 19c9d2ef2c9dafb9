use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{error, info_span};

use crate::config::CleaningConfig;
use crate::error::{CleanError, Result};
use crate::loader::load_table;
use crate::missing::handle_missing_values;
use crate::normalize::normalize;
use crate::validate::validate_rows;
use crate::writer::write_table;

/// load -> normalize -> handle missing values -> validate rows -> write.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: CleaningConfig,
}

impl Pipeline {
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    pub fn load(&self, input: &Path) -> Result<DataFrame> {
        load_table(input, self.config.expected_extension())
    }

    /// Run the in-memory stages over an already loaded table.
    pub fn clean(&self, df: DataFrame) -> Result<DataFrame> {
        let config = &self.config;
        let df = normalize(df, &config.text_columns)?;
        let df = handle_missing_values(
            df,
            &config.numeric_columns,
            &config.critical_columns,
            config.critical_policy,
        )?;
        validate_rows(df, &config.non_negative_columns, &config.date_column)
    }

    /// Clean `input` into `output`, returning the table that was written.
    pub fn run(&self, input: &Path, output: &Path) -> Result<DataFrame> {
        let span = info_span!(
            "clean_sales",
            input = %input.display(),
            output = %output.display(),
            policy = %self.config.critical_policy,
        );
        let _guard = span.enter();

        let raw = self.load(input)?;
        let mut cleaned = self.clean(raw).map_err(|err| {
            let err = match err {
                CleanError::Polars(source) => CleanError::ParseFailure {
                    path: input.to_path_buf(),
                    source,
                },
                other => other,
            };
            error!("{err}");
            err
        })?;
        write_table(&mut cleaned, output)?;
        Ok(cleaned)
    }
}

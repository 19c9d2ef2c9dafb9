use polars::prelude::*;
use tracing::info;

use crate::error::Result;
use crate::table::lookup;

fn retain_rows(df: DataFrame, keep: Expr, reason: &str) -> Result<DataFrame> {
    let before = df.height();
    let filtered = df.lazy().filter(keep).collect()?;
    let removed = before - filtered.height();
    info!(reason, removed, "Removed {removed} rows with {reason}");
    Ok(filtered)
}

/// Drop rows whose value in `name` is negative. Nulls are kept.
pub fn drop_negative(df: DataFrame, name: &str) -> Result<DataFrame> {
    if !lookup(&df, name).is_present() {
        return Ok(df);
    }
    let value = col(name).cast(DataType::Float64);
    let keep = value.clone().is_null().or(value.gt_eq(lit(0.0)));
    retain_rows(df, keep, &format!("negative {name}"))
}

/// Drop rows with no value in `name`.
pub fn drop_null(df: DataFrame, name: &str) -> Result<DataFrame> {
    if !lookup(&df, name).is_present() {
        return Ok(df);
    }
    retain_rows(df, col(name).is_not_null(), &format!("missing {name}"))
}

/// Apply every row filter in sequence; each one's log count is local to it.
pub fn validate_rows(
    df: DataFrame,
    non_negative_columns: &[String],
    date_column: &str,
) -> Result<DataFrame> {
    let mut df = df;
    for name in non_negative_columns {
        df = drop_negative(df, name)?;
    }
    df = drop_null(df, date_column)?;
    info!(rows = df.height(), "Cleaning complete. {} rows remaining", df.height());
    Ok(df)
}

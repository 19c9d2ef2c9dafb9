use polars::prelude::*;
use tracing::info;

use crate::config::CriticalPolicy;
use crate::error::Result;
use crate::table::{coerce_number, is_blank, lookup, present_columns, ColumnLookup};

/// Replace whitespace-only text cells with null in every text column.
pub fn blank_to_null(mut df: DataFrame) -> Result<DataFrame> {
    let text_columns: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().clone())
        .collect();

    for name in text_columns {
        let values: Vec<Option<String>> = df
            .column(name.as_str())?
            .str()?
            .into_iter()
            .map(|value| value.filter(|s| !is_blank(s)).map(str::to_string))
            .collect();
        df.with_column(Series::new(name, values))?;
    }
    Ok(df)
}

/// Coerce the designated numeric columns to `Float64`; unparseable cells become null.
pub fn coerce_numeric_columns(mut df: DataFrame, numeric_columns: &[String]) -> Result<DataFrame> {
    for name in numeric_columns {
        let coerced = match lookup(&df, name) {
            ColumnLookup::Present(column) => coerce_column(column)?,
            ColumnLookup::Absent => continue,
        };
        df.with_column(coerced)?;
    }
    Ok(df)
}

fn coerce_column(column: &Column) -> Result<Series> {
    let as_text = column.cast(&DataType::String)?;
    let values: Vec<Option<f64>> = as_text
        .str()?
        .into_iter()
        .map(|value| value.and_then(coerce_number))
        .collect();
    Ok(Series::new(column.name().clone(), values))
}

/// Drop rows according to `policy` over the critical columns the table carries.
pub fn drop_missing_critical(
    df: DataFrame,
    critical_columns: &[String],
    policy: CriticalPolicy,
) -> Result<DataFrame> {
    let present = present_columns(&df, critical_columns);
    if present.is_empty() {
        return Ok(df);
    }

    let height = df.height();
    let mut keep = match policy {
        CriticalPolicy::AllMissing => vec![false; height],
        CriticalPolicy::AnyMissing => vec![true; height],
    };
    for column in present {
        let has_value = column.is_not_null();
        for (idx, slot) in keep.iter_mut().enumerate() {
            let value_present = has_value.get(idx).unwrap_or(false);
            match policy {
                CriticalPolicy::AllMissing => *slot |= value_present,
                CriticalPolicy::AnyMissing => *slot &= value_present,
            }
        }
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let filtered = df.filter(&mask)?;
    info!(
        policy = %policy,
        removed = height - filtered.height(),
        "Removed {} rows missing critical values",
        height - filtered.height()
    );
    Ok(filtered)
}

pub fn handle_missing_values(
    df: DataFrame,
    numeric_columns: &[String],
    critical_columns: &[String],
    policy: CriticalPolicy,
) -> Result<DataFrame> {
    let df = blank_to_null(df)?;
    let df = coerce_numeric_columns(df, numeric_columns)?;
    drop_missing_critical(df, critical_columns, policy)
}

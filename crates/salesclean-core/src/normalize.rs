use std::collections::HashSet;

use polars::prelude::*;
use tracing::info;

use crate::error::Result;
use crate::table::{lookup, normalize_column_name, ColumnLookup};

/// Rename every column to its normalized form.
///
/// Two headers collapsing onto the same name is an error.
pub fn normalize_column_names(mut df: DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_column_name(name.as_str()))
        .collect();

    let mut seen = HashSet::with_capacity(names.len());
    if let Some(duplicate) = names.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(PolarsError::Duplicate(
            format!("column '{duplicate}' appears more than once after normalization").into(),
        )
        .into());
    }

    df.set_column_names(names.iter().map(|s| s.as_str()))?;
    Ok(df)
}

/// Trim and lowercase the designated text columns that exist.
pub fn normalize_text_columns(mut df: DataFrame, text_columns: &[String]) -> Result<DataFrame> {
    for name in text_columns {
        let normalized = match lookup(&df, name) {
            ColumnLookup::Present(column) => normalize_text(column)?,
            ColumnLookup::Absent => continue,
        };
        df.with_column(normalized)?;
    }
    Ok(df)
}

fn normalize_text(column: &Column) -> Result<Series> {
    let as_text = column.cast(&DataType::String)?;
    let values: Vec<Option<String>> = as_text
        .str()?
        .into_iter()
        .map(|value| value.map(|s| s.trim().to_lowercase()))
        .collect();
    Ok(Series::new(column.name().clone(), values))
}

pub fn normalize(df: DataFrame, text_columns: &[String]) -> Result<DataFrame> {
    info!("Starting data cleaning process...");
    let df = normalize_column_names(df)?;
    normalize_text_columns(df, text_columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::text_frame;

    fn designated() -> Vec<String> {
        vec!["prodname".to_string(), "category".to_string()]
    }

    #[test]
    fn headers_are_lowercased_trimmed_and_underscored() {
        let df = text_frame(&[
            (" Product Name ", &[Some("x")]),
            ("PRICE", &[Some("1")]),
            ("Date Sold", &[Some("2024-01-01")]),
        ]);

        let df = normalize_column_names(df).unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["product_name", "price", "date_sold"]);
    }

    #[test]
    fn colliding_headers_fail() {
        let df = text_frame(&[("Price", &[Some("1")]), ("price ", &[Some("2")])]);
        assert!(normalize_column_names(df).is_err());
    }

    #[test]
    fn text_columns_are_trimmed_and_lowercased() {
        let df = text_frame(&[
            ("prodname", &[Some("  Big Widget "), None]),
            ("category", &[Some("TOOLS"), Some(" Garden")]),
            ("notes", &[Some("  Keep Me  "), Some("X")]),
        ]);

        let df = normalize_text_columns(df, &designated()).unwrap();
        let prodname = df.column("prodname").unwrap().str().unwrap();
        assert_eq!(prodname.get(0), Some("big widget"));
        assert_eq!(prodname.get(1), None);

        let category = df.column("category").unwrap().str().unwrap();
        assert_eq!(category.get(0), Some("tools"));
        assert_eq!(category.get(1), Some("garden"));

        let notes = df.column("notes").unwrap().str().unwrap();
        assert_eq!(notes.get(0), Some("  Keep Me  "));
    }

    #[test]
    fn non_text_values_are_stringified() {
        let category: Column = Series::new("category".into(), [Some(7i64), None]).into();
        let df = DataFrame::new(vec![category]).unwrap();

        let df = normalize_text_columns(df, &designated()).unwrap();
        let category = df.column("category").unwrap();
        assert_eq!(category.dtype(), &DataType::String);
        assert_eq!(category.str().unwrap().get(0), Some("7"));
    }

    #[test]
    fn absent_text_columns_are_skipped() {
        let df = text_frame(&[("price", &[Some("1")])]);
        let df = normalize(df, &designated()).unwrap();
        assert_eq!(df.width(), 1);
    }
}

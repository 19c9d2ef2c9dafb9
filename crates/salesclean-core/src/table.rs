use polars::prelude::*;

/// Result of looking up a designated column that a table may not carry.
#[derive(Debug, Clone, Copy)]
pub enum ColumnLookup<'a> {
    Present(&'a Column),
    Absent,
}

impl<'a> ColumnLookup<'a> {
    pub fn present(self) -> Option<&'a Column> {
        match self {
            ColumnLookup::Present(column) => Some(column),
            ColumnLookup::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ColumnLookup::Present(_))
    }
}

pub fn lookup<'a>(df: &'a DataFrame, name: &str) -> ColumnLookup<'a> {
    match df.column(name) {
        Ok(column) => ColumnLookup::Present(column),
        Err(_) => ColumnLookup::Absent,
    }
}

/// Designated columns the table actually carries, in designation order.
pub fn present_columns<'a>(df: &'a DataFrame, names: &[String]) -> Vec<&'a Column> {
    names
        .iter()
        .filter_map(|name| lookup(df, name).present())
        .collect()
}

/// Trim, lowercase and replace spaces with underscores.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse a numeric cell; anything unparseable or non-finite becomes `None`.
pub fn coerce_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn text_frame(columns: &[(&str, &[Option<&str>])]) -> DataFrame {
        let columns: Vec<Column> = columns
            .iter()
            .map(|(name, values)| Series::new((*name).into(), values.to_vec()).into())
            .collect();
        DataFrame::new(columns).expect("test frame should build")
    }

    #[test]
    fn normalizes_padded_header() {
        assert_eq!(normalize_column_name(" Product Name "), "product_name");
        assert_eq!(normalize_column_name("QTY"), "qty");
        assert_eq!(normalize_column_name("Date Sold"), "date_sold");
    }

    #[test]
    fn coerces_numbers_leniently() {
        assert_eq!(coerce_number(" 5 "), Some(5.0));
        assert_eq!(coerce_number("-1"), Some(-1.0));
        assert_eq!(coerce_number("2.50"), Some(2.5));
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("NaN"), None);
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("   "), None);
    }

    #[test]
    fn lookup_reports_absent_columns() {
        let df = text_frame(&[("price", &[Some("1")])]);
        assert!(lookup(&df, "price").is_present());
        assert!(!lookup(&df, "qty").is_present());

        let names = vec!["qty".to_string(), "price".to_string()];
        let present = present_columns(&df, &names);
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].name().as_str(), "price");
    }
}

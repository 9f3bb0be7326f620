use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell as read from the input file
// ---------------------------------------------------------------------------

/// A loosely-typed cell, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    /// Anything that did not parse as a number.
    Text(String),
    Missing,
}

/// Pandas' default NA tokens (`read_csv(na_values=None)`).
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

impl CellValue {
    /// Interpret a text field the way the CSV loader does: NA tokens are
    /// missing, numbers are numbers, the rest is text.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if NA_TOKENS.contains(&s) {
            return CellValue::Missing;
        }
        match s.parse::<f64>() {
            Ok(v) => CellValue::from_f64(v),
            Err(_) => CellValue::Text(s.to_string()),
        }
    }

    /// A NaN is a missing value, whatever its spelling or source.
    pub fn from_f64(v: f64) -> Self {
        if v.is_nan() {
            CellValue::Missing
        } else {
            CellValue::Number(v)
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => write!(f, "NaN"),
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – the unvalidated result of a loader
// ---------------------------------------------------------------------------

/// One named column of raw cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawColumn {
    pub name: String,
    pub cells: Vec<CellValue>,
}

/// A table of named columns in file order. Columns may differ in length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<RawColumn>,
}

impl RawTable {
    pub fn new(columns: Vec<RawColumn>) -> Self {
        Self { columns }
    }

    /// Build a table where every cell is present. Handy for tests and
    /// generated data.
    pub fn from_numbers<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Self {
        let columns = columns
            .into_iter()
            .map(|(name, values)| RawColumn {
                name: name.into(),
                cells: values.into_iter().map(CellValue::Number).collect(),
            })
            .collect();
        Self { columns }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Longest column length.
    pub fn num_rows(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Series / Dataset – the validated, typed view
// ---------------------------------------------------------------------------

/// A single named time series. Index = time step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A validated dataset: at least one series, no missing values, unique names.
///
/// Only [`crate::data::validator::validate`] builds one, so every `Dataset`
/// in the program has already passed the structural checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    series: Vec<Series>,
}

impl Dataset {
    pub(crate) fn from_validated(series: Vec<Series>) -> Self {
        Dataset { series }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of series (columns).
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Always false for a validated dataset; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognises_numbers_text_and_missing() {
        assert_eq!(CellValue::parse("1.5"), CellValue::Number(1.5));
        assert_eq!(CellValue::parse(" -2e3 "), CellValue::Number(-2000.0));
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("NaN"), CellValue::Missing);
        assert_eq!(CellValue::parse("NA"), CellValue::Missing);
        assert_eq!(CellValue::parse("abc"), CellValue::Text("abc".into()));
    }

    #[test]
    fn every_nan_spelling_is_missing() {
        for token in ["-nan", "-NaN", "NAN", "+nan", "nan", "+NaN", "-NAN"] {
            assert_eq!(CellValue::parse(token), CellValue::Missing, "{token}");
        }
    }

    #[test]
    fn pandas_na_tokens_are_missing() {
        for token in NA_TOKENS {
            assert_eq!(CellValue::parse(token), CellValue::Missing, "{token}");
        }
        assert_eq!(CellValue::parse("None"), CellValue::Missing);
        assert_eq!(CellValue::parse("#N/A"), CellValue::Missing);
        assert_eq!(CellValue::parse("<NA>"), CellValue::Missing);
    }

    #[test]
    fn infinity_is_still_a_number() {
        assert_eq!(CellValue::parse("inf"), CellValue::Number(f64::INFINITY));
        assert_eq!(CellValue::from_f64(f64::NAN), CellValue::Missing);
    }

    #[test]
    fn num_rows_is_longest_column() {
        let table = RawTable::from_numbers(vec![("a", vec![1.0]), ("b", vec![1.0, 2.0, 3.0])]);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.column_names(), vec!["a", "b"]);
    }
}

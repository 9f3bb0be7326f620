//! Structural checks that gate the analysis.
//!
//! Validation is fail-fast and all-or-nothing: the first problem found
//! rejects the whole table. Checks run in this order:
//!
//! 1. the table has at least one column,
//! 2. column names are unique,
//! 3. for each column in file order: it has at least one row, then each
//!    cell in row order is present and numeric.
//!
//! Numbers pass through untouched. Nothing is filled, coerced or dropped.

use std::collections::HashSet;

use thiserror::Error;

use super::model::{CellValue, Dataset, RawTable, Series};

/// Why a table was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("No valid time series found in the input data.")]
    EmptySchema,

    #[error("Data contains missing values (column '{column}', row {row}).")]
    MissingValue { column: String, row: usize },

    #[error("Column '{column}' row {row}: '{value}' is not a number.")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Column name '{column}' appears more than once.")]
    DuplicateColumn { column: String },

    #[error("Column '{column}' has no values.")]
    EmptySeries { column: String },
}

/// Check `table` and return it as a typed [`Dataset`].
pub fn validate(table: &RawTable) -> Result<Dataset, ValidationError> {
    if table.columns.is_empty() {
        return Err(ValidationError::EmptySchema);
    }

    let mut seen = HashSet::with_capacity(table.columns.len());
    for col in &table.columns {
        if !seen.insert(col.name.as_str()) {
            return Err(ValidationError::DuplicateColumn {
                column: col.name.clone(),
            });
        }
    }

    let mut series = Vec::with_capacity(table.columns.len());
    for col in &table.columns {
        if col.cells.is_empty() {
            return Err(ValidationError::EmptySeries {
                column: col.name.clone(),
            });
        }

        let values = col
            .cells
            .iter()
            .enumerate()
            .map(|(row, cell)| match cell {
                CellValue::Number(v) => Ok(*v),
                CellValue::Missing => Err(ValidationError::MissingValue {
                    column: col.name.clone(),
                    row,
                }),
                CellValue::Text(s) => Err(ValidationError::NonNumeric {
                    column: col.name.clone(),
                    row,
                    value: s.clone(),
                }),
            })
            .collect::<Result<Vec<f64>, _>>()?;

        series.push(Series::new(col.name.clone(), values));
    }

    log::debug!(
        "Validated {} series: {:?}",
        series.len(),
        series.iter().map(|s| s.name.as_str()).collect::<Vec<_>>()
    );

    Ok(Dataset::from_validated(series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RawColumn;

    fn column(name: &str, cells: Vec<CellValue>) -> RawColumn {
        RawColumn {
            name: name.to_string(),
            cells,
        }
    }

    #[test]
    fn accepts_clean_table_unchanged() {
        let table = RawTable::from_numbers(vec![("a", vec![1.0, 2.0]), ("b", vec![-0.5])]);
        let ds = validate(&table).unwrap();
        assert_eq!(ds.column_names(), vec!["a", "b"]);
        assert_eq!(ds.series()[0].values, vec![1.0, 2.0]);
        assert_eq!(ds.series()[1].values, vec![-0.5]);
    }

    #[test]
    fn rejects_zero_columns() {
        assert_eq!(
            validate(&RawTable::default()),
            Err(ValidationError::EmptySchema)
        );
    }

    #[test]
    fn missing_cell_rejects_whole_table() {
        let table = RawTable::new(vec![
            column("good", vec![CellValue::Number(1.0), CellValue::Number(2.0)]),
            column("bad", vec![CellValue::Number(1.0), CellValue::Missing]),
        ]);
        assert_eq!(
            validate(&table),
            Err(ValidationError::MissingValue {
                column: "bad".into(),
                row: 1
            })
        );
    }

    #[test]
    fn text_cell_is_rejected_not_coerced() {
        let table = RawTable::new(vec![column(
            "a",
            vec![CellValue::Number(1.0), CellValue::Text("x".into())],
        )]);
        assert!(matches!(
            validate(&table),
            Err(ValidationError::NonNumeric { row: 1, .. })
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let table = RawTable::from_numbers(vec![("a", vec![1.0]), ("a", vec![2.0])]);
        assert_eq!(
            validate(&table),
            Err(ValidationError::DuplicateColumn { column: "a".into() })
        );
    }

    #[test]
    fn empty_column_is_rejected() {
        let table = RawTable::from_numbers(vec![("a", vec![1.0]), ("b", vec![])]);
        assert_eq!(
            validate(&table),
            Err(ValidationError::EmptySeries { column: "b".into() })
        );
    }
}

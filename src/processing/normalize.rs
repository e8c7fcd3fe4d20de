//! Missing-value normalization.

use crate::types::{DataSet, Value};

use super::reduce::mode_of;

/// How many cells were filled in one column, and with what.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFill {
    pub column: String,
    pub filled: usize,
    /// The column mode used as replacement; `None` if the column had no values at all.
    pub value: Option<Value>,
}

/// Replace nulls in each of `columns` with that column's mode.
///
/// The mode is computed over the non-null values of the same column, ties broken by first
/// occurrence. Columns missing from the schema are skipped. A column with no non-null values is
/// left untouched. Row count and order never change.
pub fn fill_missing_with_mode(mut dataset: DataSet, columns: &[&str]) -> (DataSet, Vec<ColumnFill>) {
    let mut fills = Vec::new();
    for &column in columns {
        let Some(idx) = dataset.schema.index_of(column) else {
            continue;
        };
        let replacement = mode_of(dataset.rows.iter().map(|row| &row[idx])).cloned();

        let mut filled = 0;
        if let Some(value) = &replacement {
            for row in dataset.rows.iter_mut().filter(|row| row[idx].is_null()) {
                row[idx] = value.clone();
                filled += 1;
            }
        }
        fills.push(ColumnFill {
            column: column.to_string(),
            filled,
            value: replacement,
        });
    }
    (dataset, fills)
}

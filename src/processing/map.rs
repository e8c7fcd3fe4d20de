//! Derived columns for [`crate::types::DataSet`].

use crate::types::{DataSet, Field, Schema, Value};

/// Consumes `dataset` and appends `fields` to its schema, filling them per row with `derive`.
///
/// Existing values are moved, not cloned, and row order is kept.
///
/// # Panics
///
/// Panics if `derive` returns a different number of values than `fields.len()`.
pub fn append_columns<F>(dataset: DataSet, fields: Vec<Field>, mut derive: F) -> DataSet
where
    F: FnMut(&[Value]) -> Vec<Value>,
{
    let added = fields.len();
    let mut schema_fields = dataset.schema.fields;
    schema_fields.extend(fields);

    let rows = dataset
        .rows
        .into_iter()
        .map(|mut row| {
            let extra = derive(row.as_slice());
            assert!(
                extra.len() == added,
                "derived value count {} does not match appended field count {}",
                extra.len(),
                added
            );
            row.extend(extra);
            row
        })
        .collect();

    DataSet::new(Schema::new(schema_fields), rows)
}

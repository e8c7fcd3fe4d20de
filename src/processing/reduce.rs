//! Reduction operations for [`crate::types::DataSet`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::types::{DataSet, DataType, GroupKey, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum numeric values, ignoring nulls.
    Sum,
    /// Arithmetic mean of numeric values, ignoring nulls. Always `Float64`.
    Mean,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - For `Sum`/`Mean`/`Min`/`Max`, returns `Some(Value::Null)` if there are no non-null values.
pub fn reduce(dataset: &DataSet, column: &str, op: ReduceOp) -> Option<Value> {
    let idx = dataset.schema.index_of(column)?;
    let data_type = dataset.schema.fields[idx].data_type;

    match op {
        ReduceOp::Mean => {
            let (sum, n) = dataset.reduce_rows((0.0_f64, 0_usize), |(sum, n), row| {
                match row[idx].as_f64() {
                    Some(v) => (sum + v, n + 1),
                    None => (sum, n),
                }
            });
            Some(if n == 0 {
                Value::Null
            } else {
                Value::Float64(sum / n as f64)
            })
        }
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => {
            Some(reduce_numeric_typed(dataset, idx, data_type, op))
        }
    }
}

fn reduce_numeric_typed(dataset: &DataSet, idx: usize, data_type: DataType, op: ReduceOp) -> Value {
    match data_type {
        DataType::Int64 => {
            let acc = fold_numeric(dataset, idx, Value::as_i64, op, |a, b| a + b, i64::min, i64::max);
            acc.map_or(Value::Null, Value::Int64)
        }
        DataType::Float64 => {
            let acc = fold_numeric(dataset, idx, Value::as_f64, op, |a, b| a + b, f64::min, f64::max);
            acc.map_or(Value::Null, Value::Float64)
        }
        DataType::Utf8 | DataType::Timestamp => Value::Null,
    }
}

fn fold_numeric<T: Copy>(
    dataset: &DataSet,
    idx: usize,
    extract: fn(&Value) -> Option<T>,
    op: ReduceOp,
    sum: fn(T, T) -> T,
    min: fn(T, T) -> T,
    max: fn(T, T) -> T,
) -> Option<T> {
    let combine = match op {
        ReduceOp::Sum => sum,
        ReduceOp::Min => min,
        ReduceOp::Max => max,
        ReduceOp::Mean => unreachable!("non-folding op handled by caller"),
    };
    dataset.reduce_rows(None, |acc, row| match (acc, extract(&row[idx])) {
        (Some(a), Some(v)) => Some(combine(a, v)),
        (None, Some(v)) => Some(v),
        (acc, None) => acc,
    })
}

/// Most frequent non-null value of `values`; ties go to the value encountered first.
///
/// Returns `None` when there is no non-null value.
pub fn mode_of<'a, I>(values: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    // key -> (count, first position)
    let mut counts: HashMap<GroupKey<'a>, (usize, usize)> = HashMap::new();
    for (pos, value) in values.into_iter().enumerate() {
        if value.is_null() {
            continue;
        }
        counts.entry(GroupKey(value)).or_insert((0, pos)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
        .map(|(key, _)| key.0)
}

/// Mode of a column; `None` when the column is missing or holds no non-null value.
pub fn mode(dataset: &DataSet, column: &str) -> Option<Value> {
    mode_of(dataset.column(column)?).cloned()
}

/// Per-value counts of non-null entries, in first-encounter order.
pub fn value_counts<'a, I>(values: I) -> Vec<(&'a Value, usize)>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut slots: HashMap<GroupKey<'a>, usize> = HashMap::new();
    let mut out: Vec<(&'a Value, usize)> = Vec::new();
    for value in values.into_iter().filter(|v| !v.is_null()) {
        match slots.entry(GroupKey(value)) {
            Entry::Occupied(e) => out[*e.get()].1 += 1,
            Entry::Vacant(e) => {
                e.insert(out.len());
                out.push((value, 1));
            }
        }
    }
    out
}

/// The most frequent `(first, second)` combination across rows, with its count.
///
/// Ties go to the pair that reached the winning count first in row order. Rows where either
/// value is null are skipped. Returns `None` if a column is missing or no pair was counted.
pub fn most_common_pair(dataset: &DataSet, first: &str, second: &str) -> Option<(Value, Value, usize)> {
    let a = dataset.schema.index_of(first)?;
    let b = dataset.schema.index_of(second)?;

    let mut counts: HashMap<(GroupKey<'_>, GroupKey<'_>), usize> = HashMap::new();
    let mut best: Option<(&Value, &Value, usize)> = None;
    for row in &dataset.rows {
        let (x, y) = (&row[a], &row[b]);
        if x.is_null() || y.is_null() {
            continue;
        }
        let count = counts.entry((GroupKey(x), GroupKey(y))).or_insert(0);
        *count += 1;
        if best.is_none_or(|(_, _, top)| *count > top) {
            best = Some((x, y, *count));
        }
    }
    best.map(|(x, y, n)| (x.clone(), y.clone(), n))
}

//! Row filtering for [`crate::types::DataSet`].

use std::borrow::Cow;

use crate::columns;
use crate::selector::{weekday_name, DayFilter, MonthFilter};
use crate::types::{DataSet, Value};

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[Value]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Keep the rows whose derived `Month` and `Day` match the selected month and weekday.
///
/// `All` on either side places no constraint on that column. With both set to `All` the input
/// is returned borrowed, without copying. The input is never modified and row order is kept.
/// If a constrained column is missing from the schema, no row matches.
pub fn filter_by_period(dataset: &DataSet, month: MonthFilter, day: DayFilter) -> Cow<'_, DataSet> {
    if month == MonthFilter::All && day == DayFilter::All {
        return Cow::Borrowed(dataset);
    }

    let month_idx = dataset.schema.index_of(columns::MONTH);
    let day_idx = dataset.schema.index_of(columns::DAY);

    let out = dataset.filter_rows(|row| {
        let month_ok = match month {
            MonthFilter::All => true,
            MonthFilter::Month(m) => {
                month_idx.is_some_and(|i| row[i].as_i64() == Some(i64::from(m)))
            }
        };
        let day_ok = match day {
            DayFilter::All => true,
            DayFilter::Day(d) => day_idx.is_some_and(|i| row[i].as_str() == Some(weekday_name(d))),
        };
        month_ok && day_ok
    });
    Cow::Owned(out)
}

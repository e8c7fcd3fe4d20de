//! One analysis run: load → normalize → filter → aggregate.

use crate::columns::DEMOGRAPHIC_COLUMNS;
use crate::config::DataConfig;
use crate::error::BikeshareResult;
use crate::ingestion::{load_city, LoadOptions};
use crate::processing::{fill_missing_with_mode, filter_by_period};
use crate::report::Report;
use crate::selector::Selector;
use crate::types::DataSet;

/// Fill missing demographic values with each column's mode.
///
/// Columns the source does not carry are skipped.
pub fn normalize_demographics(dataset: DataSet) -> DataSet {
    let (dataset, fills) = fill_missing_with_mode(dataset, &DEMOGRAPHIC_COLUMNS);
    for fill in fills.iter().filter(|f| f.filled > 0) {
        log::info!(
            "normalized column={} filled={} value={}",
            fill.column,
            fill.filled,
            fill.value
                .as_ref()
                .map_or_else(|| "null".to_string(), ToString::to_string)
        );
    }
    dataset
}

/// Run the whole pipeline for `selector` and build its [`Report`].
///
/// A fresh dataset is loaded on every call; nothing is cached between runs.
pub fn run(config: &DataConfig, selector: &Selector, options: &LoadOptions) -> BikeshareResult<Report> {
    let source = config.source(selector.city)?;
    let mut trips = load_city(config, selector.city, options)?;
    log::debug!("loaded city={} rows={}", selector.city, trips.row_count());

    if source.demographics {
        trips = normalize_demographics(trips);
    }

    let selected = filter_by_period(&trips, selector.month, selector.day);
    log::info!(
        "filtered city={} month={} day={} rows={}/{}",
        selector.city,
        selector.month,
        selector.day,
        selected.row_count(),
        trips.row_count()
    );

    Ok(Report::from_dataset(*selector, &selected))
}

//! Trip dataset loader.
//!
//! Most callers should use [`load_city`], which resolves the city's source through a
//! [`DataConfig`], reads it into a [`DataSet`] and appends the derived calendar columns
//! (`Start Hour`, `End Hour`, `Month`, `Day`).
//!
//! If an [`LoadObserver`] is provided through [`LoadOptions`], success/failure/alerts are
//! reported to it.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use chrono::{Datelike, Timelike};

use crate::columns;
use crate::config::DataConfig;
use crate::error::{BikeshareError, BikeshareResult};
use crate::processing::map::append_columns;
use crate::selector::{weekday_name, City};
use crate::types::{DataSet, Value};

use super::csv::ingest_csv_from_reader;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling load behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a city's trips as configured in `config`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Errors
///
/// - [`BikeshareError::CityNotConfigured`] if `config` has no entry for `city`
/// - [`BikeshareError::SourceNotFound`] if the source file cannot be opened
/// - [`BikeshareError::SchemaMismatch`] if a required column is missing
/// - [`BikeshareError::ParseError`] for malformed timestamps, numbers or negative durations
///
/// ```no_run
/// use bikeshare_stats::config::DataConfig;
/// use bikeshare_stats::ingestion::{load_city, LoadOptions};
/// use bikeshare_stats::selector::City;
///
/// # fn main() -> Result<(), bikeshare_stats::BikeshareError> {
/// let cfg = DataConfig::with_data_dir("data");
/// let trips = load_city(&cfg, City::Chicago, &LoadOptions::default())?;
/// println!("rows={}", trips.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_city(
    config: &DataConfig,
    city: City,
    options: &LoadOptions,
) -> BikeshareResult<DataSet> {
    let path = config.path_for(city)?;
    let ctx = LoadContext {
        city,
        path: path.clone(),
    };

    let result = load_trips_from_path(city, &path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(&ctx, LoadStats { rows: ds.row_count() }),
            Err(e) => {
                let sev = LoadSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Load a trip CSV file for `city` (the city is only used for error reporting).
pub fn load_trips_from_path(city: City, path: &Path) -> BikeshareResult<DataSet> {
    let file = File::open(path).map_err(|source| BikeshareError::SourceNotFound {
        city,
        path: path.to_path_buf(),
        source,
    })?;
    load_trips_from_reader(file)
}

/// Load trip CSV data from any reader and append the derived columns.
pub fn load_trips_from_reader<R: Read>(reader: R) -> BikeshareResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let raw = ingest_csv_from_reader(&mut rdr, &columns::trip_schema())?;
    check_durations(&raw)?;
    Ok(with_derived_columns(raw))
}

fn check_durations(dataset: &DataSet) -> BikeshareResult<()> {
    let Some(durations) = dataset.column(columns::TRIP_DURATION) else {
        return Ok(());
    };
    for (i, value) in durations.enumerate() {
        if value.as_f64().is_some_and(|d| !d.is_finite() || d < 0.0) {
            return Err(BikeshareError::ParseError {
                row: i + 2,
                column: columns::TRIP_DURATION.to_string(),
                raw: value.to_string(),
                message: "trip duration must be a finite, non-negative number".to_string(),
            });
        }
    }
    Ok(())
}

/// Append `Start Hour`, `End Hour`, `Month` and `Day`.
///
/// Month and weekday come from the start time; each hour from its own timestamp.
fn with_derived_columns(dataset: DataSet) -> DataSet {
    let start_idx = dataset.schema.index_of(columns::START_TIME);
    let end_idx = dataset.schema.index_of(columns::END_TIME);

    append_columns(dataset, columns::derived_fields(), |row| {
        let start = start_idx.and_then(|i| row[i].as_timestamp());
        let end = end_idx.and_then(|i| row[i].as_timestamp());
        match start {
            Some(start) => vec![
                Value::Int64(i64::from(start.hour())),
                end.map_or(Value::Null, |e| Value::Int64(i64::from(e.hour()))),
                Value::Int64(i64::from(start.month())),
                Value::Utf8(weekday_name(start.weekday()).to_string()),
            ],
            None => vec![Value::Null; 4],
        }
    })
}

//! The four trip statistics queries.
//!
//! Each query is read-only and total: an empty dataset yields zero counts and `None` for
//! undefined values, and a missing optional column yields `None` for its sub-report.

use serde::{Serialize, Serializer};

use crate::columns;
use crate::processing::{mode, most_common_pair, reduce, value_counts, ReduceOp};
use crate::types::{DataSet, Value};

/// Divisor converting `Trip Duration` seconds to hours.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// User type categories always present in the counts, even at zero.
pub const USER_TYPES: [&str; 2] = ["Subscriber", "Customer"];

/// Gender categories always present in the counts, even at zero.
pub const GENDERS: [&str; 2] = ["Male", "Female"];

/// Total mapping from category to row count.
///
/// Seeded categories come first; other observed categories follow in encounter order. Looking
/// up a category that never occurred yields zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts(Vec<(String, usize)>);

impl CategoryCounts {
    fn tally<'a>(seed: &[&str], values: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut counts: Vec<(String, usize)> = seed.iter().map(|c| (c.to_string(), 0)).collect();
        for (value, n) in value_counts(values) {
            let name = value.to_string();
            match counts.iter_mut().find(|(c, _)| *c == name) {
                Some(slot) => slot.1 += n,
                None => counts.push((name, n)),
            }
        }
        Self(counts)
    }

    /// Count for `category`, zero if it never occurred.
    pub fn get(&self, category: &str) -> usize {
        self.0
            .iter()
            .find(|(c, _)| c == category)
            .map_or(0, |(_, n)| *n)
    }

    /// Categories with their counts, seeded ones first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(c, n)| (c.as_str(), *n))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, n)| n).sum()
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularTrip {
    pub start: String,
    pub end: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    pub most_common_trip: Option<PopularTrip>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_hours: f64,
    /// `None` when there are no trips.
    pub mean_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TimeStats {
    /// 1-based month number.
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<String>,
    pub most_common_start_hour: Option<u32>,
    pub most_common_end_hour: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BirthYearStats {
    pub most_common: Option<i64>,
    pub earliest: Option<i64>,
    pub most_recent: Option<i64>,
}

/// User demographics. Each field is `None` when the source lacks the column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UserStats {
    pub user_types: Option<CategoryCounts>,
    pub genders: Option<CategoryCounts>,
    pub birth_years: Option<BirthYearStats>,
}

fn mode_string(dataset: &DataSet, column: &str) -> Option<String> {
    mode(dataset, column).map(|v| v.to_string())
}

fn mode_u32(dataset: &DataSet, column: &str) -> Option<u32> {
    mode(dataset, column)
        .and_then(|v| v.as_i64())
        .and_then(|v| u32::try_from(v).ok())
}

/// Most common start station, end station and start/end combination.
pub fn station_stats(dataset: &DataSet) -> StationStats {
    StationStats {
        most_common_start: mode_string(dataset, columns::START_STATION),
        most_common_end: mode_string(dataset, columns::END_STATION),
        most_common_trip: most_common_pair(dataset, columns::START_STATION, columns::END_STATION)
            .map(|(start, end, count)| PopularTrip {
                start: start.to_string(),
                end: end.to_string(),
                count,
            }),
    }
}

/// Total and mean trip duration in hours.
pub fn trip_duration_stats(dataset: &DataSet) -> DurationStats {
    let total_seconds = reduce(dataset, columns::TRIP_DURATION, ReduceOp::Sum)
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let mean_seconds =
        reduce(dataset, columns::TRIP_DURATION, ReduceOp::Mean).and_then(|v| v.as_f64());

    DurationStats {
        trips: dataset.row_count(),
        total_hours: total_seconds / SECONDS_PER_HOUR,
        mean_hours: mean_seconds.map(|s| s / SECONDS_PER_HOUR),
    }
}

/// Most common month, weekday, start hour and end hour.
pub fn time_stats(dataset: &DataSet) -> TimeStats {
    TimeStats {
        most_common_month: mode_u32(dataset, columns::MONTH),
        most_common_day: mode_string(dataset, columns::DAY),
        most_common_start_hour: mode_u32(dataset, columns::START_HOUR),
        most_common_end_hour: mode_u32(dataset, columns::END_HOUR),
    }
}

/// User type and gender counts, and birth year statistics, for the columns the source has.
pub fn user_stats(dataset: &DataSet) -> UserStats {
    let birth_years = dataset.column(columns::BIRTH_YEAR).map(|_| BirthYearStats {
        most_common: mode(dataset, columns::BIRTH_YEAR).and_then(|v| v.as_i64()),
        earliest: reduce(dataset, columns::BIRTH_YEAR, ReduceOp::Min).and_then(|v| v.as_i64()),
        most_recent: reduce(dataset, columns::BIRTH_YEAR, ReduceOp::Max).and_then(|v| v.as_i64()),
    });

    UserStats {
        user_types: dataset
            .column(columns::USER_TYPE)
            .map(|values| CategoryCounts::tally(&USER_TYPES, values)),
        genders: dataset
            .column(columns::GENDER)
            .map(|values| CategoryCounts::tally(&GENDERS, values)),
        birth_years,
    }
}

//! Rendering of the statistics as the four-section text report.

use std::fmt::{self, Display};
use std::io::{self, Write};

use serde::Serialize;

use crate::selector::{month_name, Selector};
use crate::stats::{self, DurationStats, StationStats, TimeStats, UserStats};
use crate::types::DataSet;

const BANNER_WIDTH: usize = 50;
const NO_DATA: &str = "no data";

/// Statistics for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub selector: Selector,
    /// Rows left after filtering.
    pub rows: usize,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub times: TimeStats,
    pub users: UserStats,
}

impl Report {
    /// Run all four queries over an already filtered dataset.
    pub fn from_dataset(selector: Selector, dataset: &DataSet) -> Self {
        Self {
            selector,
            rows: dataset.row_count(),
            stations: stats::station_stats(dataset),
            durations: stats::trip_duration_stats(dataset),
            times: stats::time_stats(dataset),
            users: stats::user_stats(dataset),
        }
    }
}

/// How a [`Report`] is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Banner-sectioned console text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Write `report` to `out` in the chosen format.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

struct OrNoData<T>(Option<T>);

impl<T: Display> Display for OrNoData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => Display::fmt(v, f),
            None => f.write_str(NO_DATA),
        }
    }
}

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let dots = ".".repeat(BANNER_WIDTH);
    writeln!(f, "\n{dots}\n{title}\n{dots}\n")
}

impl Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "The most popular stations and trip.")?;
        match &self.most_common_start {
            Some(s) => writeln!(f, "The most popular starting point is : {s} station\n")?,
            None => writeln!(f, "The most popular starting point is : {NO_DATA}\n")?,
        }
        match &self.most_common_end {
            Some(s) => writeln!(f, "The most popular ending point is : {s} station\n")?,
            None => writeln!(f, "The most popular ending point is : {NO_DATA}\n")?,
        }
        match &self.most_common_trip {
            Some(t) => writeln!(
                f,
                "The most common trip is : a trip from {} to {}, {} times\n",
                t.start, t.end, t.count
            ),
            None => writeln!(f, "The most common trip is : {NO_DATA}\n"),
        }
    }
}

impl Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "The total and average trip duration.")?;
        writeln!(f, "Total trip duration is {} hours\n", self.total_hours)?;
        match self.mean_hours {
            Some(h) => writeln!(f, "Average trip duration is {h} hours\n"),
            None => writeln!(f, "Average trip duration is {NO_DATA}\n"),
        }
    }
}

impl Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "The most frequent times of travel.")?;
        let month = self.most_common_month.and_then(month_name);
        writeln!(f, "The most common month is {}\n", OrNoData(month))?;
        writeln!(
            f,
            "The most common day of week is {}\n",
            OrNoData(self.most_common_day.as_deref())
        )?;
        writeln!(
            f,
            "The most common start hour is {}\n",
            OrNoData(self.most_common_start_hour)
        )?;
        writeln!(
            f,
            "The most common end hour is {}\n",
            OrNoData(self.most_common_end_hour)
        )
    }
}

impl Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "Bikeshare users statistics")?;

        if let Some(types) = &self.user_types {
            writeln!(f, "The quantity of each user type.")?;
            for (name, n) in types.iter() {
                writeln!(f, "\t{name} : {n}")?;
            }
            writeln!(f)?;
        }

        if let Some(genders) = &self.genders {
            writeln!(f, "The quantity of each gender.")?;
            for (name, n) in genders.iter() {
                writeln!(f, "\t{name} : {n}")?;
            }
            writeln!(f)?;
        }

        if let Some(years) = &self.birth_years {
            writeln!(f, "The most common birth year is {}\n", OrNoData(years.most_common))?;
            writeln!(f, "The earliest birth year is {}\n", OrNoData(years.earliest))?;
            writeln!(f, "The most recent birth year is {}\n", OrNoData(years.most_recent))?;
        }
        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sel = &self.selector;
        writeln!(
            f,
            "{} trips (city: {}, month: {}, day: {})",
            self.rows, sel.city, sel.month, sel.day
        )?;
        write!(f, "{}{}{}{}", self.stations, self.durations, self.times, self.users)
    }
}

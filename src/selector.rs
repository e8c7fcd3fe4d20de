//! Analysis selectors and their validation.
//!
//! A [`Selector`] is the validated `(city, month, day)` triple that drives one analysis run.
//! Parsing is pure: each `parse` returns a typed value or a [`SelectorError`], and the caller
//! decides whether to re-prompt (see [`crate::prompt`]).

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Full English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Months that may be selected as a filter. The published trip data covers January to June.
pub const SELECTABLE_MONTHS: std::ops::RangeInclusive<u32> = 1..=6;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name, as stored in the derived `Day` column.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(idx).copied()
}

/// Rejected user input for one of the selector parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("unknown city '{0}' (expected Chicago, New York City or Washington)")]
    InvalidCity(String),
    #[error("invalid month '{0}' (expected January to June, or skip)")]
    InvalidMonth(String),
    #[error("invalid day '{0}' (expected a full weekday name, or skip)")]
    InvalidDay(String),
}

fn is_no_filter(input: &str) -> bool {
    input.eq_ignore_ascii_case("skip") || input.eq_ignore_ascii_case("all")
}

/// One of the three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Case-insensitive city lookup. `"new york"` is accepted for New York City.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new york" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(SelectorError::InvalidCity(input.trim().to_string())),
        }
    }

    /// Display name, e.g. `New York City`.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::parse(s)
    }
}

/// Month part of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    /// 1-based month number, within [`SELECTABLE_MONTHS`].
    Month(u32),
}

impl MonthFilter {
    /// Accepts a full month name (January to June, any case) or `skip`/`all`.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if is_no_filter(input) {
            return Ok(MonthFilter::All);
        }
        SELECTABLE_MONTHS
            .zip(MONTH_NAMES)
            .find(|(_, name)| name.eq_ignore_ascii_case(input))
            .map(|(n, _)| MonthFilter::Month(n))
            .ok_or_else(|| SelectorError::InvalidMonth(input.to_string()))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(n) => f.write_str(month_name(*n).unwrap_or("unknown")),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonthFilter::parse(s)
    }
}

impl Serialize for MonthFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Weekday part of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Accepts a full weekday name (any case) or `skip`/`all`.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if is_no_filter(input) {
            return Ok(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(input))
            .map(DayFilter::Day)
            .ok_or_else(|| SelectorError::InvalidDay(input.to_string()))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => f.write_str(weekday_name(*d)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayFilter::parse(s)
    }
}

impl Serialize for DayFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Validated `(city, month, day)` triple for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selector {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selector {
    /// Selector from already validated parts.
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Selector covering every trip of a city.
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }

    /// Validate all three raw inputs at once.
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self, SelectorError> {
        Ok(Self::new(
            City::parse(city)?,
            MonthFilter::parse(month)?,
            DayFilter::parse(day)?,
        ))
    }
}

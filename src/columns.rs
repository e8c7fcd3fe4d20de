//! Column names of the trip tables and the schema they are loaded with.

use crate::types::{DataType, Field, Schema};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

// Derived at load time.
pub const START_HOUR: &str = "Start Hour";
pub const END_HOUR: &str = "End Hour";
pub const MONTH: &str = "Month";
pub const DAY: &str = "Day";

/// Demographic columns; present only in some sources and possibly sparse.
pub const DEMOGRAPHIC_COLUMNS: [&str; 3] = [USER_TYPE, GENDER, BIRTH_YEAR];

/// Schema for reading a raw trip CSV.
pub fn trip_schema() -> Schema {
    Schema::new(vec![
        Field::new(START_TIME, DataType::Timestamp),
        Field::new(END_TIME, DataType::Timestamp),
        Field::new(TRIP_DURATION, DataType::Float64),
        Field::new(START_STATION, DataType::Utf8),
        Field::new(END_STATION, DataType::Utf8),
        Field::optional(USER_TYPE, DataType::Utf8),
        Field::optional(GENDER, DataType::Utf8),
        Field::optional(BIRTH_YEAR, DataType::Int64),
    ])
}

/// Fields appended by the loader, in order.
pub fn derived_fields() -> Vec<Field> {
    vec![
        Field::new(START_HOUR, DataType::Int64),
        Field::new(END_HOUR, DataType::Int64),
        Field::new(MONTH, DataType::Int64),
        Field::new(DAY, DataType::Utf8),
    ]
}

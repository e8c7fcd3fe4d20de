use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use bikeshare_stats::columns;
use bikeshare_stats::ingestion::{load_trips_from_path, load_trips_from_reader};
use bikeshare_stats::selector::City;
use bikeshare_stats::types::{DataType, Value};
use bikeshare_stats::BikeshareError;

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("bikeshare-stats-loading-{nanos}.{ext}"))
}

#[test]
fn load_chicago_fixture_with_demographics_and_derived_columns() {
    let ds = load_trips_from_path(City::Chicago, Path::new("tests/fixtures/chicago.csv")).unwrap();

    assert_eq!(ds.row_count(), 10);
    assert_eq!(
        ds.schema.field_names().collect::<Vec<_>>(),
        vec![
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
            "Gender",
            "Birth Year",
            "Start Hour",
            "End Hour",
            "Month",
            "Day",
        ]
    );

    let by = ds.schema.index_of(columns::BIRTH_YEAR).unwrap();
    assert_eq!(ds.schema.fields[by].data_type, DataType::Int64);
    assert_eq!(ds.rows[0][by], Value::Int64(1985));
    assert_eq!(ds.rows[2][by], Value::Null);

    let day = ds.schema.index_of(columns::DAY).unwrap();
    assert_eq!(ds.rows[9][day], Value::Utf8("Monday".to_string()));
}

#[test]
fn load_washington_fixture_without_gender_or_birth_year() {
    let ds =
        load_trips_from_path(City::Washington, Path::new("tests/fixtures/washington.csv")).unwrap();

    assert_eq!(ds.row_count(), 3);
    assert!(ds.schema.contains(columns::USER_TYPE));
    assert!(!ds.schema.contains(columns::GENDER));
    assert!(!ds.schema.contains(columns::BIRTH_YEAR));

    let durations: Vec<_> = ds.column(columns::TRIP_DURATION).unwrap().cloned().collect();
    assert_eq!(durations[0], Value::Float64(489.066));
}

#[test]
fn missing_source_is_source_not_found() {
    let err = load_trips_from_path(City::NewYorkCity, Path::new("tests/fixtures/nope.csv"))
        .unwrap_err();
    match err {
        BikeshareError::SourceNotFound { city, path, .. } => {
            assert_eq!(city, City::NewYorkCity);
            assert_eq!(path, PathBuf::from("tests/fixtures/nope.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_timestamp_is_parse_error() {
    let err = load_trips_from_path(City::Chicago, Path::new("tests/fixtures/bad_timestamp.csv"))
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"), "{msg}");
    assert!(msg.contains("row 3"), "{msg}");
    assert!(msg.contains("column 'Start Time'"), "{msg}");
}

#[test]
fn load_from_temp_file_and_reader_agree() {
    let csv = "Start Time,End Time,Trip Duration,Start Station,End Station\n\
               2017-02-14 23:59:00,2017-02-15 00:09:00,600,A,B\n";
    let path = tmp_file("csv");
    std::fs::write(&path, csv).unwrap();

    let from_path = load_trips_from_path(City::Chicago, &path).unwrap();
    let from_reader = load_trips_from_reader(csv.as_bytes()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(from_path, from_reader);
    // Trip crosses midnight: end hour comes from the end time.
    let start_hour = from_path.schema.index_of(columns::START_HOUR).unwrap();
    let end_hour = from_path.schema.index_of(columns::END_HOUR).unwrap();
    assert_eq!(from_path.rows[0][start_hour], Value::Int64(23));
    assert_eq!(from_path.rows[0][end_hour], Value::Int64(0));
}

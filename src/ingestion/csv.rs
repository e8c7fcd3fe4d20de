//! CSV ingestion implementation.

use chrono::NaiveDateTime;

use crate::error::{BikeshareError, BikeshareResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Timestamp layouts accepted for [`DataType::Timestamp`] columns.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Ingest CSV data from an existing CSV reader.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all required schema fields (order can differ).
/// - Optional schema fields missing from the headers are left out of the resulting schema.
/// - Columns not named by the schema are ignored.
/// - Each value is parsed according to the schema field type; empty cells become
///   [`Value::Null`], which is an error for required fields.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
) -> BikeshareResult<DataSet> {
    let headers = rdr.headers()?.clone();

    // Map schema fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut present: Vec<(Field, usize)> = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        match headers.iter().position(|h| h.trim() == field.name) {
            Some(idx) => present.push((field.clone(), idx)),
            None if field.required => {
                return Err(BikeshareError::SchemaMismatch {
                    message: format!(
                        "missing required column '{field}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>(),
                        field = field.name
                    ),
                });
            }
            None => log::debug!("optional column '{}' not present", field.name),
        }
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let mut row: Vec<Value> = Vec::with_capacity(present.len());
        for (field, csv_idx) in &present {
            let raw = record.get(*csv_idx).unwrap_or("");
            let value = parse_typed_value(user_row, &field.name, field.data_type, raw)?;
            if value.is_null() && field.required {
                return Err(BikeshareError::ParseError {
                    row: user_row,
                    column: field.name.clone(),
                    raw: raw.to_owned(),
                    message: "missing value in required column".to_string(),
                });
            }
            row.push(value);
        }
        rows.push(row);
    }

    let fields = present.into_iter().map(|(field, _)| field).collect();
    Ok(DataSet::new(Schema::new(fields), rows))
}

fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
) -> BikeshareResult<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    let parse_error = |message: String| BikeshareError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(trimmed.to_owned())),
        DataType::Int64 => parse_int(trimmed).map(Value::Int64).map_err(parse_error),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Timestamp => parse_timestamp(trimmed)
            .map(Value::Timestamp)
            .map_err(parse_error),
    }
}

/// Integers may arrive as integral floats (`1992.0`) when the source column had gaps.
fn parse_int(s: &str) -> Result<i64, String> {
    if let Ok(v) = s.parse::<i64>() {
        return Ok(v);
    }
    match s.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err("expected integer".to_string()),
    }
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| "expected timestamp 'YYYY-MM-DD HH:MM:SS'".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{ingest_csv_from_reader, parse_int, parse_timestamp};
    use crate::error::BikeshareError;
    use crate::types::{DataType, Field, Schema, Value};

    fn reader(input: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes())
    }

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Start Time", DataType::Timestamp),
            Field::new("Trip Duration", DataType::Float64),
            Field::optional("Gender", DataType::Utf8),
            Field::optional("Birth Year", DataType::Int64),
        ])
    }

    #[test]
    fn optional_columns_absent_from_headers_are_dropped_from_schema() {
        let mut rdr = reader("Start Time,Trip Duration\n2017-01-01 00:07:57,300\n");
        let ds = ingest_csv_from_reader(&mut rdr, &schema()).unwrap();
        assert_eq!(
            ds.schema.field_names().collect::<Vec<_>>(),
            vec!["Start Time", "Trip Duration"]
        );
        assert_eq!(ds.rows[0][1], Value::Float64(300.0));
    }

    #[test]
    fn extra_and_reordered_columns_are_tolerated() {
        let input = ",Birth Year,Gender,Trip Duration,Start Time\n7,1992.0,Male,61.5,2017-06-23 15:09:32\n";
        let ds = ingest_csv_from_reader(&mut reader(input), &schema()).unwrap();
        let expected_ts = NaiveDate::from_ymd_opt(2017, 6, 23)
            .unwrap()
            .and_hms_opt(15, 9, 32)
            .unwrap();
        assert_eq!(
            ds.rows[0],
            vec![
                Value::Timestamp(expected_ts),
                Value::Float64(61.5),
                Value::Utf8("Male".to_string()),
                Value::Int64(1992),
            ]
        );
    }

    #[test]
    fn empty_optional_cells_become_null() {
        let input = "Start Time,Trip Duration,Gender,Birth Year\n2017-01-01 00:07:57,300,,\n";
        let ds = ingest_csv_from_reader(&mut reader(input), &schema()).unwrap();
        assert_eq!(ds.rows[0][2], Value::Null);
        assert_eq!(ds.rows[0][3], Value::Null);
    }

    #[test]
    fn empty_required_cell_is_a_parse_error() {
        let input = "Start Time,Trip Duration\n2017-01-01 00:07:57,\n";
        let err = ingest_csv_from_reader(&mut reader(input), &schema()).unwrap_err();
        assert!(matches!(
            err,
            BikeshareError::ParseError { row: 2, ref column, .. } if column == "Trip Duration"
        ));
    }

    #[test]
    fn malformed_timestamp_reports_row_and_column() {
        let input = "Start Time,Trip Duration\n2017-01-01 00:07:57,1\nyesterday,2\n";
        let err = ingest_csv_from_reader(&mut reader(input), &schema()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 3"), "{msg}");
        assert!(msg.contains("column 'Start Time'"), "{msg}");
        assert!(msg.contains("raw='yesterday'"), "{msg}");
    }

    #[test]
    fn missing_required_column_is_schema_mismatch() {
        let err = ingest_csv_from_reader(&mut reader("Trip Duration\n1\n"), &schema()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("schema mismatch"));
        assert!(msg.contains("missing required column 'Start Time'"));
    }

    #[test]
    fn parse_int_accepts_integral_floats_only() {
        assert_eq!(parse_int("1985"), Ok(1985));
        assert_eq!(parse_int("1985.0"), Ok(1985));
        assert!(parse_int("1985.5").is_err());
        assert!(parse_int("abc").is_err());
    }

    #[test]
    fn parse_timestamp_accepts_fractional_seconds_and_iso_separator() {
        assert!(parse_timestamp("2017-03-01 08:00:00.250").is_ok());
        assert!(parse_timestamp("2017-03-01T08:00:00").is_ok());
        assert!(parse_timestamp("03/01/2017 08:00").is_err());
    }
}

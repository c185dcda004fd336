//! CSV loading for the city trip files.
//!
//! Reads a bikeshare export into a [`TripTable`], parsing each start time and
//! noting which optional columns the header carries.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bikeshare_core::data_processors::TimestampProcessor;
use bikeshare_core::models::{City, Column, TripRecord};
use bikeshare_core::{BikeshareError, Result};
use tracing::debug;

use crate::table::{OptionalColumns, TripRow, TripTable};

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every trip in the CSV file at `path`.
///
/// Any failure is fatal for the caller: an unreadable file, a malformed
/// value, a missing required column or an unparseable start time. Blank
/// cells and short rows are not failures; their values read as missing.
pub fn read_trips(path: &Path, city: City) -> Result<TripTable> {
    let file = File::open(path).map_err(|source| BikeshareError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trips(BufReader::new(file), city, path)
}

/// Parse trips from any reader. `origin` is only used in error messages and
/// logs.
pub fn parse_trips<R: Read>(reader: R, city: City, origin: &Path) -> Result<TripTable> {
    let csv_error = |source: csv::Error| BikeshareError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(csv_error)?.clone();
    let has_column = |column: Column| headers.iter().any(|h| h == column.header());

    if let Some(missing) = Column::REQUIRED.into_iter().find(|c| !has_column(*c)) {
        return Err(BikeshareError::MissingColumn {
            path: origin.to_path_buf(),
            column: missing.header().to_string(),
        });
    }

    let columns = OptionalColumns {
        trip_id: has_column(Column::TripId),
        gender: has_column(Column::Gender),
        birth_year: has_column(Column::BirthYear),
    };

    let mut rows: Vec<TripRow> = Vec::new();
    for (position, result) in csv_reader.deserialize::<TripRecord>().enumerate() {
        let record = result.map_err(csv_error)?;
        let start = TimestampProcessor::parse(&record.start_time).ok_or_else(|| {
            BikeshareError::TimestampParse {
                path: origin.to_path_buf(),
                row: position,
                value: record.start_time.clone(),
            }
        })?;
        rows.push(TripRow::new(position, start, record));
    }

    let without_duration = rows
        .iter()
        .filter(|row| row.record.trip_duration.is_none())
        .count();
    if without_duration > 0 {
        debug!(
            "{} of {} trips in {} have no trip duration",
            without_duration,
            rows.len(),
            origin.display()
        );
    }

    debug!(
        "Read {} trips for {} from {} (gender: {}, birth year: {})",
        rows.len(),
        city,
        origin.display(),
        columns.gender,
        columns.birth_year,
    );

    Ok(TripTable::new(city, columns, rows))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Attribute;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const FULL_HEADER: &str =
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
    const SHORT_HEADER: &str =
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

    fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    #[test]
    fn test_read_trips_with_optional_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "chicago.csv",
            &[
                FULL_HEADER,
                "1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0",
                "955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Customer,,",
            ],
        );

        let table = read_trips(&path, City::Chicago).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.city(), City::Chicago);
        assert!(table.columns().trip_id);
        assert!(table.columns().gender);
        assert!(table.columns().birth_year);

        let first = &table.rows()[0];
        assert_eq!(first.position, 0);
        assert_eq!(first.month, 6);
        assert_eq!(first.hour(), 15);
        assert_eq!(first.record.trip_id.as_deref(), Some("1423854"));
        assert_eq!(first.record.trip_duration, Some(321.0));
        assert_eq!(first.record.start_station, "Wood St & Hubbard St");
        assert_eq!(first.record.gender.as_deref(), Some("Male"));
        assert_eq!(first.record.birth_year, Some(1992.0));

        let second = &table.rows()[1];
        assert_eq!(second.record.user_type.as_deref(), Some("Customer"));
        assert_eq!(second.record.gender, None);
        assert_eq!(second.record.birth_year, None);
    }

    #[test]
    fn test_read_trips_without_optional_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "washington.csv",
            &[
                SHORT_HEADER,
                "1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber",
            ],
        );

        let table = read_trips(&path, City::Washington).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.columns(),
            OptionalColumns {
                trip_id: true,
                ..OptionalColumns::default()
            }
        );
        assert_eq!(table.genders(), Attribute::Absent);
        assert_eq!(table.birth_years(), Attribute::Absent);
        let duration = table.rows()[0].record.trip_duration.unwrap();
        assert!((duration - 489.066).abs() < 1e-9);
    }

    #[test]
    fn test_read_trips_quoted_station_names() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "new_york_city.csv",
            &[
                SHORT_HEADER,
                "1,2017-01-01 00:00:01,2017-01-01 00:10:00,599,\"Broadway & W 60 St, North\",W 52 St & 11 Ave,Customer",
            ],
        );

        let table = read_trips(&path, City::NewYorkCity).unwrap();
        assert_eq!(
            table.rows()[0].record.start_station,
            "Broadway & W 60 St, North"
        );
    }

    #[test]
    fn test_read_trips_missing_file() {
        let err = read_trips(Path::new("/tmp/does-not-exist-bikeshare-xyz.csv"), City::Chicago)
            .unwrap_err();
        assert!(matches!(err, BikeshareError::FileRead { .. }));
    }

    #[test]
    fn test_read_trips_missing_required_column() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "chicago.csv",
            &[
                "Start Time,End Time,Start Station,End Station,User Type",
                "2017-01-01 00:00:01,2017-01-01 00:10:00,A,B,Subscriber",
            ],
        );

        let err = read_trips(&path, City::Chicago).unwrap_err();
        match err {
            BikeshareError::MissingColumn { column, .. } => assert_eq!(column, "Trip Duration"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_trips_bad_timestamp() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "chicago.csv",
            &[
                SHORT_HEADER,
                "1,2017-01-01 00:00:01,2017-01-01 00:10:00,599,A,B,Customer",
                "2,not a time,2017-01-01 00:10:00,599,A,B,Customer",
            ],
        );

        let err = read_trips(&path, City::Chicago).unwrap_err();
        match err {
            BikeshareError::TimestampParse { row, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(value, "not a time");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_trips_bad_duration_is_csv_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "chicago.csv",
            &[
                SHORT_HEADER,
                "1,2017-01-01 00:00:01,2017-01-01 00:10:00,ten minutes,A,B,Customer",
            ],
        );

        let err = read_trips(&path, City::Chicago).unwrap_err();
        assert!(matches!(err, BikeshareError::Csv { .. }));
    }

    #[test]
    fn test_read_trips_blank_cells_read_as_missing() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "chicago.csv",
            &[
                FULL_HEADER,
                "1,2017-01-01 00:00:01,2017-01-01 00:10:00,599,A,B,Customer,Male,1980.0",
                "2,2017-01-01 00:00:02,,,,,Subscriber,,",
            ],
        );

        let table = read_trips(&path, City::Chicago).unwrap();

        assert_eq!(table.len(), 2);
        let blank = &table.rows()[1].record;
        assert_eq!(blank.trip_duration, None);
        assert_eq!(blank.start_station, "");
        assert_eq!(blank.end_station, "");
        assert_eq!(blank.user_type.as_deref(), Some("Subscriber"));
        assert_eq!(blank.gender, None);
        assert_eq!(blank.birth_year, None);
    }

    #[test]
    fn test_read_trips_short_trailing_row() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "chicago.csv",
            &[
                FULL_HEADER,
                "1,2017-01-01 00:00:01,2017-01-01 00:10:00,599,A,B,Customer,Male,1980.0",
                "2,2017-01-01 00:00:02",
            ],
        );

        let table = read_trips(&path, City::Chicago).unwrap();

        assert_eq!(table.len(), 2);
        let short = &table.rows()[1];
        assert_eq!(short.position, 1);
        assert_eq!(short.record.trip_id.as_deref(), Some("2"));
        assert_eq!(short.record.end_time, "");
        assert_eq!(short.record.trip_duration, None);
        assert_eq!(short.record.user_type, None);
        assert_eq!(short.record.gender, None);
    }

    #[test]
    fn test_read_trips_without_id_column() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "washington.csv",
            &[
                "Start Time,End Time,Trip Duration,Start Station,End Station,User Type",
                "2017-01-01 00:00:01,2017-01-01 00:10:00,599,A,B,Customer",
            ],
        );

        let table = read_trips(&path, City::Washington).unwrap();
        assert!(!table.columns().trip_id);
        assert_eq!(table.rows()[0].record.trip_id, None);
    }

    #[test]
    fn test_parse_trips_header_only() {
        let table = parse_trips(
            SHORT_HEADER.as_bytes(),
            City::Washington,
            Path::new("memory"),
        )
        .unwrap();
        assert!(table.is_empty());
    }
}

//! In-memory trip table for one city.
//!
//! Rows carry the parsed start time plus the derived month and weekday
//! columns, so filters and reporters never re-parse timestamps.

use bikeshare_core::models::{City, Column, DayFilter, MonthFilter, TripRecord};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

// ── OptionalColumns ───────────────────────────────────────────────────────────

/// Which optional columns the source header carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionalColumns {
    /// The unnamed leading id column.
    pub trip_id: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl OptionalColumns {
    /// Every optional column present.
    pub const ALL: OptionalColumns = OptionalColumns {
        trip_id: true,
        gender: true,
        birth_year: true,
    };

    /// Whether `column` is available. Required columns always are.
    pub fn contains(&self, column: Column) -> bool {
        match column {
            Column::TripId => self.trip_id,
            Column::Gender => self.gender,
            Column::BirthYear => self.birth_year,
            _ => true,
        }
    }
}

// ── Attribute ─────────────────────────────────────────────────────────────────

/// Result of looking up an optional column on a [`TripTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute<T> {
    /// The column exists; holds the per-row values.
    Present(T),
    /// The city's source does not have this column at all.
    Absent,
}

impl<T> Attribute<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Attribute::Present(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Attribute<U> {
        match self {
            Attribute::Present(value) => Attribute::Present(f(value)),
            Attribute::Absent => Attribute::Absent,
        }
    }
}

// ── TripRow ───────────────────────────────────────────────────────────────────

/// One trip plus the columns derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    /// 0-based position of the row in the source file.
    pub position: usize,
    pub start: NaiveDateTime,
    /// Month of the start time (1–12).
    pub month: u32,
    /// Weekday of the start time.
    pub day_of_week: Weekday,
    pub record: TripRecord,
}

impl TripRow {
    pub fn new(position: usize, start: NaiveDateTime, record: TripRecord) -> Self {
        Self {
            position,
            month: start.month(),
            day_of_week: start.weekday(),
            start,
            record,
        }
    }

    /// Hour of day (0–23) the trip started.
    pub fn hour(&self) -> u32 {
        self.start.hour()
    }
}

// ── TripTable ─────────────────────────────────────────────────────────────────

/// Ordered trips for a single city.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    columns: OptionalColumns,
    rows: Vec<TripRow>,
}

impl TripTable {
    pub fn new(city: City, columns: OptionalColumns, rows: Vec<TripRow>) -> Self {
        Self {
            city,
            columns,
            rows,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn columns(&self) -> OptionalColumns {
        self.columns
    }

    pub fn rows(&self) -> &[TripRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only the rows whose derived month and weekday pass both filters.
    /// Row order and source positions are preserved.
    pub fn filter(mut self, month: MonthFilter, day: DayFilter) -> Self {
        self.rows
            .retain(|row| month.matches(row.month) && day.matches(row.day_of_week));
        self
    }

    /// Rows `[offset, offset + size)` by position. Out-of-range windows are
    /// clamped, so reading past the end yields an empty slice.
    pub fn page(&self, offset: usize, size: usize) -> &[TripRow] {
        let len = self.rows.len();
        let start = offset.min(len);
        let end = offset.saturating_add(size).min(len);
        &self.rows[start..end]
    }

    /// Per-row gender values, or [`Attribute::Absent`] when the source has no
    /// gender column.
    pub fn genders(&self) -> Attribute<Vec<Option<&str>>> {
        if !self.columns.gender {
            return Attribute::Absent;
        }
        Attribute::Present(
            self.rows
                .iter()
                .map(|row| row.record.gender.as_deref())
                .collect(),
        )
    }

    /// Per-row birth years, or [`Attribute::Absent`] when the source has no
    /// birth year column.
    pub fn birth_years(&self) -> Attribute<Vec<Option<f64>>> {
        if !self.columns.birth_year {
            return Attribute::Absent;
        }
        Attribute::Present(self.rows.iter().map(|row| row.record.birth_year).collect())
    }
}

// ── Test fixtures ─────────────────────────────────────────────────────────────

/// Builders shared by the unit tests of this crate and downstream crates.
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures {
    use super::*;
    use bikeshare_core::data_processors::TimestampProcessor;

    /// A record starting at `start` (`"%Y-%m-%d %H:%M:%S"`).
    pub fn record(start: &str, duration: f64, from: &str, to: &str) -> TripRecord {
        TripRecord {
            trip_id: None,
            start_time: start.to_string(),
            end_time: start.to_string(),
            trip_duration: Some(duration),
            start_station: from.to_string(),
            end_station: to.to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    /// Build a table from records, numbering positions from zero.
    pub fn table(city: City, columns: OptionalColumns, records: Vec<TripRecord>) -> TripTable {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                let start = TimestampProcessor::parse(&record.start_time)
                    .expect("fixture timestamps are valid");
                TripRow::new(position, start, record)
            })
            .collect();
        TripTable::new(city, columns, rows)
    }
}

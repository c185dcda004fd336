//! Descriptive statistics over a filtered [`TripTable`].
//!
//! Each function is independent and only reads the table. Functions that
//! need at least one trip return `None` for an empty table so the caller can
//! say so instead of failing.

use bikeshare_core::formatting::round_seconds;
use chrono::Weekday;

use crate::aggregator::{mode, CategoryCounts};
use crate::table::{Attribute, TripTable};

// ── Time of travel ────────────────────────────────────────────────────────────

/// Most frequent times of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// 1-based month number.
    pub popular_month: u32,
    pub popular_day: Weekday,
    /// Hour of day, 0–23.
    pub popular_hour: u32,
}

pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let rows = table.rows();
    Some(TimeStats {
        popular_month: mode(rows.iter().map(|r| r.month))?,
        popular_day: mode(rows.iter().map(|r| r.day_of_week))?,
        popular_hour: mode(rows.iter().map(|r| r.hour()))?,
    })
}

// ── Stations ──────────────────────────────────────────────────────────────────

/// Most popular stations and station pair. A field is `None` when no trip
/// in the selection has that value recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start_station: Option<String>,
    pub popular_end_station: Option<String>,
    /// `"<start> with <end>"` for the most frequent pair. Only trips with
    /// both stations recorded take part.
    pub popular_trip: Option<String>,
}

pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    if table.is_empty() {
        return None;
    }
    let rows = table.rows();
    let popular_start_station = mode(rows.iter().filter_map(|r| station(&r.record.start_station)));
    let popular_end_station = mode(rows.iter().filter_map(|r| station(&r.record.end_station)));
    let popular_trip = mode(rows.iter().filter_map(|r| {
        let start = station(&r.record.start_station)?;
        let end = station(&r.record.end_station)?;
        Some(format!("{} with {}", start, end))
    }));

    Some(StationStats {
        popular_start_station: popular_start_station.map(str::to_string),
        popular_end_station: popular_end_station.map(str::to_string),
        popular_trip,
    })
}

/// Station name, or `None` for a blank cell.
fn station(name: &str) -> Option<&str> {
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}

// ── Trip duration ─────────────────────────────────────────────────────────────

/// Total and mean trip duration, both rounded to whole seconds.
///
/// Trips without a usable duration are left out of both and counted in
/// `missing`. `mean_seconds` is `None` when no trip has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    pub total_seconds: i64,
    pub mean_seconds: Option<i64>,
    pub missing: usize,
}

pub fn trip_duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }
    let durations: Vec<f64> = table
        .rows()
        .iter()
        .filter_map(|r| r.record.trip_duration)
        .filter(|d| d.is_finite())
        .collect();
    let total: f64 = durations.iter().sum();
    let mean = (!durations.is_empty()).then(|| total / durations.len() as f64);

    Some(DurationStats {
        total_seconds: round_seconds(total),
        mean_seconds: mean.map(round_seconds),
        missing: table.len() - durations.len(),
    })
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
    /// Rows with no birth year recorded.
    pub missing: usize,
}

/// User demographics. Gender and birth year are looked up independently;
/// either may be [`Attribute::Absent`] without affecting the other.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: CategoryCounts,
    pub genders: Attribute<CategoryCounts>,
    /// `Present(None)` when the column exists but no row in the selection
    /// has a value.
    pub birth_years: Attribute<Option<BirthYearStats>>,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let user_types = CategoryCounts::from_column(
        table.rows().iter().map(|r| r.record.user_type.as_deref()),
    );
    let genders = table.genders().map(CategoryCounts::from_column);
    let birth_years = table.birth_years().map(|years| birth_year_stats(&years));

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn birth_year_stats(years: &[Option<f64>]) -> Option<BirthYearStats> {
    let present: Vec<f64> = years
        .iter()
        .flatten()
        .copied()
        .filter(|y| y.is_finite())
        .collect();
    let missing = years.len() - present.len();

    let earliest = present.iter().copied().reduce(f64::min)?;
    let most_recent = present.iter().copied().reduce(f64::max)?;
    let most_common = mode(present.iter().map(|y| y.round() as i64))?;

    Some(BirthYearStats {
        earliest: earliest.round() as i64,
        most_recent: most_recent.round() as i64,
        most_common,
        missing,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};
use serde::Deserialize;
use thiserror::Error;

// ── City ──────────────────────────────────────────────────────────────────────

/// A city with bikeshare trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case key the user types at the prompt.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Title-cased display name.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Default CSV file name for the city's trips.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.key() == normalised)
            .ok_or_else(|| SelectionError::new(SelectionField::City, s))
    }
}

// ── Calendar names ────────────────────────────────────────────────────────────

/// Months that can be selected as a filter. The data only covers the first
/// half of the year.
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Days of the week in prompt order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const MONTH_NAMES: [&str; 12] = [
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

/// Full English name of a 1-based month number, or `None` outside `1..=12`.
pub fn month_name(number: u32) -> Option<&'static str> {
    let index = usize::try_from(number.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Full English name of a weekday (`chrono` only offers the short form).
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

// ── Filters ───────────────────────────────────────────────────────────────────

/// Month filter: everything, or a single month from [`FILTER_MONTHS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// 1-based month number the filter keeps, `None` for [`MonthFilter::All`].
    pub fn month_number(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Only(month) => Some(month.number_from_month()),
        }
    }

    /// Whether a row with the given derived month passes the filter.
    pub fn matches(self, month: u32) -> bool {
        self.month_number().map_or(true, |wanted| wanted == month)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(month) => {
                f.write_str(month_name(month.number_from_month()).unwrap_or("Unknown"))
            }
        }
    }
}

impl FromStr for MonthFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        if normalised == "all" {
            return Ok(MonthFilter::All);
        }
        FILTER_MONTHS
            .into_iter()
            .find(|month| {
                month_name(month.number_from_month())
                    .is_some_and(|name| name.to_lowercase() == normalised)
            })
            .map(MonthFilter::Only)
            .ok_or_else(|| SelectionError::new(SelectionField::Month, s))
    }
}

/// Day-of-week filter: everything, or a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Whether a row with the given derived weekday passes the filter.
    pub fn matches(self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(wanted) => wanted == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        if normalised == "all" {
            return Ok(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|day| weekday_name(*day).to_lowercase() == normalised)
            .map(DayFilter::Only)
            .ok_or_else(|| SelectionError::new(SelectionField::Day, s))
    }
}

// ── FilterSelection ───────────────────────────────────────────────────────────

/// The (city, month, day) triple chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// City-only selection (month and day both `All`), used for raw viewing.
    pub fn city_only(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "City: {}, Month: {} and Day: {}",
            self.city, self.month, self.day
        )
    }
}

// ── SelectionError ────────────────────────────────────────────────────────────

/// Which interactive field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    City,
    Month,
    Day,
}

impl SelectionField {
    fn retry_message(self) -> &'static str {
        match self {
            SelectionField::City => "You may have a typo or an invalid city, please try again.",
            SelectionField::Month => "You may have a typo or an invalid month, please try again.",
            SelectionField::Day => "You may have a typo or an invalid selection, please try again.",
        }
    }
}

/// Rejected interactive input. `Display` is the message shown before the
/// prompt is repeated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .field.retry_message())]
pub struct SelectionError {
    pub field: SelectionField,
    pub input: String,
}

impl SelectionError {
    fn new(field: SelectionField, input: &str) -> Self {
        Self {
            field,
            input: input.to_string(),
        }
    }
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// A single trip as stored in a city CSV file.
///
/// `Gender` and `Birth Year` only exist for some cities; empty cells and
/// absent columns both deserialize to `None`. Short rows are accepted, with
/// the missing trailing cells left empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripRecord {
    /// The unnamed leading column of the export.
    #[serde(rename = "", default)]
    pub trip_id: Option<String>,
    #[serde(rename = "Start Time", default)]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: String,
    /// Duration in seconds.
    #[serde(rename = "Trip Duration", default)]
    pub trip_duration: Option<f64>,
    #[serde(rename = "Start Station", default)]
    pub start_station: String,
    #[serde(rename = "End Station", default)]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// CSV columns the explorer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    TripId,
    StartTime,
    EndTime,
    TripDuration,
    StartStation,
    EndStation,
    UserType,
    Gender,
    BirthYear,
}

impl Column {
    /// Columns every city file must carry.
    pub const REQUIRED: [Column; 6] = [
        Column::StartTime,
        Column::EndTime,
        Column::TripDuration,
        Column::StartStation,
        Column::EndStation,
        Column::UserType,
    ];

    /// Columns that only some cities provide.
    pub const OPTIONAL: [Column; 2] = [Column::Gender, Column::BirthYear];

    /// Header text as it appears in the CSV. The trip id column is unnamed.
    pub fn header(self) -> &'static str {
        match self {
            Column::TripId => "",
            Column::StartTime => "Start Time",
            Column::EndTime => "End Time",
            Column::TripDuration => "Trip Duration",
            Column::StartStation => "Start Station",
            Column::EndStation => "End Station",
            Column::UserType => "User Type",
            Column::Gender => "Gender",
            Column::BirthYear => "Birth Year",
        }
    }
}

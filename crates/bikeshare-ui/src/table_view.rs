//! Raw trip rows as an aligned plain-text table.
//!
//! Column widths are measured in terminal cells via `unicode-width`, so
//! station names with accented or wide characters stay aligned.

use bikeshare_core::models::{weekday_name, Column};
use bikeshare_data::table::{OptionalColumns, TripRow};
use unicode_width::UnicodeWidthStr;

/// Placeholder for an empty cell.
const MISSING: &str = "NaN";

/// Headers of the columns derived from the start time, shown after the
/// source columns.
const DERIVED_HEADERS: [&str; 2] = ["month", "day_of_week"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
}

/// Pad `s` with spaces to `width` terminal cells.
pub(crate) fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(s.width()));
    match align {
        Align::Left => format!("{}{}", s, fill),
        Align::Right => format!("{}{}", fill, s),
    }
}

/// Render `rows` with a header line. Returns an empty string when there are
/// no rows.
///
/// The first column is the row's position in the source file, followed by
/// the source columns in file order and the derived month and weekday. The
/// trip id and rider columns only appear when the source has them.
pub fn render_rows(rows: &[TripRow], columns: OptionalColumns) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let visible: Vec<Column> = std::iter::once(Column::TripId)
        .chain(Column::REQUIRED)
        .chain(Column::OPTIONAL)
        .filter(|c| columns.contains(*c))
        .collect();

    let mut header: Vec<String> = vec![String::new()];
    header.extend(visible.iter().map(|c| label(*c).to_string()));
    header.extend(DERIVED_HEADERS.iter().map(|h| h.to_string()));

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.position.to_string()];
            cells.extend(visible.iter().map(|c| cell(row, *c)));
            cells.push(row.month.to_string());
            cells.push(weekday_name(row.day_of_week).to_string());
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            std::iter::once(&header)
                .chain(body.iter())
                .map(|line| line[i].width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in std::iter::once(&header).chain(body.iter()) {
        let rendered: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(text, width)| pad(text, *width, Align::Right))
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Header shown for a source column. The id column has no name in the file.
fn label(column: Column) -> &'static str {
    match column {
        Column::TripId => "Trip Id",
        other => other.header(),
    }
}

fn cell(row: &TripRow, column: Column) -> String {
    let record = &row.record;
    match column {
        Column::TripId => text_or_missing(record.trip_id.as_deref()),
        Column::StartTime => text_or_missing(Some(record.start_time.as_str())),
        Column::EndTime => text_or_missing(Some(record.end_time.as_str())),
        Column::TripDuration => record
            .trip_duration
            .map(format_number)
            .unwrap_or_else(|| MISSING.to_string()),
        Column::StartStation => text_or_missing(Some(record.start_station.as_str())),
        Column::EndStation => text_or_missing(Some(record.end_station.as_str())),
        Column::UserType => text_or_missing(record.user_type.as_deref()),
        Column::Gender => text_or_missing(record.gender.as_deref()),
        Column::BirthYear => record
            .birth_year
            .map(|y| format!("{:.1}", y))
            .unwrap_or_else(|| MISSING.to_string()),
    }
}

fn text_or_missing(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

/// Whole numbers without a fractional part, everything else as parsed.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

//! Plain-text rendering of the four statistics sections.
//!
//! Each `*_section` function turns analysis results into a [`Section`];
//! [`render_section`] adds the heading, timing line and divider.

use std::time::Duration;

use bikeshare_core::formatting::{format_hour, format_mean_duration, format_total_duration};
use bikeshare_core::models::{month_name, weekday_name, City};
use bikeshare_data::aggregator::CategoryCounts;
use bikeshare_data::analysis::{
    BirthYearStats, DurationStats, StationStats, TimeStats, UserStats,
};
use bikeshare_data::table::Attribute;
use unicode_width::UnicodeWidthStr;

use crate::table_view::{pad, Align};

/// Width of the dashed line printed after every section.
pub const DIVIDER_WIDTH: usize = 40;

const NO_TRIPS: &str = "No trips match the selected filters.";
const NOT_RECORDED: &str = "none recorded";

pub fn divider() -> String {
    "-".repeat(DIVIDER_WIDTH)
}

/// Heading plus body lines for one report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Render a section with its timing footer and trailing divider.
pub fn render_section(section: &Section, elapsed: Duration) -> String {
    let mut out = format!("\n{}\n\n", section.title);
    for line in &section.lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!(
        "\nThis took {} seconds.\n",
        elapsed.as_secs_f64()
    ));
    out.push_str(&divider());
    out.push('\n');
    out
}

// ── Sections ──────────────────────────────────────────────────────────────────

pub fn time_section(stats: Option<&TimeStats>) -> Section {
    let lines = match stats {
        Some(stats) => vec![
            format!(
                "The most common starting month is: {}",
                month_name(stats.popular_month).unwrap_or("Unknown")
            ),
            format!(
                "The most common starting day is: {}",
                weekday_name(stats.popular_day)
            ),
            format!(
                "The most common starting hour is: {}",
                format_hour(stats.popular_hour)
            ),
        ],
        None => vec![NO_TRIPS.to_string()],
    };
    Section {
        title: "Calculating The Most Frequent Times of Travel...",
        lines,
    }
}

pub fn station_section(stats: Option<&StationStats>) -> Section {
    let lines = match stats {
        Some(stats) => vec![
            format!(
                "The most popular starting station is: {}",
                stats.popular_start_station.as_deref().unwrap_or(NOT_RECORDED)
            ),
            format!(
                "The most popular ending station is: {}",
                stats.popular_end_station.as_deref().unwrap_or(NOT_RECORDED)
            ),
            format!(
                "The most popular combination of starting and ending stations is: {}",
                stats.popular_trip.as_deref().unwrap_or(NOT_RECORDED)
            ),
            String::new(),
            "Note: If the combination of stations is the same, users may have taken rides in a loop."
                .to_string(),
        ],
        None => vec![NO_TRIPS.to_string()],
    };
    Section {
        title: "Calculating The Most Popular Stations and Trip...",
        lines,
    }
}

pub fn duration_section(stats: Option<&DurationStats>) -> Section {
    let lines = match stats {
        Some(stats) => {
            let mut lines = vec![
                format!(
                    "The total duration of trips is: {} seconds, or in a more reader friendly format:",
                    stats.total_seconds
                ),
                format_total_duration(stats.total_seconds),
                String::new(),
            ];
            match stats.mean_seconds {
                Some(mean) => {
                    lines.push(format!(
                        "The mean duration of trips taken is: {} seconds, or in a more reader friendly format:",
                        mean
                    ));
                    lines.push(format_mean_duration(mean));
                }
                None => lines.push(
                    "The mean duration of trips cannot be computed: no trip durations recorded."
                        .to_string(),
                ),
            }
            if stats.missing > 0 {
                lines.push(format!(
                    "{} trips had no trip duration recorded",
                    stats.missing
                ));
            }
            lines
        }
        None => vec![NO_TRIPS.to_string()],
    };
    Section {
        title: "Calculating Trip Duration...",
        lines,
    }
}

pub fn user_section(stats: &UserStats, city: City) -> Section {
    let mut lines = vec!["The User Types are shown below:".to_string()];
    push_counts(&mut lines, &stats.user_types, "user type");

    lines.push(String::new());
    match &stats.genders {
        Attribute::Present(genders) => {
            lines.push("The genders of users are shown below:".to_string());
            push_counts(&mut lines, genders, "gender");
        }
        Attribute::Absent => lines.push(format!("Gender data is not available for {}", city)),
    }

    lines.push(String::new());
    match &stats.birth_years {
        Attribute::Present(Some(years)) => push_birth_years(&mut lines, years),
        Attribute::Present(None) => {
            lines.push("No birth year data recorded for the selected trips.".to_string())
        }
        Attribute::Absent => lines.push(format!("Birth year data is not available for {}", city)),
    }

    Section {
        title: "Calculating User Stats...",
        lines,
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn push_counts(lines: &mut Vec<String>, counts: &CategoryCounts, attribute: &str) {
    if counts.counts.is_empty() && counts.missing == 0 {
        lines.push(NO_TRIPS.to_string());
        return;
    }
    let width = counts
        .counts
        .iter()
        .map(|(value, _)| value.width())
        .max()
        .unwrap_or(0);
    for (value, count) in &counts.counts {
        lines.push(format!("{}    {}", pad(value, width, Align::Left), count));
    }
    if counts.missing > 0 {
        lines.push(format!(
            "{} trips had no {} recorded",
            counts.missing, attribute
        ));
    }
}

fn push_birth_years(lines: &mut Vec<String>, years: &BirthYearStats) {
    lines.push(format!(
        "The earliest birth year of users is: {}",
        years.earliest
    ));
    lines.push(format!(
        "The most recent birth year of users is: {}",
        years.most_recent
    ));
    lines.push(format!(
        "The most common birth year of users is: {}",
        years.most_common
    ));
    if years.missing > 0 {
        lines.push(format!("{} trips had no birth year recorded", years.missing));
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn counts(pairs: &[(&str, usize)], missing: usize) -> CategoryCounts {
        CategoryCounts {
            counts: pairs.iter().map(|(v, c)| (v.to_string(), *c)).collect(),
            missing,
        }
    }

    // ── divider / render_section ──────────────────────────────────────────────

    #[test]
    fn test_divider_width() {
        assert_eq!(divider(), "-".repeat(40));
    }

    #[test]
    fn test_render_section_layout() {
        let section = Section {
            title: "Calculating Trip Duration...",
            lines: vec!["a".to_string(), "b".to_string()],
        };
        let out = render_section(&section, Duration::from_millis(250));
        assert!(out.starts_with("\nCalculating Trip Duration...\n\na\nb\n"));
        assert!(out.contains("This took 0.25 seconds."));
        assert!(out.ends_with(&format!("{}\n", divider())));
    }

    // ── time_section ──────────────────────────────────────────────────────────

    #[test]
    fn test_time_section_names() {
        let stats = TimeStats {
            popular_month: 3,
            popular_day: Weekday::Wed,
            popular_hour: 14,
        };
        let section = time_section(Some(&stats));
        assert_eq!(
            section.lines,
            vec![
                "The most common starting month is: March",
                "The most common starting day is: Wednesday",
                "The most common starting hour is: 14.00",
            ]
        );
    }

    #[test]
    fn test_time_section_empty() {
        assert_eq!(time_section(None).lines, vec![NO_TRIPS]);
    }

    // ── station_section ───────────────────────────────────────────────────────

    #[test]
    fn test_station_section_includes_loop_note() {
        let stats = StationStats {
            popular_start_station: Some("Streeter Dr & Grand Ave".to_string()),
            popular_end_station: Some("Streeter Dr & Grand Ave".to_string()),
            popular_trip: Some(
                "Lake Shore Dr & Monroe St with Streeter Dr & Grand Ave".to_string(),
            ),
        };
        let section = station_section(Some(&stats));
        assert_eq!(
            section.lines[2],
            "The most popular combination of starting and ending stations is: Lake Shore Dr & Monroe St with Streeter Dr & Grand Ave"
        );
        assert!(section.lines.last().unwrap().contains("rides in a loop"));
    }

    // ── duration_section ──────────────────────────────────────────────────────

    #[test]
    fn test_duration_section_formats() {
        let stats = DurationStats {
            total_seconds: 360,
            mean_seconds: Some(120),
            missing: 0,
        };
        let section = duration_section(Some(&stats));
        assert_eq!(section.lines.len(), 5);
        assert_eq!(section.lines[1], "0 days 00 hrs 06 mins 00 secs");
        assert_eq!(section.lines[4], "2 mins 00 secs");
        assert!(section.lines[0].contains("360 seconds"));
        assert!(section.lines[3].contains("120 seconds"));
    }

    #[test]
    fn test_duration_section_reports_missing_durations() {
        let stats = DurationStats {
            total_seconds: 240,
            mean_seconds: Some(120),
            missing: 2,
        };
        let section = duration_section(Some(&stats));
        assert_eq!(
            section.lines.last().unwrap(),
            "2 trips had no trip duration recorded"
        );
    }

    #[test]
    fn test_duration_section_without_any_duration() {
        let stats = DurationStats {
            total_seconds: 0,
            mean_seconds: None,
            missing: 3,
        };
        let section = duration_section(Some(&stats));
        let text = section.lines.join("\n");
        assert!(text.contains("0 days 00 hrs 00 mins 00 secs"));
        assert!(text.contains("cannot be computed"));
        assert!(text.contains("3 trips had no trip duration recorded"));
    }

    #[test]
    fn test_station_section_missing_stations() {
        let stats = StationStats {
            popular_start_station: None,
            popular_end_station: Some("Lake St".to_string()),
            popular_trip: None,
        };
        let section = station_section(Some(&stats));
        assert_eq!(
            section.lines[0],
            "The most popular starting station is: none recorded"
        );
        assert_eq!(section.lines[1], "The most popular ending station is: Lake St");
    }

    // ── user_section ──────────────────────────────────────────────────────────

    #[test]
    fn test_user_section_unavailable_attributes() {
        let stats = UserStats {
            user_types: counts(&[("Subscriber", 2), ("Customer", 1)], 0),
            genders: Attribute::Absent,
            birth_years: Attribute::Absent,
        };
        let section = user_section(&stats, City::Washington);
        assert!(section
            .lines
            .contains(&"Gender data is not available for Washington".to_string()));
        assert!(section
            .lines
            .contains(&"Birth year data is not available for Washington".to_string()));
        assert_eq!(section.lines[1], "Subscriber    2");
        assert_eq!(section.lines[2], "Customer      1");
    }

    #[test]
    fn test_user_section_with_attributes() {
        let stats = UserStats {
            user_types: counts(&[("Subscriber", 3)], 1),
            genders: Attribute::Present(counts(&[("Male", 2), ("Female", 1)], 1)),
            birth_years: Attribute::Present(Some(BirthYearStats {
                earliest: 1899,
                most_recent: 2001,
                most_common: 1989,
                missing: 1,
            })),
        };
        let section = user_section(&stats, City::Chicago);
        let text = section.lines.join("\n");
        assert!(text.contains("1 trips had no user type recorded"));
        assert!(text.contains("The genders of users are shown below:\nMale      2\nFemale    1"));
        assert!(text.contains("1 trips had no gender recorded"));
        assert!(text.contains("The earliest birth year of users is: 1899"));
        assert!(text.contains("The most recent birth year of users is: 2001"));
        assert!(text.contains("The most common birth year of users is: 1989"));
        assert!(!text.contains("not available"));
    }

    #[test]
    fn test_user_section_birth_year_column_without_values() {
        let stats = UserStats {
            user_types: counts(&[("Customer", 1)], 0),
            genders: Attribute::Present(counts(&[], 1)),
            birth_years: Attribute::Present(None),
        };
        let section = user_section(&stats, City::NewYorkCity);
        assert!(section
            .lines
            .contains(&"No birth year data recorded for the selected trips.".to_string()));
    }

    #[test]
    fn test_user_section_empty_selection() {
        let stats = UserStats {
            user_types: CategoryCounts::default(),
            genders: Attribute::Absent,
            birth_years: Attribute::Absent,
        };
        let section = user_section(&stats, City::Washington);
        assert_eq!(section.lines[1], NO_TRIPS);
    }
}

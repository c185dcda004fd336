/// Round to the nearest whole number, ties to even.
///
/// Matches how the trip totals have always been rounded, so
/// `2.5 → 2` and `3.5 → 4`. `value` must be finite; callers drop NaN and
/// infinite durations first.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::round_seconds;
///
/// assert_eq!(round_seconds(359.6), 360);
/// assert_eq!(round_seconds(2.5), 2);
/// assert_eq!(round_seconds(3.5), 4);
/// ```
pub fn round_seconds(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Split a second count into `(days, hours, minutes, seconds)` with a divmod
/// chain.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::split_duration;
///
/// assert_eq!(split_duration(360), (0, 0, 6, 0));
/// assert_eq!(split_duration(90_061), (1, 1, 1, 1));
/// ```
pub fn split_duration(total_seconds: i64) -> (i64, i64, i64, i64) {
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let (days, hours) = (hours / 24, hours % 24);
    (days, hours, minutes, seconds)
}

/// Format a total duration as `"D days HH hrs MM mins SS secs"`.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_total_duration;
///
/// assert_eq!(format_total_duration(360), "0 days 00 hrs 06 mins 00 secs");
/// assert_eq!(format_total_duration(90_061), "1 days 01 hrs 01 mins 01 secs");
/// ```
pub fn format_total_duration(total_seconds: i64) -> String {
    let (days, hours, minutes, seconds) = split_duration(total_seconds);
    format!(
        "{} days {:02} hrs {:02} mins {:02} secs",
        days, hours, minutes, seconds
    )
}

/// Format a mean duration as `"M mins SS secs"`. Minutes are not folded
/// into hours.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_mean_duration;
///
/// assert_eq!(format_mean_duration(120), "2 mins 00 secs");
/// assert_eq!(format_mean_duration(3_725), "62 mins 05 secs");
/// ```
pub fn format_mean_duration(seconds: i64) -> String {
    format!("{} mins {:02} secs", seconds / 60, seconds % 60)
}

/// Format an hour of day the way the report shows it: `"14.00"`, `"7.00"`.
pub fn format_hour(hour: u32) -> String {
    format!("{}.00", hour)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

//! Interactive collection of the city, month and day filters.

use std::io::{BufRead, Write};
use std::str::FromStr;

use bikeshare_core::models::{City, DayFilter, FilterSelection, MonthFilter, SelectionError};
use bikeshare_core::Result;
use bikeshare_ui::report::divider;
use tracing::debug;

use crate::console::Console;

const GREETING: &str = "Hello! Let's explore some US bikeshare data!\n";
const CITY_PROMPT: &str = "Choose a city from: Chicago, New York City or Washington: ";
const MONTH_PROMPT: &str =
    "Choose a month from: January, February, March, April, May, June or choose All: ";
const DAY_PROMPT: &str = "Choose a day of the week: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday or choose All: ";

/// Ask for city, month and day in turn, repeating each prompt until the
/// answer is valid, then echo the normalised selection.
///
/// Only I/O failures (including a closed input) are returned as errors.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterSelection> {
    console.say(GREETING)?;

    let city: City = ask_until_valid(console, CITY_PROMPT)?;
    let month: MonthFilter = ask_until_valid(console, MONTH_PROMPT)?;
    let day: DayFilter = ask_until_valid(console, DAY_PROMPT)?;
    let selection = FilterSelection::new(city, month, day);

    console.say(&format!(
        "\nGreat, thanks for choosing this combination, {}!",
        selection
    ))?;
    console.say(&divider())?;

    debug!("Filters selected: {}", selection);
    Ok(selection)
}

/// Prompt until the answer parses as `T`, printing the validation message
/// after every rejected answer.
pub fn ask_until_valid<T, R, W>(console: &mut Console<R, W>, prompt: &str) -> Result<T>
where
    T: FromStr<Err = SelectionError>,
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(prompt)?;
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!("Rejected {:?} input \"{}\"", err.field, err.input);
                console.say(&err.to_string())?;
            }
        }
    }
}

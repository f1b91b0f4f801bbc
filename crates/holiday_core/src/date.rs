use chrono::{Datelike, Local, NaiveDate};

use crate::ParseError;

const MONTH_DAY_YEAR: &str = "%B %d %Y";

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Parses a gazette date fragment such as `"April 9 (Tuesday)"` into a date
/// in `year`. Anything from the first `(` onwards is ignored. The month
/// must be spelled out in full (any case); abbreviations are rejected.
pub fn parse_holiday_date(text: &str, year: i32) -> Result<NaiveDate, ParseError> {
    let month_day = month_day_text(text);
    if month_day.is_empty() {
        return Err(ParseError::new(text, year, "no month and day found"));
    }
    let date = NaiveDate::parse_from_str(&format!("{month_day} {year}"), MONTH_DAY_YEAR)
        .map_err(|err| ParseError::new(text, year, err.to_string()))?;

    // chrono's %B also takes "Jan"; the gazette always writes full names.
    let month_word = month_day.split(' ').next().unwrap_or_default();
    let full_name = MONTH_NAMES[date.month0() as usize];
    if !month_word.eq_ignore_ascii_case(full_name) {
        return Err(ParseError::new(
            text,
            year,
            format!("month {month_word:?} is not a full month name"),
        ));
    }
    Ok(date)
}

/// Same as [`parse_holiday_date`], rendered as `YYYY-MM-DD`.
pub fn normalize_date(text: &str, year: i32) -> Result<String, ParseError> {
    parse_holiday_date(text, year).map(|date| date.format("%Y-%m-%d").to_string())
}

/// The current local calendar year, read on every call.
pub fn current_year() -> i32 {
    Local::now().year()
}

fn month_day_text(text: &str) -> String {
    let head = text.split('(').next().unwrap_or(text);
    // Also collapses non-breaking spaces, which `char::is_whitespace` covers.
    head.split_whitespace().collect::<Vec<_>>().join(" ")
}

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::layout::{REGULAR_HOLIDAYS_HEADING, SPECIAL_HOLIDAYS_HEADING};

/// Holidays grouped by the year they were fetched for.
pub type YearlyHolidays = BTreeMap<i32, Vec<HolidayRecord>>;

/// Classification of a holiday as published by the gazette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    RegularHoliday,
    SpecialNonWorkingHoliday,
    Unknown,
}

impl HolidayType {
    /// Maps a section heading to its holiday type. Unrecognized headings
    /// become [`HolidayType::Unknown`].
    pub fn from_heading(heading: &str) -> Self {
        match heading.trim() {
            REGULAR_HOLIDAYS_HEADING => HolidayType::RegularHoliday,
            SPECIAL_HOLIDAYS_HEADING => HolidayType::SpecialNonWorkingHoliday,
            _ => HolidayType::Unknown,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            HolidayType::RegularHoliday => "regular_holiday",
            HolidayType::SpecialNonWorkingHoliday => "special_non_working_holiday",
            HolidayType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One holiday extracted from a gazette page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRecord {
    date: NaiveDate,
    #[serde(rename = "event", skip_serializing_if = "Option::is_none")]
    event_name: Option<String>,
    holiday_type: HolidayType,
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, event_name: Option<String>, holiday_type: HolidayType) -> Self {
        Self {
            date,
            event_name,
            holiday_type,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date rendered as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn event_name(&self) -> Option<&str> {
        self.event_name.as_deref()
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }
}

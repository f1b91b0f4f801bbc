use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{HolidayRecord, HolidayType, YearlyHolidays};

/// One output row of [`left_join`]: the index of the input row and the
/// holiday matched onto it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinedRow<'a> {
    pub row: usize,
    pub holiday: Option<&'a HolidayRecord>,
}

impl JoinedRow<'_> {
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    pub fn holiday_type(&self) -> Option<HolidayType> {
        self.holiday.map(HolidayRecord::holiday_type)
    }

    pub fn event_name(&self) -> Option<&str> {
        self.holiday.and_then(HolidayRecord::event_name)
    }
}

/// Left-joins `holidays` onto `dates` by calendar date.
///
/// Every input row appears at least once, in input order. A row whose date
/// matches several holidays is repeated once per match, in holiday order.
pub fn left_join<'a>(dates: &[NaiveDate], holidays: &'a [HolidayRecord]) -> Vec<JoinedRow<'a>> {
    let mut by_date: HashMap<NaiveDate, Vec<&'a HolidayRecord>> = HashMap::new();
    for holiday in holidays {
        by_date.entry(holiday.date()).or_default().push(holiday);
    }

    let mut joined = Vec::with_capacity(dates.len());
    for (row, date) in dates.iter().enumerate() {
        match by_date.get(date) {
            Some(matches) => joined.extend(matches.iter().map(|holiday| JoinedRow {
                row,
                holiday: Some(*holiday),
            })),
            None => joined.push(JoinedRow { row, holiday: None }),
        }
    }
    joined
}

/// Concatenates per-year holiday lists in ascending year order.
pub fn flatten_years(yearly: &YearlyHolidays) -> Vec<HolidayRecord> {
    yearly.values().flatten().cloned().collect()
}

//! Holiday core: pure domain types, normalizers and the date join.
mod date;
mod error;
mod layout;
mod merge;
mod record;

pub use date::{current_year, normalize_date, parse_holiday_date};
pub use error::{ExtractionError, ParseError};
pub use layout::{TableLayout, REGULAR_HOLIDAYS_HEADING, SPECIAL_HOLIDAYS_HEADING};
pub use merge::{flatten_years, left_join, JoinedRow};
pub use record::{HolidayRecord, HolidayType, YearlyHolidays};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use holiday_core::{HolidayRecord, YearlyHolidays};

use crate::persist::{write_atomic, PersistError};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Writes fetched holidays as a JSON object keyed by year, e.g.
/// `{"2024": [{"date": "2024-01-01", "holiday_type": "regular_holiday"}]}`.
pub fn write_holidays_json(path: &Path, yearly: &YearlyHolidays) -> Result<PathBuf, ExportError> {
    let keyed: BTreeMap<String, &Vec<HolidayRecord>> = yearly
        .iter()
        .map(|(year, holidays)| (year.to_string(), holidays))
        .collect();
    let mut content = serde_json::to_vec_pretty(&keyed)?;
    content.push(b'\n');
    Ok(write_atomic(path, &content)?)
}

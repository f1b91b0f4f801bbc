use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use csv::StringRecord;
use holiday_core::{left_join, HolidayRecord};
use thiserror::Error;

use crate::persist::{write_atomic, PersistError};

const DATE_COLUMN: &str = "date";
const EVENT_COLUMN: &str = "event";
const IS_HOLIDAY_COLUMN: &str = "is_holiday";
const HOLIDAY_TYPE_COLUMN: &str = "holiday_type";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("dataset has no `date` column")]
    MissingDateColumn,
    #[error("line {line}: invalid date {value:?}")]
    InvalidDate { line: usize, value: String },
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// A CSV table with a parsed `date` column. Cell text is kept verbatim.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: StringRecord,
    rows: Vec<StringRecord>,
    dates: Vec<NaiveDate>,
}

impl Dataset {
    pub fn read(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let date_column = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(DATE_COLUMN))
            .ok_or(DatasetError::MissingDateColumn)?;

        let mut rows = Vec::new();
        let mut dates = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            // Header is line 1.
            let line = idx + 2;
            let record = result?;
            let value = record.get(date_column).unwrap_or_default();
            let date = parse_dataset_date(value).ok_or_else(|| DatasetError::InvalidDate {
                line,
                value: value.to_string(),
            })?;
            dates.push(date);
            rows.push(record);
        }

        Ok(Self {
            headers,
            rows,
            dates,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct years present in the `date` column, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.dates
            .iter()
            .map(Datelike::year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Left-joins `holidays` onto the rows by date and appends the
    /// `is_holiday` and `holiday_type` columns (preceded by `event` when
    /// `include_event_name` is set).
    pub fn merge(&self, holidays: &[HolidayRecord], include_event_name: bool) -> MergedDataset {
        let mut headers = self.headers.clone();
        if include_event_name {
            headers.push_field(EVENT_COLUMN);
        }
        headers.push_field(IS_HOLIDAY_COLUMN);
        headers.push_field(HOLIDAY_TYPE_COLUMN);

        let rows = left_join(&self.dates, holidays)
            .into_iter()
            .map(|joined| {
                let mut row = self.rows[joined.row].clone();
                if include_event_name {
                    row.push_field(joined.event_name().unwrap_or_default());
                }
                row.push_field(if joined.is_holiday() { "true" } else { "false" });
                row.push_field(joined.holiday_type().map(|t| t.code()).unwrap_or_default());
                row
            })
            .collect();

        MergedDataset { headers, rows }
    }
}

/// The result of [`Dataset::merge`].
#[derive(Debug, Clone)]
pub struct MergedDataset {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl MergedDataset {
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, DatasetError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.into_inner().map_err(|err| DatasetError::Io(err.into_error()))
    }

    pub fn write(&self, path: &Path) -> Result<PathBuf, DatasetError> {
        let content = self.to_csv_bytes()?;
        Ok(write_atomic(path, &content)?)
    }
}

fn parse_dataset_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

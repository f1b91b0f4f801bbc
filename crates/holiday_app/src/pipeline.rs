use std::path::PathBuf;

use holiday_core::{flatten_years, YearlyHolidays};
use holiday_engine::{
    write_holidays_json, Dataset, DatasetError, ExportError, FetchError, HolidayFetchError,
    HolidayFetcher, ReqwestFetcher,
};
use holiday_logging::{holiday_info, holiday_warn};
use thiserror::Error;

use crate::config::{AppConfig, ConfigError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to start http session: {0}")]
    Session(#[source] FetchError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Holidays(#[from] HolidayFetchError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub rows_read: usize,
    pub years: Vec<i32>,
    pub holidays_found: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
}

/// Reads the input dataset, fetches the holidays for every year it covers
/// and writes the left-joined result.
pub async fn merge_dataset(config: &AppConfig) -> Result<MergeSummary, AppError> {
    holiday_info!("Reading data from {}", config.input_path.display());
    let dataset = Dataset::read(&config.input_path)?;
    if dataset.is_empty() {
        holiday_warn!("{} has no rows; nothing to fetch", config.input_path.display());
    }
    let years = dataset.years();

    let yearly = fetch_all(config, &years).await?;
    let holidays = flatten_years(&yearly);
    let merged = dataset.merge(&holidays, config.keep_names);

    holiday_info!("Saving modified data to {}", config.output_path.display());
    let output_path = merged.write(&config.output_path)?;

    // Only after the dataset is written, so a failed run leaves no export.
    if let Some(path) = &config.holidays_json {
        write_holidays_json(path, &yearly)?;
        holiday_info!("Saved fetched holidays to {}", path.display());
    }

    Ok(MergeSummary {
        rows_read: dataset.len(),
        years,
        holidays_found: holidays.len(),
        rows_written: merged.rows().len(),
        output_path,
    })
}

/// One HTTP session for the whole batch; it is dropped on return, including
/// when a year fails part-way.
async fn fetch_all(config: &AppConfig, years: &[i32]) -> Result<YearlyHolidays, AppError> {
    if years.is_empty() {
        return Ok(YearlyHolidays::new());
    }
    let source = ReqwestFetcher::new(config.fetch_settings()).map_err(AppError::Session)?;
    let fetcher = HolidayFetcher::new(source, config.fetch_options());
    Ok(fetcher.fetch_years(years).await?)
}

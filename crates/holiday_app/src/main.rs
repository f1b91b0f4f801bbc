//! `gazette_holidays`: tags a CSV dataset with Philippine nationwide holidays
//! scraped from the Official Gazette.
mod config;
mod logging;
mod pipeline;

use std::path::Path;
use std::process::ExitCode;

use holiday_logging::{holiday_error, holiday_info};

use crate::logging::LogDestination;
use crate::pipeline::{merge_dataset, AppError};

fn main() -> ExitCode {
    let config = match config::load(Path::new(".")) {
        Ok(config) => config,
        Err(err) => {
            logging::initialize(&LogDestination::Terminal);
            return report(AppError::from(err));
        }
    };
    logging::initialize(&config.log_destination());

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            holiday_error!("Failed to start async runtime: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(merge_dataset(&config)) {
        Ok(summary) => {
            holiday_info!(
                "Tagged {} row(s) across {:?} with {} holiday(s); wrote {} row(s) to {}",
                summary.rows_read,
                summary.years,
                summary.holidays_found,
                summary.rows_written,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

fn report(err: AppError) -> ExitCode {
    holiday_error!("{}", err);
    if let AppError::Holidays(fetch_err) = &err {
        if fetch_err.is_retryable() {
            holiday_info!("The gazette could not be reached; running again later may succeed");
        }
    }
    ExitCode::FAILURE
}

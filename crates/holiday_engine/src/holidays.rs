use std::time::Instant;

use holiday_core::{current_year, ExtractionError, HolidayRecord, TableLayout, YearlyHolidays};
use holiday_logging::{holiday_debug, holiday_info, holiday_warn};
use thiserror::Error;

use crate::{decode_html, extract_holidays, FetchError, PageSource};

pub const DEFAULT_URL_TEMPLATE: &str =
    "https://www.officialgazette.gov.ph/nationwide-holidays/{year}/";

const YEAR_PLACEHOLDER: &str = "{year}";

#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Source page URL with a `{year}` placeholder.
    pub url_template: String,
    pub keep_names: bool,
    pub log_timing: bool,
    pub layout: TableLayout,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            keep_names: false,
            log_timing: true,
            layout: TableLayout::default(),
        }
    }
}

/// Why a year's holidays could not be produced.
#[derive(Debug, Error)]
pub enum HolidayFetchError {
    /// The source could not be reached or refused to serve the page.
    #[error("could not retrieve holidays for {year} from {url}: {source}")]
    Retrieval {
        year: i32,
        url: String,
        #[source]
        source: FetchError,
    },
    /// The page arrived but its content could not be read.
    #[error("could not extract holidays for {year}: {source}")]
    Extraction {
        year: i32,
        #[source]
        source: ExtractionError,
    },
}

impl HolidayFetchError {
    pub fn year(&self) -> i32 {
        match self {
            HolidayFetchError::Retrieval { year, .. } | HolidayFetchError::Extraction { year, .. } => {
                *year
            }
        }
    }

    /// Retrieval failures may succeed on a later attempt; extraction
    /// failures will not until the page or the parser changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HolidayFetchError::Retrieval { .. })
    }
}

/// Fetches and extracts gazette holidays, one year at a time.
///
/// The fetcher owns its page source for as long as it lives, so a batch of
/// years shares one session and the session ends when the fetcher drops.
pub struct HolidayFetcher<S: PageSource> {
    source: S,
    options: FetchOptions,
}

impl<S: PageSource> HolidayFetcher<S> {
    pub fn new(source: S, options: FetchOptions) -> Self {
        Self { source, options }
    }

    pub fn source_url(&self, year: i32) -> String {
        self.options
            .url_template
            .replace(YEAR_PLACEHOLDER, &year.to_string())
    }

    pub async fn fetch_year(&self, year: i32) -> Result<Vec<HolidayRecord>, HolidayFetchError> {
        let started = Instant::now();
        let url = self.source_url(year);
        holiday_debug!("Fetching holidays for {} from {}", year, url);

        let output = self
            .source
            .fetch(&url)
            .await
            .map_err(|source| HolidayFetchError::Retrieval {
                year,
                url: url.clone(),
                source,
            })?;

        let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref());
        holiday_debug!(
            "Decoded {} bytes for {} as {}",
            output.metadata.byte_len,
            year,
            decoded.encoding_label
        );
        if decoded.had_errors {
            holiday_warn!(
                "Page for {} had malformed {} bytes; replaced them and continued",
                year,
                decoded.encoding_label
            );
        }

        let holidays = extract_holidays(
            &decoded.html,
            year,
            self.options.keep_names,
            &self.options.layout,
        )
        .map_err(|source| HolidayFetchError::Extraction { year, source })?;

        if self.options.log_timing {
            holiday_info!(
                "{} holiday(s) found in {}. Request processed in {:.2} second(s)",
                holidays.len(),
                year,
                started.elapsed().as_secs_f64()
            );
        }
        Ok(holidays)
    }

    /// Fetches the current year, as of the moment of the call.
    pub async fn fetch_current_year(&self) -> Result<Vec<HolidayRecord>, HolidayFetchError> {
        self.fetch_year(current_year()).await
    }

    /// Fetches each year in turn. The first failure ends the batch.
    pub async fn fetch_years(&self, years: &[i32]) -> Result<YearlyHolidays, HolidayFetchError> {
        let mut yearly = YearlyHolidays::new();
        for &year in years {
            let holidays = self.fetch_year(year).await?;
            yearly.insert(year, holidays);
        }
        Ok(yearly)
    }
}

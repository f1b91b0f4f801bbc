//! Holiday engine: page retrieval, extraction and dataset I/O.
mod dataset;
mod decode;
mod export;
mod extract;
mod fetch;
mod holidays;
mod persist;
mod types;

pub use dataset::{Dataset, DatasetError, MergedDataset};
pub use decode::{decode_html, DecodedHtml};
pub use export::{write_holidays_json, ExportError};
pub use extract::{extract_holidays, page_title, NOT_FOUND_MARKER};
pub use fetch::{FetchSettings, PageSource, ReqwestFetcher};
pub use holidays::{FetchOptions, HolidayFetchError, HolidayFetcher, DEFAULT_URL_TEMPLATE};
pub use persist::{write_atomic, PersistError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};

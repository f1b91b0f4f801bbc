use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use holiday_core::{TableLayout, REGULAR_HOLIDAYS_HEADING, SPECIAL_HOLIDAYS_HEADING};
use holiday_engine::{FetchOptions, FetchSettings, DEFAULT_URL_TEMPLATE};
use serde::Deserialize;
use thiserror::Error;

use crate::logging::LogDestination;

/// Looked up in the working directory; every field is optional.
pub const CONFIG_FILENAME: &str = "gazette_holidays.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub holidays_json: Option<PathBuf>,
    pub url_template: String,
    pub keep_names: bool,
    pub log_timing: bool,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub table_headings: Vec<String>,
    pub fallback_heading: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            input_path: PathBuf::from("data.csv"),
            output_path: PathBuf::from("new_data.csv"),
            holidays_json: None,
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            keep_names: false,
            log_timing: true,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            table_headings: vec![REGULAR_HOLIDAYS_HEADING.to_string()],
            fallback_heading: SPECIAL_HOLIDAYS_HEADING.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_ron(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = ron::from_str(text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.url_template.contains("{year}") {
            return Err(ConfigError::Invalid(format!(
                "url_template {:?} has no {{year}} placeholder",
                self.url_template
            )));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeouts must be at least one second".into()));
        }
        Ok(())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            url_template: self.url_template.clone(),
            keep_names: self.keep_names,
            log_timing: self.log_timing,
            layout: TableLayout::new(self.table_headings.clone(), self.fallback_heading.clone()),
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::Both(path.clone()),
            None => LogDestination::Terminal,
        }
    }
}

/// Loads `gazette_holidays.ron` from `dir`, or the defaults if it is absent.
pub fn load(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    match fs::read_to_string(&path) {
        Ok(text) => AppConfig::from_ron(&text, &path),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Read { path, source }),
    }
}

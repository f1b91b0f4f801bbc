use thiserror::Error;

/// A date fragment that could not be turned into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse date {input:?} for year {year}: {reason}")]
pub struct ParseError {
    pub input: String,
    pub year: i32,
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(input: &str, year: i32, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            year,
            reason: reason.into(),
        }
    }
}

/// A page was retrieved but its holiday tables could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("table {table} row {row}: expected 2 columns, found {found}")]
    MissingColumns { table: usize, row: usize, found: usize },
    #[error("table {table} row {row}: {source}")]
    InvalidDate {
        table: usize,
        row: usize,
        #[source]
        source: ParseError,
    },
}

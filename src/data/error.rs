use std::path::PathBuf;

use thiserror::Error;

/// Failure to read the article table. Fatal at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input is missing required column '{0}'")]
    MissingColumn(String),
    #[error("malformed header: {0}")]
    Header(#[source] csv::Error),
    #[error("malformed record at data row {row}: {source}")]
    Malformed {
        /// 1-based, not counting the header.
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// Failure to build a matcher from the user's query.
#[derive(Error, Debug, Clone)]
pub enum SearchError {
    #[error("invalid regular expression '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Failure to write the CSV export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot create export file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize export: {0}")]
    Csv(#[from] csv::Error),
    #[error("cannot flush export: {0}")]
    Io(#[from] std::io::Error),
}

use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Failed to parse timestamp {value:?} (expected YYYY-MM-DD HH:MM:SS): {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("End time {end} is before start time {start}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Keyword must not be empty")]
    EmptyKeyword,

    #[error("Invalid keyword pattern {keyword:?}: {source}")]
    InvalidKeyword {
        keyword: String,
        #[source]
        source: regex::Error,
    },

    #[error("Keyword pattern {keyword:?} matches the empty string")]
    EmptyMatch { keyword: String },

    #[error("Log file {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is a directory", path.display())]
    IsDirectory { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Error types for apptbook.

use thiserror::Error;

/// Errors that can occur in apptbook operations.
#[derive(Error, Debug)]
pub enum ApptError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Could not parse appointment data: {0}")]
    Parse(String),

    #[error("Unknown sort field '{0}'. Expected one of: petName, ownerName, aptNotes, date")]
    InvalidSortField(String),

    #[error("Unknown sort direction '{0}'. Expected 'asc' or 'desc'")]
    InvalidDirection(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Appointments were already loaded")]
    AlreadyLoaded,
}

impl From<serde_json::Error> for ApptError {
    fn from(e: serde_json::Error) -> Self {
        ApptError::Parse(e.to_string())
    }
}

impl From<reqwest::Error> for ApptError {
    fn from(e: reqwest::Error) -> Self {
        ApptError::Http(e.to_string())
    }
}

/// Result type alias for apptbook operations.
pub type ApptResult<T> = Result<T, ApptError>;

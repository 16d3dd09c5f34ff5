use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid moderation status: {value} {location}")]
    InvalidModerationStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort key: {value} {location}")]
    InvalidSortKey {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid column: {value} {location}")]
    InvalidColumn {
        value: String,
        location: ErrorLocation,
    },

    #[error("Record not found: {id} {location}")]
    RecordNotFound { id: i64, location: ErrorLocation },

    #[error("{username}'s details are still pending (record {id}) {location}")]
    ModerationPrecondition {
        id: i64,
        username: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a network error raised by a moderation authority
    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        CoreError::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn record_not_found(id: i64) -> Self {
        CoreError::RecordNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

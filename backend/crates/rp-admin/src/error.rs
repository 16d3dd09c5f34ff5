use rp_core::CoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Failed to load records: {source} {location}")]
    Load {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        #[source]
        source: CoreError,
    },
}

impl AdminError {
    /// Wrap a failed initial fetch
    #[track_caller]
    pub fn load(source: CoreError) -> Self {
        AdminError::Load {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AdminError {
    fn from(source: CoreError) -> Self {
        AdminError::Core { source }
    }
}

pub type Result<T> = StdResult<T, AdminError>;

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Moderation state of a submitted user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ModerationStatus {
    /// Profile is incomplete; cannot be verified yet
    #[default]
    Pending,
    /// Profile is complete and awaiting a decision
    Submitted,
    /// An operator verified the record
    Verified,
    /// An operator rejected the record
    Rejected,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Submitted => "Submitted",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }

    /// Initial status derived from profile completeness at load time.
    pub fn initial(completeness: bool) -> Self {
        if completeness {
            Self::Submitted
        } else {
            Self::Pending
        }
    }
}

impl FromStr for ModerationStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Submitted" => Ok(Self::Submitted),
            "Verified" => Ok(Self::Verified),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(CoreError::InvalidModerationStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

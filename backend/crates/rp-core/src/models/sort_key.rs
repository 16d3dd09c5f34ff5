use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Preset orderings offered next to the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep collection order (or the active column sort)
    #[default]
    None,
    /// Youngest first
    Age,
    /// Gender, A-Z
    Gender,
    /// Username, A-Z
    Alphabetical,
    /// Highest id first
    Newest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Alphabetical => "a-z",
            Self::Newest => "newest",
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "age" => Ok(Self::Age),
            "gender" => Ok(Self::Gender),
            "a-z" | "alphabetical" => Ok(Self::Alphabetical),
            "newest" => Ok(Self::Newest),
            _ => Err(CoreError::InvalidSortKey {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

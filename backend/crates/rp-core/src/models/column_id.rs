use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Columns of the moderation table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    Id,
    Username,
    Email,
    Dob,
    Age,
    Gender,
    Phone,
    City,
    Status,
}

impl ColumnId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Username => "username",
            Self::Email => "email",
            Self::Dob => "dob",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Phone => "phone",
            Self::City => "city",
            Self::Status => "status",
        }
    }

    /// Position in the fixed column table
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for ColumnId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "username" | "name" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "dob" => Ok(Self::Dob),
            "age" => Ok(Self::Age),
            "gender" => Ok(Self::Gender),
            "phone" => Ok(Self::Phone),
            "city" => Ok(Self::City),
            "status" => Ok(Self::Status),
            _ => Err(CoreError::InvalidColumn {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

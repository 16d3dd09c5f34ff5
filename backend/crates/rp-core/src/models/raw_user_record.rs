use serde::{Deserialize, Serialize};

/// A user row exactly as the authority returns it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUserRecord {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

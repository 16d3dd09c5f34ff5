use serde::{Deserialize, Serialize};

/// Acknowledgement returned by the moderation authority
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: Option<String>,
}

impl Ack {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }
}

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message for the operator (a toast, in a browser UI)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub(crate) fn verified(username: &str) -> Self {
        Self::success(format!("{} is Verified!", username))
    }

    pub(crate) fn still_pending(username: &str) -> Self {
        Self::error(format!("{}'s details are still pending!", username))
    }

    /// The row is kept and marked `Rejected`; the copy says only that.
    pub(crate) fn rejected(username: &str) -> Self {
        Self::error(format!("{} was rejected.", username))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "!!",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

use crate::UserRecord;

use serde::Serialize;

/// Read-only snapshot of the rows visible on the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub rows: Vec<UserRecord>,
    /// Zero-based, already clamped to `[0, page_count - 1]`
    pub page_index: usize,
    /// Never less than 1
    pub page_count: usize,
    /// Rows matching the filter across all pages
    pub total_rows: usize,
}

impl Page {
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    pub fn ids(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.id).collect()
    }
}

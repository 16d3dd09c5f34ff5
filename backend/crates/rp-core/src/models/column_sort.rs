use crate::models::{column_id::ColumnId, sort_direction::SortDirection};

use serde::{Deserialize, Serialize};

/// An explicit sort applied by clicking a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub column: ColumnId,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn new(column: ColumnId, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

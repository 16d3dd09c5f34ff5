use crate::{
    ColumnId, ColumnSort, CoreError, Result as CoreErrorResult, SortDirection, SortKey,
};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Ephemeral filter/sort/page settings owned by the caller
///
/// At most one ordering is effective at a time: choosing a preset
/// [`SortKey`] clears the column sort, and clicking a column resets the
/// preset to [`SortKey::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParameters {
    pub filter_text: String,
    pub sort_key: SortKey,
    pub sort_state: Vec<ColumnSort>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            sort_key: SortKey::None,
            sort_state: Vec::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewParameters {
    #[track_caller]
    pub fn new(page_size: usize) -> CoreErrorResult<Self> {
        let mut params = Self::default();
        params.set_page_size(page_size)?;
        Ok(params)
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.sort_state.clear();
    }

    /// Cycle the clicked column through ascending, descending, unsorted.
    /// A different column replaces the current column sort.
    pub fn toggle_column_sort(&mut self, column: ColumnId) {
        let next = match self.sort_state.first() {
            Some(current) if current.column == column => match current.direction {
                SortDirection::Ascending => Some(SortDirection::Descending),
                SortDirection::Descending => None,
            },
            _ => Some(SortDirection::Ascending),
        };

        self.sort_key = SortKey::None;
        self.sort_state = next
            .map(|direction| vec![ColumnSort::new(column, direction)])
            .unwrap_or_default();
    }

    /// Store the requested index; the projector clamps it against the data.
    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Change the page size, keeping the first visible row on screen.
    #[track_caller]
    pub fn set_page_size(&mut self, size: usize) -> CoreErrorResult<()> {
        if size == 0 {
            return Err(CoreError::validation("page size must be greater than 0"));
        }

        let top_row = self.page_index.saturating_mul(self.page_size);
        self.page_index = top_row / size;
        self.page_size = size;
        Ok(())
    }

    /// The explicit column sort currently in effect, if any
    pub fn column_sort(&self) -> Option<&ColumnSort> {
        self.sort_state.first()
    }
}

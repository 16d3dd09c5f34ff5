use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};

use serde::Deserialize;

/// Largest page size an operator may configure
pub const MAX_MAX_PAGE_SIZE: usize = 10_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per page when the dashboard opens
    pub page_size: usize,
    /// Upper bound accepted for page size changes
    pub max_page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_page_size == 0 || self.max_page_size > MAX_MAX_PAGE_SIZE {
            return Err(ConfigError::view(format!(
                "view.max_page_size must be 1-{}, got {}",
                MAX_MAX_PAGE_SIZE, self.max_page_size
            )));
        }

        if self.page_size == 0 || self.page_size > self.max_page_size {
            return Err(ConfigError::view(format!(
                "view.page_size must be 1-{}, got {}",
                self.max_page_size, self.page_size
            )));
        }

        Ok(())
    }
}

//! Dropdown loader
//!
//! Builds selectable option lists from a list endpoint. Always walks forward
//! with the largest page size and a tight page bound so an interactive picker
//! stays responsive.

mod types;

pub use types::{DropdownConfig, DropdownOption, DROPDOWN_MAX_PAGES};

use crate::engine::ListEngine;
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::CursorPaginator;
use tracing::debug;

/// Loads `{name, value}` options through a `ListEngine`
#[derive(Debug)]
pub struct DropdownLoader<'e, T> {
    engine: &'e ListEngine<T>,
    config: DropdownConfig,
}

impl<'e, T: Transport> DropdownLoader<'e, T> {
    /// Create a loader with the default page size and bound
    pub fn new(engine: &'e ListEngine<T>) -> Self {
        Self {
            engine,
            config: DropdownConfig::default(),
        }
    }

    /// Set loader configuration
    #[must_use]
    pub fn with_config(mut self, config: DropdownConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the loader configuration
    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// Load options from `url`, skipping items that have no id
    pub async fn load_options(&self, url: &str) -> Result<Vec<DropdownOption>> {
        let paginator = CursorPaginator::forward(self.config.page_size, self.config.max_pages);
        let collection = self.engine.collect(url, &paginator, None).await?;

        let total = collection.items.len();
        let options: Vec<DropdownOption> = collection
            .items
            .iter()
            .filter_map(DropdownOption::from_item)
            .collect();

        if options.len() < total {
            debug!(url, skipped = total - options.len(), "Skipped items without id");
        }
        debug!(
            url,
            options = options.len(),
            pages = collection.pages_fetched,
            reason = %collection.stop_reason,
            "Loaded options"
        );
        Ok(options)
    }
}

#[cfg(test)]
mod tests;

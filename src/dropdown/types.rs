//! Dropdown types

use crate::pagination::MAX_PAGE_SIZE;
use crate::types::{json_id, JsonValue};
use serde::{Deserialize, Serialize};

/// Page bound for option lists; they feed interactive pickers
pub const DROPDOWN_MAX_PAGES: u32 = 10;

/// A selectable `{name, value}` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Display label
    pub name: String,
    /// Item id
    pub value: String,
}

impl DropdownOption {
    /// Create an option
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Project an upstream item.
    ///
    /// `name` becomes `"{name} ({id})"` when the item has a non-empty name,
    /// otherwise the bare id. Items without an id yield `None`.
    pub fn from_item(item: &JsonValue) -> Option<Self> {
        let id = item.get("id").and_then(json_id)?;
        let name = match item.get("name").and_then(JsonValue::as_str) {
            Some(name) if !name.is_empty() => format!("{name} ({id})"),
            _ => id.clone(),
        };
        Some(Self { name, value: id })
    }
}

/// Configuration for option loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownConfig {
    /// Items requested per page
    pub page_size: u32,
    /// Most pages fetched per load
    pub max_pages: u32,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            max_pages: DROPDOWN_MAX_PAGES,
        }
    }
}

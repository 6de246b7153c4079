//! Request field helpers
//!
//! Small value transforms whose output shapes list callers depend on:
//! recipient list normalization and template variable payloads.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// A recipient list as callers supply it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmailList {
    /// Comma-separated addresses
    Text(String),
    /// One address per entry
    List(Vec<String>),
}

impl From<&str> for EmailList {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for EmailList {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Trim every address and drop empty ones. Order and duplicates are kept.
pub fn normalize_email_list(input: &EmailList) -> Vec<String> {
    let entries: Vec<&str> = match input {
        EmailList::Text(text) => text.split(',').collect(),
        EmailList::List(list) => list.iter().map(String::as_str).collect(),
    };
    entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Declared type of a template variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    #[default]
    String,
    Number,
}

/// One template variable as entered by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    pub key: String,
    #[serde(rename = "type", default)]
    pub var_type: VariableType,
    #[serde(default)]
    pub value: String,
}

impl TemplateVariable {
    pub fn new(key: impl Into<String>, var_type: VariableType, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            var_type,
            value: value.into(),
        }
    }

    fn to_json(&self) -> Result<JsonValue> {
        match self.var_type {
            VariableType::String => Ok(JsonValue::String(self.value.clone())),
            VariableType::Number => parse_number(&self.value)
                .map(JsonValue::Number)
                .ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "Variable '{}' is declared as a number but '{}' is not numeric",
                        self.key, self.value
                    ))
                }),
        }
    }
}

fn parse_number(raw: &str) -> Option<serde_json::Number> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Some(int.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
}

/// Build the `{key: value}` substitution payload for a template.
///
/// Entries with a blank key are skipped. A `number` variable whose value does
/// not parse fails with `InvalidArgument` naming the key and `item_index`.
pub fn build_template_variables(
    variables: &[TemplateVariable],
    item_index: usize,
) -> Result<JsonObject> {
    let mut payload = JsonObject::new();
    for variable in variables {
        let key = variable.key.trim();
        if key.is_empty() {
            continue;
        }
        let value = variable.to_json().map_err(|e| e.at_item(item_index))?;
        payload.insert(key.to_string(), value);
    }
    Ok(payload)
}

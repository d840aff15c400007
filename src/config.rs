//! Loading rule tables from configuration text.
//!
//! Only the connectivity of a table is configurable; callbacks are code and
//! are registered after loading. Both formats use the same shape:
//!
//! ```json
//! {
//!   "too hot":    { "next": { "explicit": ["just right"] } },
//!   "just right": { "next": { "explicit": ["too hot", "too cold"] } },
//!   "anywhere":   { "next": "any" },
//!   "terminal":   {}
//! }
//! ```
//!
//! A descriptor without `next` has no legal destinations.

use crate::core::State;
use crate::rules::RuleTable;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when parsing a rule table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid JSON rule table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML rule table: {0}")]
    Toml(#[from] toml::de::Error),
}

impl<S: State> RuleTable<S> {
    /// Parse a rule table from JSON. State order follows the document.
    ///
    /// # Example
    ///
    /// ```
    /// use statute::rules::RuleTable;
    ///
    /// let table: RuleTable<String> = RuleTable::from_json_str(
    ///     r#"{"todo": {"next": "any"}, "done": {"next": {"explicit": ["todo"]}}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let table: Self = serde_json::from_str(text)?;
        debug!(states = table.len(), "loaded rule table from JSON");
        Ok(table)
    }

    /// Parse a rule table from TOML, one table per state.
    ///
    /// # Example
    ///
    /// ```
    /// use statute::rules::{NextStates, RuleTable};
    ///
    /// let table: RuleTable<String> = RuleTable::from_toml_str(
    ///     r#"
    ///     ["too hot"]
    ///     next = { explicit = ["just right"] }
    ///
    ///     ["just right"]
    ///     next = "any"
    ///     "#,
    /// )
    /// .unwrap();
    /// assert!(table.get(&"just right".to_string()).unwrap().next.is_any());
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: Self = toml::from_str(text)?;
        debug!(states = table.len(), "loaded rule table from TOML");
        Ok(table)
    }

    /// Render the table's connectivity as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

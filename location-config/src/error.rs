//! Validation error type with a path to the offending value

use serde_json::Value;
use thiserror::Error;

/// One step of the path from the root of the input to the failure point.
///
/// `key` is the index or field name reached at this step (empty at the
/// root); `description` is the structural description expected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEntry {
    pub key: String,
    pub description: String,
}

impl ContextEntry {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Structural mismatch between supplied configuration and its declared
/// shape.
///
/// The rendered message is a contract asserted against in tests:
///
/// ```text
/// Invalid value <value> supplied to : <shape>/<index>: <record>/<field>: <type>
/// ```
///
/// where the path segments are the [`ContextEntry`] chain joined by `/`,
/// each rendered as `<key>: <description>` with an empty key at the root.
/// An absent value renders as `undefined`; present values render as
/// compact JSON.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid value {} supplied to {}", render_actual(.actual), render_context(.context))]
pub struct ValidationError {
    /// The offending value, or `None` when a required field was absent.
    pub actual: Option<Value>,
    /// Path from the root of the input to the failure point.
    pub context: Vec<ContextEntry>,
}

impl ValidationError {
    pub fn new(actual: Option<Value>, context: Vec<ContextEntry>) -> Self {
        Self { actual, context }
    }

    /// The rendered path portion of the message, without the value.
    pub fn path(&self) -> String {
        render_context(&self.context)
    }
}

fn render_actual(actual: &Option<Value>) -> String {
    match actual {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

fn render_context(context: &[ContextEntry]) -> String {
    context
        .iter()
        .map(|entry| format!("{}: {}", entry.key, entry.description))
        .collect::<Vec<_>>()
        .join("/")
}

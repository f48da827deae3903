//! Endevor location configuration model

use crate::error::{ContextEntry, ValidationError};
use crate::shape::{Field, Shape};
use crate::validate::validate;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One mainframe service binding: a named Endevor service plus the
/// element locations configured under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Service name. Any string is accepted at this layer, including the
    /// empty string.
    pub service: String,

    /// Element location paths under the service, in the order supplied.
    /// May be empty, but must be present.
    #[serde(rename = "elementLocations")]
    pub element_locations: Vec<String>,
}

/// Shape of the user-supplied location configuration list:
/// `Array<{service: string, elementLocations: Array<string>}>`.
pub fn location_configs() -> Shape {
    Shape::sequence_of(Shape::record(vec![
        Field::new("service", Shape::String),
        Field::new("elementLocations", Shape::sequence_of(Shape::String)),
    ]))
}

/// Validate raw settings input and deserialize it into typed location
/// configs.
///
/// This is the fail-fast boundary where untyped settings cross into
/// typed application logic: callers `?` the error and abort
/// configuration loading rather than proceeding with a misconfigured
/// service binding. Order and duplicates are preserved as supplied.
///
/// # Errors
///
/// Returns [`crate::ValidationError`] when the input is not a sequence
/// of records each carrying a string `service` and a string-sequence
/// `elementLocations`.
pub fn parse_location_configs(input: &Value) -> Result<Vec<LocationConfig>> {
    let shape = location_configs();
    let validated = validate(&shape, input)?;
    // The shape check above guarantees this deserialization succeeds.
    serde_json::from_value(validated.clone()).map_err(|_| {
        ValidationError::new(
            Some(input.clone()),
            vec![ContextEntry::new("", shape.description())],
        )
    })
}

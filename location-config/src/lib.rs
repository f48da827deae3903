//! Typed location configuration for Endevor Explorer
//!
//! User settings arrive from the host editor as untyped JSON: a list of
//! Endevor service bindings, each naming a service and the element
//! locations under it. This crate declares that shape once and checks
//! arbitrary input against it before anything downstream trusts it.
//!
//! The check is a recursive descent over a small closed set of shape
//! descriptors (see [`Shape`]). On mismatch it reports the exact path to
//! the offending value, so a typo in one settings entry points at that
//! entry rather than failing opaquely.
//!
//! # Example
//!
//! ```rust
//! use location_config::parse_location_configs;
//! use serde_json::json;
//!
//! let raw = json!([
//!     { "service": "endevor.prod", "elementLocations": ["SYS/SUBSYS/*"] }
//! ]);
//!
//! let configs = parse_location_configs(&raw)?;
//! assert_eq!(configs[0].service, "endevor.prod");
//! # Ok::<(), location_config::ValidationError>(())
//! ```

pub mod error;
pub mod locations;
pub mod shape;
pub mod validate;

pub use error::ValidationError;
pub use locations::{location_configs, parse_location_configs, LocationConfig};
pub use shape::{Field, Shape};
pub use validate::validate;

/// Result type for configuration validation
pub type Result<T> = std::result::Result<T, ValidationError>;

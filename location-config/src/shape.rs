//! Structural shape descriptors for untyped configuration input

use std::fmt;

/// One named field of a record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub shape: Shape,
}

impl Field {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// Closed set of shapes a configuration value may be checked against.
///
/// Each shape renders a structural description used verbatim in
/// validation error messages: `string`, `number`, `Array<...>` and
/// `{field: ..., field: ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Any string, including the empty string.
    String,
    /// Any JSON number.
    Number,
    /// Ordered sequence whose elements all match the inner shape.
    Sequence(Box<Shape>),
    /// Record with the given named fields, all required.
    Record(Vec<Field>),
}

impl Shape {
    pub fn sequence_of(inner: Shape) -> Self {
        Shape::Sequence(Box::new(inner))
    }

    pub fn record(fields: Vec<Field>) -> Self {
        Shape::Record(fields)
    }

    /// Structural description of this shape, e.g.
    /// `{service: string, elementLocations: Array<string>}`.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::String => f.write_str("string"),
            Shape::Number => f.write_str("number"),
            Shape::Sequence(inner) => write!(f, "Array<{inner}>"),
            Shape::Record(fields) => {
                f.write_str("{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.shape)?;
                }
                f.write_str("}")
            }
        }
    }
}

//! Recursive descent validation of untyped input against a [`Shape`]

use crate::error::{ContextEntry, ValidationError};
use crate::shape::Shape;
use crate::Result;
use serde_json::Value;

/// Check `input` against `shape`, returning the input unchanged on
/// success.
///
/// Pure function: the input is never mutated or reordered. On mismatch
/// the returned [`ValidationError`] pinpoints the sequence index and
/// field name where the check failed.
///
/// # Errors
///
/// Returns [`ValidationError`] when the input does not conform to the
/// declared shape at any depth.
pub fn validate<'a>(shape: &Shape, input: &'a Value) -> Result<&'a Value> {
    let mut context = vec![ContextEntry::new("", shape.description())];
    check(shape, Some(input), &mut context)?;
    Ok(input)
}

fn check(shape: &Shape, value: Option<&Value>, context: &mut Vec<ContextEntry>) -> Result<()> {
    match shape {
        Shape::String => match value {
            Some(Value::String(_)) => Ok(()),
            other => Err(mismatch(other, context)),
        },
        Shape::Number => match value {
            Some(Value::Number(_)) => Ok(()),
            other => Err(mismatch(other, context)),
        },
        Shape::Sequence(inner) => {
            let Some(Value::Array(items)) = value else {
                return Err(mismatch(value, context));
            };
            for (index, item) in items.iter().enumerate() {
                context.push(ContextEntry::new(index.to_string(), inner.description()));
                check(inner, Some(item), context)?;
                context.pop();
            }
            Ok(())
        }
        Shape::Record(fields) => {
            let Some(Value::Object(map)) = value else {
                return Err(mismatch(value, context));
            };
            for field in fields {
                context.push(ContextEntry::new(
                    field.name.clone(),
                    field.shape.description(),
                ));
                check(&field.shape, map.get(&field.name), context)?;
                context.pop();
            }
            Ok(())
        }
    }
}

fn mismatch(value: Option<&Value>, context: &[ContextEntry]) -> ValidationError {
    ValidationError::new(value.cloned(), context.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Field;
    use serde_json::json;

    fn sample_shape() -> Shape {
        Shape::sequence_of(Shape::record(vec![
            Field::new("service", Shape::String),
            Field::new("elementLocations", Shape::sequence_of(Shape::String)),
        ]))
    }

    #[test]
    fn valid_input_is_returned_unchanged() {
        let input = json!([
            { "service": "some_name", "elementLocations": ["some_location"] }
        ]);
        let validated = validate(&sample_shape(), &input).unwrap();
        assert_eq!(validated, &input);
    }

    #[test]
    fn empty_sequence_is_valid() {
        let input = json!([]);
        assert!(validate(&sample_shape(), &input).is_ok());
    }

    #[test]
    fn top_level_non_sequence_is_rejected() {
        let input = json!("not a list");
        let err = validate(&sample_shape(), &input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value \"not a list\" supplied to \
             : Array<{service: string, elementLocations: Array<string>}>"
        );
    }

    #[test]
    fn non_record_element_is_rejected_with_its_index() {
        let input = json!([{ "service": "a", "elementLocations": [] }, 17]);
        let err = validate(&sample_shape(), &input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 17 supplied to \
             : Array<{service: string, elementLocations: Array<string>}>\
             /1: {service: string, elementLocations: Array<string>}"
        );
    }

    #[test]
    fn missing_service_names_the_field() {
        let input = json!([{ "elementLocations": ["some_location"] }]);
        let err = validate(&sample_shape(), &input).unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("0: {service: string, elementLocations: Array<string>}/service: string"),
            "unexpected message: {message}"
        );
        assert!(message.starts_with("Invalid value undefined supplied to "));
    }

    #[test]
    fn missing_element_locations_names_the_field() {
        let input = json!([{ "service": "some_name" }]);
        let err = validate(&sample_shape(), &input).unwrap_err();
        let message = err.to_string();
        assert!(
            message.ends_with("elementLocations: Array<string>"),
            "unexpected message: {message}"
        );
    }

    #[test]
    fn non_string_location_is_rejected_at_its_index() {
        let input = json!([{ "service": "a", "elementLocations": ["ok", 3] }]);
        let err = validate(&sample_shape(), &input).unwrap_err();
        let message = err.to_string();
        assert!(
            message.ends_with("elementLocations: Array<string>/1: string"),
            "unexpected message: {message}"
        );
        assert_eq!(err.actual, Some(json!(3)));
    }

    #[test]
    fn empty_service_string_is_accepted() {
        let input = json!([{ "service": "", "elementLocations": [] }]);
        assert!(validate(&sample_shape(), &input).is_ok());
    }
}

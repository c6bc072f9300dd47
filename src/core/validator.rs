use crate::domain::model::{Level, ValidatedInput};
use crate::utils::error::ValidationError;
use serde_json::{Map, Value};

/// Narrows a parsed request payload into [`ValidatedInput`].
///
/// Anything that is not a JSON object carries none of the fields, so it fails
/// on `name` like an empty object would.
pub fn validate(raw: &Value) -> Result<ValidatedInput, ValidationError> {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    let name = required_string(fields, "name")?;
    let position = required_string(fields, "position")?;
    let level = required_level(fields, "level")?;

    Ok(ValidatedInput {
        name,
        position,
        level,
    })
}

fn required_string(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::InvalidType { field }),
    }
}

fn required_level(fields: &Map<String, Value>, field: &'static str) -> Result<Level, ValidationError> {
    match fields.get(field) {
        Some(Value::String(s)) => s
            .parse::<Level>()
            .map_err(|value| ValidationError::InvalidEnum { field, value }),
        Some(other) => Err(ValidationError::InvalidEnum {
            field,
            value: other.to_string(),
        }),
        None => Err(ValidationError::InvalidEnum {
            field,
            value: String::new(),
        }),
    }
}

use serde_json::{Map, Value};

use super::ValidationError;

/// Read-only view over a raw JSON object that projects typed fields.
///
/// Every accessor reports failures against the entity kind it was created
/// for, so errors read like `License.name is required`.
pub(crate) struct RawFields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> RawFields<'a> {
    pub(crate) fn new(entity: &'static str, raw: &'a Value) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(map) => Ok(Self { entity, map }),
            _ => Err(ValidationError::NotAnObject { entity }),
        }
    }

    /// A present, non-empty string.
    pub(crate) fn required_str(&self, field: &str) -> Result<String, ValidationError> {
        match self.map.get(field) {
            None | Some(Value::Null) => Err(self.missing(field)),
            Some(Value::String(s)) if s.is_empty() => Err(ValidationError::EmptyField {
                entity: self.entity,
                field: field.to_string(),
            }),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(self.wrong_type(field.to_string(), "a string")),
        }
    }

    /// A string or nothing. `null` is treated as absent.
    pub(crate) fn optional_str(&self, field: &str) -> Result<Option<String>, ValidationError> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(self.wrong_type(field.to_string(), "a string")),
        }
    }

    /// A present list whose elements are all strings. May be empty.
    pub(crate) fn str_list(&self, field: &str) -> Result<Vec<String>, ValidationError> {
        let items = match self.map.get(field) {
            None | Some(Value::Null) => return Err(self.missing(field)),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(self.wrong_type(field.to_string(), "a list of strings")),
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(self.wrong_type(format!("{}[{}]", field, i), "a string")),
            })
            .collect()
    }

    fn missing(&self, field: &str) -> ValidationError {
        ValidationError::MissingField {
            entity: self.entity,
            field: field.to_string(),
        }
    }

    fn wrong_type(&self, field: String, expected: &'static str) -> ValidationError {
        ValidationError::WrongType {
            entity: self.entity,
            field,
            expected,
        }
    }
}

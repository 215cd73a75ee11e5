//! Entity schema for the tool registry.
//!
//! Each entity is an immutable record built from a raw JSON object by
//! [`Entity::from_raw`]. Construction either yields a fully validated value
//! or a [`ValidationError`] naming the entity and the offending field.
//! Unknown fields are ignored; nothing is coerced.

mod entities;
mod error;
mod fields;

pub use entities::{License, Organization, ProgrammingLanguage, SoftwareTool, ToolCategory};
pub use error::ValidationError;

use serde::Serialize;
use serde_json::Value;

/// Field carrying the transient name used to derive an entity's file name.
pub const UNIQUE_NAME_FIELD: &str = "unique_name";

/// A validated registry entity.
pub trait Entity: Serialize + Sized {
    /// Human-readable kind, used in error messages.
    const KIND: &'static str;

    /// Validates a raw JSON object into the entity.
    fn from_raw(raw: &Value) -> Result<Self, ValidationError>;
}

/// Reads the mandatory `unique_name` of a raw record.
///
/// Missing, `null`, non-string and empty values are all rejected, as are
/// names that could leave the collection directory once used as a file
/// stem: path separators, `..` and NUL.
pub fn unique_name<'a>(entity: &'static str, raw: &'a Value) -> Result<&'a str, ValidationError> {
    let map = raw
        .as_object()
        .ok_or(ValidationError::NotAnObject { entity })?;

    match map.get(UNIQUE_NAME_FIELD) {
        None | Some(Value::Null) => Err(ValidationError::MissingField {
            entity,
            field: UNIQUE_NAME_FIELD.to_string(),
        }),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::EmptyField {
            entity,
            field: UNIQUE_NAME_FIELD.to_string(),
        }),
        Some(Value::String(s)) if !is_plain_file_stem(s) => Err(ValidationError::UnsafeName {
            entity,
            field: UNIQUE_NAME_FIELD.to_string(),
            value: s.clone(),
        }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::WrongType {
            entity,
            field: UNIQUE_NAME_FIELD.to_string(),
            expected: "a string",
        }),
    }
}

/// True when `name` cannot name anything but a single file in one directory.
fn is_plain_file_stem(name: &str) -> bool {
    !name.contains(['/', '\\', '\0']) && !name.contains("..")
}

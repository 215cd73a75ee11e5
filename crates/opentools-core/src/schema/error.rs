use thiserror::Error;

/// Errors raised while turning a raw record into an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{entity} record must be a JSON object")]
    NotAnObject { entity: &'static str },

    #[error("{entity}.{field} is required")]
    MissingField { entity: &'static str, field: String },

    #[error("{entity}.{field} must not be empty")]
    EmptyField { entity: &'static str, field: String },

    #[error("{entity}.{field} '{value}' is not a plain file name")]
    UnsafeName {
        entity: &'static str,
        field: String,
        value: String,
    },

    #[error("{entity}.{field} must be {expected}")]
    WrongType {
        entity: &'static str,
        field: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::NotAnObject { .. } => None,
            ValidationError::MissingField { field, .. }
            | ValidationError::EmptyField { field, .. }
            | ValidationError::UnsafeName { field, .. }
            | ValidationError::WrongType { field, .. } => Some(field),
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::ValidationError;

/// Errors that can occur while materializing entities.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("Payload must be a JSON object")]
    PayloadNotObject,

    #[error("Collection '{0}' must be a JSON array")]
    NotAList(&'static str),

    #[error("Invalid record #{index} in '{collection}': {source}")]
    Validation {
        collection: &'static str,
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MaterializeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MaterializeError::Io {
            path: path.into(),
            source,
        }
    }
}

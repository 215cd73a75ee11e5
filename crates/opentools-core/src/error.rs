use std::error::Error as StdError;
use std::fmt::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::fetch::FetchError;
use crate::git::GitError;
use crate::locator::LocateError;
use crate::materialize::MaterializeError;

/// Any failure that ends an ingest run.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Locating data file failed: {0}")]
    Locate(#[from] LocateError),

    #[error("Data file {path} is not valid JSON: {source}")]
    Payload {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Materialization failed: {0}")]
    Materialize(#[from] MaterializeError),

    #[error("Publishing failed: {0}")]
    Git(#[from] GitError),
}

/// Renders an error with every cause, one per line.
pub fn diagnostic(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    let mut depth = 0;

    while let Some(cause) = source {
        if depth == 0 {
            text.push_str("\n\nCaused by:");
        }
        let _ = write!(text, "\n    {}: {}", depth, cause);
        depth += 1;
        source = cause.source();
    }

    text
}

//! Writer for the action output file (`$GITHUB_OUTPUT`).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while writing action outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Appends `key=value` results to the file the runner reads back.
pub struct ActionOutput {
    path: PathBuf,
}

impl ActionOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends a single-line value.
    ///
    /// Values containing a newline are written in the delimited form.
    pub fn set(&self, key: &str, value: &str) -> Result<(), OutputError> {
        if value.contains('\n') {
            return self.set_multiline(key, value);
        }
        self.append(&format!("{}={}\n", key, value))
    }

    /// Appends a value in the `key<<DELIM` heredoc form.
    ///
    /// The delimiter is random so the value cannot terminate it early.
    pub fn set_multiline(&self, key: &str, value: &str) -> Result<(), OutputError> {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        self.append(&format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
    }

    fn append(&self, text: &str) -> Result<(), OutputError> {
        let io = |source| OutputError::Io {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io)?;
        file.write_all(text.as_bytes()).map_err(io)
    }
}

//! Publishing new entity files to a branch.

mod cli;
mod error;

pub use cli::GitCli;
pub use error::GitError;

use std::path::PathBuf;

use async_trait::async_trait;

/// What to commit and where to push it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// Branch created for the commit.
    pub branch: String,
    /// Files to stage.
    pub paths: Vec<PathBuf>,
    /// Commit message.
    pub message: String,
}

/// Trait for publishing backends.
///
/// The action uses [`GitCli`]; tests substitute a recorder.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Commits `request.paths` on a new branch and pushes it.
    ///
    /// Steps run in order and stop at the first failure. Nothing is retried.
    async fn publish(&self, request: &PublishRequest) -> Result<(), GitError>;
}

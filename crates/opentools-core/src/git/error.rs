use thiserror::Error;

/// Errors that can occur while publishing a branch.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}", .code.map_or("a signal".to_string(), |c| format!("code {}", c)))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

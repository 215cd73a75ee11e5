use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::{GitError, PublishRequest, Publisher};
use crate::config::GitSettings;

/// Publisher that shells out to the `git` binary.
pub struct GitCli {
    settings: GitSettings,
}

impl GitCli {
    /// Creates a publisher running in the current directory.
    pub fn new(settings: GitSettings) -> Self {
        Self { settings }
    }

    /// The argument lists run for `request`, in order.
    pub fn commands(&self, request: &PublishRequest) -> Vec<Vec<String>> {
        let git = &self.settings;
        let mut add = vec!["add".to_string(), "--".to_string()];
        add.extend(request.paths.iter().map(|p| p.to_string_lossy().into_owned()));

        vec![
            args(&["config", "--global", "user.email", &git.user_email]),
            args(&["config", "--global", "user.name", &git.user_name]),
            args(&["config", "--global", "--add", "safe.directory", &git.safe_directory]),
            args(&["checkout", "-b", &request.branch]),
            add,
            args(&["commit", "-m", &request.message]),
            args(&["push", "--set-upstream", &git.remote, &request.branch]),
        ]
    }

    async fn run(&self, args: &[String]) -> Result<(), GitError> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, "Running");

        let output = Command::new("git")
            .args(args)
            .output()
            .await.map_err(|source| GitError::Spawn {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(GitError::Failed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Publisher for GitCli {
    async fn publish(&self, request: &PublishRequest) -> Result<(), GitError> {
        for args in self.commands(request) {
            self.run(&args).await?;
        }
        info!(branch = %request.branch, files = request.paths.len(), "Pushed branch");
        Ok(())
    }
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

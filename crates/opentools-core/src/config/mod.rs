//! Configuration for the ingest action.
//!
//! Two layers are kept apart:
//! 1. [`ActionInputs`] - per-invocation values handed over by the workflow
//!    through the environment. Read once at process start.
//! 2. [`Settings`] - tunables loaded from `opentools.toml` when present,
//!    overridden by `OPENTOOLS_*` environment variables, falling back to
//!    built-in defaults.
//!
//! Pipeline components only ever receive these structs; none of them read
//! the process environment on their own.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing action inputs: {}", .0.join(", "))]
    MissingInputs(Vec<&'static str>),

    #[error("Invalid issue number: {0}")]
    InvalidIssueNumber(String),
}

/// Leading entries of the input list that identify the issue.
const ISSUE_INPUT_COUNT: usize = 4;

/// Inputs for a single action invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInputs {
    /// Issue number, used to name the branch.
    pub issue_number: u64,

    /// Issue title. Only logged.
    pub issue_title: String,

    /// API endpoint of the issue.
    pub issue_url: String,

    /// Access token for the issue API.
    pub token: String,

    /// Directory holding the `licenses/`, `organizations/`, `languages/`
    /// and `software/` collections.
    pub data_root: PathBuf,

    /// File the `key=value` results are appended to.
    pub output_path: PathBuf,
}

impl ActionInputs {
    /// Reads the inputs from the process environment.
    ///
    /// Returns `Ok(None)` when none of the issue inputs are set, which means
    /// the action was triggered without an issue and has nothing to do.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the inputs from an arbitrary key lookup.
    ///
    /// Empty values count as absent. Presence is decided by the four issue
    /// inputs alone, since the runner always sets `GITHUB_OUTPUT`. Once any
    /// issue input is set, every input including the data path and output
    /// file is required; a gap is a [`ConfigError::MissingInputs`].
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let keys = [
            ENV_ISSUE_NUMBER,
            ENV_ISSUE_TITLE,
            ENV_ISSUE_URL,
            ENV_TOKEN,
            ENV_DATA_PATH,
            ENV_OUTPUT,
        ];

        let values: Vec<Option<String>> = keys
            .iter()
            .map(|key| lookup(key).filter(|value| !value.trim().is_empty()))
            .collect();

        if values[..ISSUE_INPUT_COUNT].iter().all(Option::is_none) {
            return Ok(None);
        }

        let missing: Vec<&'static str> = keys
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| *key)
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingInputs(missing));
        }

        let mut values = values.into_iter().flatten();
        let mut next = || values.next().unwrap_or_default();

        let raw_number = next();
        let issue_number = raw_number
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidIssueNumber(raw_number.clone()))?;

        Ok(Some(Self {
            issue_number,
            issue_title: next(),
            issue_url: next(),
            token: next(),
            data_root: PathBuf::from(next()),
            output_path: PathBuf::from(next()),
        }))
    }

    /// Name of the branch the new entity files are pushed to.
    pub fn branch_name(&self) -> String {
        format!("issue_{}_branch", self.issue_number)
    }
}

/// Tunables shared by every invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP client configuration.
    pub http: HttpSettings,

    /// Git publisher configuration.
    pub git: GitSettings,

    /// Storage configuration.
    pub storage: StorageSettings,
}

impl Settings {
    /// Load settings from `./opentools.toml`, or defaults when it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(SETTINGS_FILE).exists() {
            return Self::from_file(SETTINGS_FILE);
        }

        let mut settings = Self::default();
        settings.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Load settings from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: Settings = toml::from_str(&content)?;

        settings.apply_env_overrides(|key| std::env::var(key).ok());

        Ok(settings)
    }

    /// Apply `OPENTOOLS_*` overrides from the given lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secs) = lookup("OPENTOOLS_HTTP_TIMEOUT_SECS") {
            if let Ok(n) = secs.parse() {
                self.http.timeout_secs = n;
            }
        }
        if let Some(name) = lookup("OPENTOOLS_GIT_USER_NAME") {
            self.git.user_name = name;
        }
        if let Some(email) = lookup("OPENTOOLS_GIT_USER_EMAIL") {
            self.git.user_email = email;
        }
        if let Some(dir) = lookup("OPENTOOLS_SAFE_DIRECTORY") {
            self.git.safe_directory = dir;
        }
        if let Some(dir) = lookup("OPENTOOLS_DOWNLOAD_DIR") {
            self.storage.download_dir = dir;
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Timeout applied to each request, in seconds.
    pub timeout_secs: u64,

    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Git publisher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// Commit author name.
    pub user_name: String,

    /// Commit author email.
    pub user_email: String,

    /// Directory added to `safe.directory`.
    pub safe_directory: String,

    /// Remote the branch is pushed to.
    pub remote: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_GIT_USER_NAME.to_string(),
            user_email: DEFAULT_GIT_USER_EMAIL.to_string(),
            safe_directory: DEFAULT_SAFE_DIRECTORY.to_string(),
            remote: DEFAULT_GIT_REMOTE.to_string(),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory the downloaded data file is written to.
    pub download_dir: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            download_dir: DEFAULT_DOWNLOAD_DIR.to_string(),
        }
    }
}

impl StorageSettings {
    /// Get the download directory as a path.
    pub fn download_path(&self) -> PathBuf {
        PathBuf::from(&self.download_dir)
    }
}

//! Default values for the ingest action.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Invocation Inputs
// ============================================================================

/// Environment variable holding the issue number.
pub const ENV_ISSUE_NUMBER: &str = "INPUT_ISSUE_NUMBER";

/// Environment variable holding the issue title.
pub const ENV_ISSUE_TITLE: &str = "INPUT_ISSUE_TITLE";

/// Environment variable holding the issue API URL.
pub const ENV_ISSUE_URL: &str = "INPUT_ISSUE_URL";

/// Environment variable holding the access token.
pub const ENV_TOKEN: &str = "INPUT_TOKEN";

/// Environment variable holding the data root directory.
pub const ENV_DATA_PATH: &str = "INPUT_DATAPATH";

/// Environment variable naming the action output file.
pub const ENV_OUTPUT: &str = "GITHUB_OUTPUT";

// ============================================================================
// HTTP Defaults
// ============================================================================

/// Per-request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 300;

/// User agent sent with every request. GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("opentools-action/", env!("CARGO_PKG_VERSION"));

/// Accept header for issue API calls.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

// ============================================================================
// Git Defaults
// ============================================================================

/// Commit author name.
pub const DEFAULT_GIT_USER_NAME: &str = "GPST Opentools";

/// Commit author email.
pub const DEFAULT_GIT_USER_EMAIL: &str = "gpst.opentools@nrel.gov";

/// Directory registered as `safe.directory` inside the action container.
pub const DEFAULT_SAFE_DIRECTORY: &str = "/github/workspace";

/// Remote the issue branch is pushed to.
pub const DEFAULT_GIT_REMOTE: &str = "origin";

// ============================================================================
// Storage Defaults
// ============================================================================

/// Directory downloaded data files are written to.
pub const DEFAULT_DOWNLOAD_DIR: &str = ".";

/// Project-local settings file name.
pub const SETTINGS_FILE: &str = "opentools.toml";

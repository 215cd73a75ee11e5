use std::collections::HashMap;
use std::path::PathBuf;

use opentools_core::config::{
    ENV_DATA_PATH, ENV_ISSUE_NUMBER, ENV_ISSUE_TITLE, ENV_ISSUE_URL, ENV_OUTPUT, ENV_TOKEN,
    DEFAULT_GIT_USER_EMAIL, DEFAULT_GIT_USER_NAME, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_SAFE_DIRECTORY,
};
use opentools_core::{ActionInputs, ConfigError, Settings};
use tempfile::TempDir;

fn full_env() -> HashMap<&'static str, String> {
    HashMap::from([
        (ENV_ISSUE_NUMBER, "42".to_string()),
        (ENV_ISSUE_TITLE, "Add Acme".to_string()),
        (ENV_ISSUE_URL, "https://api.github.com/repos/acme/registry/issues/42".to_string()),
        (ENV_TOKEN, "secret".to_string()),
        (ENV_DATA_PATH, "data".to_string()),
        (ENV_OUTPUT, "/tmp/github_output".to_string()),
    ])
}

fn inputs_from(env: &HashMap<&'static str, String>) -> Result<Option<ActionInputs>, ConfigError> {
    ActionInputs::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn test_all_inputs_present() {
    let inputs = inputs_from(&full_env()).unwrap().unwrap();
    assert_eq!(inputs.issue_number, 42);
    assert_eq!(inputs.issue_title, "Add Acme");
    assert_eq!(inputs.token, "secret");
    assert_eq!(inputs.data_root, PathBuf::from("data"));
    assert_eq!(inputs.output_path, PathBuf::from("/tmp/github_output"));
    assert_eq!(inputs.branch_name(), "issue_42_branch");
}

#[test]
fn test_no_inputs_is_nothing_to_do() {
    assert!(inputs_from(&HashMap::new()).unwrap().is_none());
}

#[test]
fn test_partial_inputs_are_a_config_error() {
    let mut env = full_env();
    env.remove(ENV_TOKEN);
    env.insert(ENV_DATA_PATH, String::new());

    match inputs_from(&env) {
        Err(ConfigError::MissingInputs(missing)) => {
            assert_eq!(missing, vec![ENV_TOKEN, ENV_DATA_PATH]);
        }
        other => panic!("expected missing inputs, got {other:?}"),
    }
}

#[test]
fn test_issue_number_must_be_numeric() {
    let mut env = full_env();
    env.insert(ENV_ISSUE_NUMBER, "forty-two".to_string());
    assert!(matches!(
        inputs_from(&env),
        Err(ConfigError::InvalidIssueNumber(_))
    ));
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.http.timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    assert_eq!(settings.git.user_name, DEFAULT_GIT_USER_NAME);
    assert_eq!(settings.git.user_email, DEFAULT_GIT_USER_EMAIL);
    assert_eq!(settings.git.safe_directory, DEFAULT_SAFE_DIRECTORY);
    assert_eq!(settings.storage.download_path(), PathBuf::from("."));
}

#[test]
fn test_settings_to_toml() {
    let toml_str = toml::to_string_pretty(&Settings::default()).unwrap();
    assert!(toml_str.contains("[http]"));
    assert!(toml_str.contains("[git]"));
    assert!(toml_str.contains("[storage]"));
}

#[test]
fn test_settings_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("opentools.toml");
    std::fs::write(
        &path,
        r#"
[git]
remote = "upstream"

[storage]
download_dir = "downloads"
"#,
    )
    .unwrap();

    let settings = Settings::from_file(&path).unwrap();
    assert_eq!(settings.git.remote, "upstream");
    assert_eq!(settings.git.user_name, DEFAULT_GIT_USER_NAME);
}

#[test]
fn test_settings_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("opentools.toml");
    std::fs::write(&path, "[http\ntimeout_secs = ").unwrap();

    assert!(matches!(
        Settings::from_file(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_runner_variables_alone_are_nothing_to_do() {
    let env = HashMap::from([
        (ENV_OUTPUT, "/tmp/github_output".to_string()),
        (ENV_DATA_PATH, "data".to_string()),
    ]);
    assert!(inputs_from(&env).unwrap().is_none());
}

#[test]
fn test_issue_inputs_still_require_output_file() {
    let mut env = full_env();
    env.remove(ENV_OUTPUT);

    match inputs_from(&env) {
        Err(ConfigError::MissingInputs(missing)) => assert_eq!(missing, vec![ENV_OUTPUT]),
        other => panic!("expected missing inputs, got {other:?}"),
    }
}

//! Orchestration of one ingest run.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{error, info};

use crate::config::ActionInputs;
use crate::error::{diagnostic, ActionError};
use crate::git::{PublishRequest, Publisher};
use crate::locator::IssueFileLocator;
use crate::materialize::materialize;
use crate::output::{ActionOutput, OutputError};

/// Output key carrying the pushed branch name.
pub const BRANCH_OUTPUT: &str = "branch";

/// Output key carrying the failure diagnostic.
pub const ERROR_OUTPUT: &str = "errormessage";

/// Successful result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// New entity files were committed and pushed to this branch.
    Branch(String),
    /// Nothing new to add.
    NoOp,
}

/// Runs the locate → materialize → publish pipeline for one issue.
pub struct IssueIngest<P: Publisher> {
    locator: IssueFileLocator,
    publisher: P,
}

impl<P: Publisher> IssueIngest<P> {
    /// Creates a pipeline from its collaborators.
    pub fn new(locator: IssueFileLocator, publisher: P) -> Self {
        Self { locator, publisher }
    }

    /// Processes the issue described by `inputs`.
    ///
    /// Returns [`Outcome::NoOp`] when the issue references no data file or
    /// the file holds nothing new. Any other problem is an error; git steps
    /// after a failure are not run.
    pub async fn run(&self, inputs: &ActionInputs) -> Result<Outcome, ActionError> {
        info!(
            issue = inputs.issue_number,
            title = %inputs.issue_title,
            "Processing issue"
        );

        let Some(data_file) = self
            .locator
            .locate_latest_data_file(&inputs.issue_url, &inputs.token)
            .await?
        else {
            return Ok(Outcome::NoOp);
        };

        let payload = load_payload(&data_file)?;
        let created = materialize(&payload, &inputs.data_root)?;
        if created.is_empty() {
            info!("No new entities, nothing to commit");
            return Ok(Outcome::NoOp);
        }

        let branch = inputs.branch_name();
        let request = PublishRequest {
            branch: branch.clone(),
            paths: created,
            message: commit_message(inputs.issue_number, &data_file),
        };
        self.publisher.publish(&request).await?;

        Ok(Outcome::Branch(branch))
    }
}

/// Reads and parses a downloaded data file.
pub fn load_payload(path: &Path) -> Result<Value, ActionError> {
    let bytes = fs::read(path).map_err(|source| ActionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ActionError::Payload {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the result of a run to the action output file.
///
/// A no-op run writes nothing.
pub fn report(result: &Result<Outcome, ActionError>, output: &ActionOutput) -> Result<(), OutputError> {
    match result {
        Ok(Outcome::Branch(branch)) => output.set(BRANCH_OUTPUT, branch),
        Ok(Outcome::NoOp) => Ok(()),
        Err(e) => {
            error!(error = %e, "Ingest failed");
            output.set_multiline(ERROR_OUTPUT, &diagnostic(e))
        }
    }
}

fn commit_message(issue_number: u64, data_file: &Path) -> String {
    let file_name = data_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| data_file.display().to_string());
    format!("Add entities from issue #{} ({})", issue_number, file_name)
}

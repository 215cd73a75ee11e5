//! Core of the opentools issue ingest action.
//!
//! An issue comment links a JSON data file; the pipeline downloads the most
//! recent one, validates its licenses, organizations, languages and software
//! tools, writes each new entity as its own file and pushes them to a branch.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod git;
pub mod locator;
pub mod materialize;
pub mod output;
pub mod pipeline;
pub mod schema;

pub use config::{ActionInputs, ConfigError, Settings};
pub use error::{diagnostic, ActionError};
pub use extract::{extract_bracketed_identifier, extract_json_urls, slugify_unique_name};
pub use fetch::{FetchError, HttpFetcher};
pub use git::{GitCli, GitError, PublishRequest, Publisher};
pub use locator::{IssueFileLocator, LocateError};
pub use materialize::{materialize, Collection, EntityStore, MaterializeError};
pub use output::{ActionOutput, OutputError};
pub use pipeline::{load_payload, report, IssueIngest, Outcome};
pub use schema::{
    Entity, License, Organization, ProgrammingLanguage, SoftwareTool, ToolCategory,
    ValidationError,
};

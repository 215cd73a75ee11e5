use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use opentools_core::{
    load_payload, materialize, report, ActionError, ActionInputs, ActionOutput, GitCli,
    HttpFetcher, IssueFileLocator, IssueIngest, Outcome, Settings,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "opentools")]
#[command(about = "Turn data files linked from issues into registry entity files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as a GitHub Action, reading inputs from the environment (default)
    Run,
    /// Apply a local payload file to a data directory
    Materialize {
        /// JSON payload with licenses, organizations, languages and software
        payload: PathBuf,
        /// Directory holding the entity collections
        #[arg(long)]
        data_root: PathBuf,
    },
    /// Download the latest data file referenced by an issue
    Locate {
        /// API URL of the issue
        issue_url: String,
        /// Access token for the issue API
        #[arg(long, default_value = "")]
        token: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("opentools_cli=info,opentools_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_action().await,
        Commands::Materialize { payload, data_root } => {
            finish(materialize_local(&payload, &data_root))
        }
        Commands::Locate { issue_url, token } => finish(locate(&issue_url, &token).await),
    }
}

/// Action entry point. Failures after the inputs are read go to the output
/// file, not the exit code.
async fn run_action() -> ExitCode {
    let inputs = match ActionInputs::from_env() {
        Ok(Some(inputs)) => inputs,
        Ok(None) => {
            info!("No issue inputs set, nothing to do");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            error!(error = %e, "Invalid action inputs");
            return ExitCode::FAILURE;
        }
    };

    let output = ActionOutput::new(&inputs.output_path);
    let result = ingest(&inputs).await;

    match report(&result, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Could not write action outputs");
            ExitCode::FAILURE
        }
    }
}

async fn ingest(inputs: &ActionInputs) -> Result<Outcome, ActionError> {
    let settings = Settings::load()?;
    let fetcher = HttpFetcher::new(&settings.http)?;
    let locator = IssueFileLocator::new(fetcher, settings.storage.download_path());
    let pipeline = IssueIngest::new(locator, GitCli::new(settings.git));

    pipeline.run(inputs).await
}

fn materialize_local(payload: &Path, data_root: &Path) -> Result<(), ActionError> {
    let payload = load_payload(payload)?;
    let created = materialize(&payload, data_root)?;

    if created.is_empty() {
        println!("Nothing new to add.");
    }
    for path in created {
        println!("{}", path.display());
    }
    Ok(())
}

async fn locate(issue_url: &str, token: &str) -> Result<(), ActionError> {
    let settings = Settings::load()?;
    let fetcher = HttpFetcher::new(&settings.http)?;
    let locator = IssueFileLocator::new(fetcher, settings.storage.download_path());

    match locator.locate_latest_data_file(issue_url, token).await? {
        Some(path) => println!("{}", path.display()),
        None => println!("No data file referenced."),
    }
    Ok(())
}

fn finish(result: Result<(), ActionError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", opentools_core::diagnostic(&e));
            ExitCode::FAILURE
        }
    }
}

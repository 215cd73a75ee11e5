//! Finds the data file an issue points at and downloads it.

use std::fs;
use std::path::PathBuf;

use reqwest::Url;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::extract::extract_json_urls;
use crate::fetch::{FetchError, HttpFetcher};

/// Errors that can occur while locating the issue's data file.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Cannot derive a file name from {0}")]
    InvalidFileName(String),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves the most recently referenced data file of an issue.
///
/// Issue threads are read as an append-only log: only the last comment is
/// inspected, falling back to the issue body when there are no comments.
/// Within that text the last `.json` link wins.
pub struct IssueFileLocator {
    fetcher: HttpFetcher,
    download_dir: PathBuf,
}

impl IssueFileLocator {
    /// Creates a locator that writes downloads into `download_dir`.
    pub fn new(fetcher: HttpFetcher, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            download_dir: download_dir.into(),
        }
    }

    /// Downloads the latest data file referenced by the issue at `issue_url`.
    ///
    /// Returns `Ok(None)` when the issue references no data file at all.
    pub async fn locate_latest_data_file(
        &self,
        issue_url: &str,
        token: &str,
    ) -> Result<Option<PathBuf>, LocateError> {
        let urls = self.candidate_urls(issue_url, token).await?;

        let Some(latest) = select_latest(&urls) else {
            info!("No data file referenced by the issue");
            return Ok(None);
        };
        info!(url = %latest, candidates = urls.len(), "Selected data file");

        let file_name = file_name_from_url(latest)?;
        let bytes = self.fetcher.get_bytes(latest).await?;

        let path = self.download_dir.join(file_name);
        fs::write(&path, bytes).map_err(|source| LocateError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "Downloaded data file");

        Ok(Some(path))
    }

    /// URLs from the last comment, or from the body when there are no comments.
    async fn candidate_urls(&self, issue_url: &str, token: &str) -> Result<Vec<String>, LocateError> {
        let base = issue_url.trim_end_matches('/');
        let comments_url = format!("{}/comments", base);

        let comments = self.fetcher.get_json(&comments_url, Some(token)).await?;
        if let Some(last) = comments.as_ref().and_then(Value::as_array).and_then(|c| c.last()) {
            debug!("Scanning last comment");
            return Ok(extract_json_urls(body_text(last)));
        }

        debug!("No comments, scanning issue body");
        let issue = self.fetcher.get_json(base, Some(token)).await?;
        Ok(issue
            .as_ref()
            .map(|issue| extract_json_urls(body_text(issue)))
            .unwrap_or_default())
    }
}

/// The last URL by position.
pub fn select_latest(urls: &[String]) -> Option<&str> {
    urls.last().map(String::as_str)
}

/// The final path segment of `url`.
pub fn file_name_from_url(url: &str) -> Result<String, LocateError> {
    let parsed = Url::parse(url).map_err(|_| LocateError::InvalidFileName(url.to_string()))?;

    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| LocateError::InvalidFileName(url.to_string()))
}

/// The `body` of an issue or comment. `null` reads as empty text.
fn body_text(item: &Value) -> &str {
    item.get("body").and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_latest_by_position() {
        let urls = vec![
            "https://x/a.json".to_string(),
            "https://x/b.json".to_string(),
        ];
        assert_eq!(select_latest(&urls), Some("https://x/b.json"));
        assert_eq!(select_latest(&[]), None);
    }

    #[test]
    fn test_file_name_from_url() {
        let name = file_name_from_url("https://github.com/user-attachments/files/1/issue42.json").unwrap();
        assert_eq!(name, "issue42.json");
    }

    #[test]
    fn test_file_name_rejects_bare_host() {
        assert!(file_name_from_url("https://host/").is_err());
    }
}

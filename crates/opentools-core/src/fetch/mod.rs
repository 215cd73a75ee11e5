//! HTTP access to the issue API and to data file hosts.
//!
//! One attempt per call. The configured timeout is the only time limit.

mod error;

pub use error::FetchError;

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::{HttpSettings, GITHUB_ACCEPT};

/// HTTP client for the issue API and data file hosts.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the timeout and user agent from `settings`.
    pub fn new(settings: &HttpSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// Any status other than 200 yields `Ok(None)`: an issue without
    /// comments or a missing resource is an expected outcome. A 200 with a
    /// body that is not JSON is an error.
    pub async fn get_json(&self, url: &str, token: Option<&str>) -> Result<Option<Value>, FetchError> {
        let mut req = self.client.get(url).header(ACCEPT, GITHUB_ACCEPT);

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = req.send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "GET json");

        if status != StatusCode::OK {
            return Ok(None);
        }

        let body = response.text().await?;
        let value = serde_json::from_str(&body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })?;

        Ok(Some(value))
    }

    /// GET `url` without credentials and return the raw body.
    ///
    /// Unlike [`get_json`](Self::get_json), a non-200 status is an error:
    /// callers only download files they have already identified.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "GET bytes");

        if status != StatusCode::OK {
            return Err(FetchError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

//! PostgREST client over `reqwest`.
//!
//! Thin HTTP wrapper: one GET per [`Select`], authenticated with the
//! project's anonymous key. Pure parsing in `parse_rows` / `parse_error`
//! for testability.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use serde::Deserialize;

use super::{Backend, BackendError, Row, Select};
use crate::config::BackendConfig;

// =============================================================================
// CLIENT
// =============================================================================

pub struct RestBackend {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl RestBackend {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.url.clone(),
            anon_key: config.anon_key.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl Backend for RestBackend {
    async fn select(&self, query: &Select) -> Result<Vec<Row>, BackendError> {
        let url = format!("{}{}", self.base_url, query.path());
        let response = self
            .http
            .get(&url)
            .query(&query.to_query_pairs())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(parse_error(status.as_u16(), &text));
        }

        let rows = parse_rows(&text)?;
        tracing::debug!(collection = query.collection(), rows = rows.len(), "backend select");
        Ok(rows)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// PostgREST error object.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

fn parse_rows(body: &str) -> Result<Vec<Row>, BackendError> {
    serde_json::from_str::<Vec<Row>>(body).map_err(|e| BackendError::Parse(e.to_string()))
}

fn parse_error(status: u16, body: &str) -> BackendError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(message), code: Some(code) }) => format!("{message} ({code})"),
        Ok(ErrorBody { message: Some(message), code: None }) => message,
        _ if body.trim().is_empty() => "empty response body".to_owned(),
        _ => body.trim().to_owned(),
    };
    BackendError::Response { status, message }
}

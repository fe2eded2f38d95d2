//! HTTP client for the Pexels photo search API.
//!
//! One GET per search call, no retries, no caching. The API key is injected
//! at construction and forwarded verbatim in the `Authorization` header; the
//! base URL is injectable so tests can point the client at a mock server.

use reqwest::header;
use tracing::debug;

use super::models::{PexelsSearchResponse, SearchRequest};
use crate::domains::tools::ToolError;

/// Client for the Pexels photo search endpoint.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection
/// pool across clones, so one client can serve concurrent tool calls.
#[derive(Debug, Clone)]
pub struct PexelsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PexelsClient {
    /// Create a new client against the given API base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Execute one search request against the upstream API.
    ///
    /// Maps every failure mode to a `ToolError`: transport faults carry the
    /// underlying message, non-2xx statuses become `ToolError::Api`, and an
    /// unparseable body becomes `ToolError::Parse`.
    pub async fn search(&self, request: &SearchRequest) -> Result<PexelsSearchResponse, ToolError> {
        let url = format!("{}/search", self.base_url);
        debug!("GET {} query={:?} page={}", url, request.query, request.page);

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, &self.api_key)
            .query(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::api(status));
        }

        response
            .json::<PexelsSearchResponse>()
            .await
            .map_err(ToolError::Parse)
    }
}

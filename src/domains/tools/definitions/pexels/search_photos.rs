//! Pexels photo search tool.
//!
//! The one tool this server exposes. Validates the arguments, issues a single
//! upstream search, reduces the photo records, and wraps the outcome in the
//! `{success, data|error}` envelope. Every in-call failure is converted to an
//! error envelope here; nothing escapes this boundary as a protocol fault.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::client::PexelsClient;
use super::models::{Orientation, PhotoColor, PhotoSize, SearchRequest, SearchResult};
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::domains::tools::{ToolError, ToolOutput};

/// Parameters for a photo search call.
///
/// `query` is advertised as required; everything else is optional with the
/// defaults the Pexels API documents. Deserialization stays permissive for
/// an absent `query` (empty string) so a misbehaving caller still gets an
/// error envelope instead of a protocol fault.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(extend("required" = ["query"]))]
pub struct SearchPhotosParams {
    /// The search term.
    #[serde(default)]
    #[schemars(required, description = "Search term for finding photos")]
    pub query: String,

    /// Result page to fetch.
    #[serde(default = "default_page")]
    #[schemars(range(min = 1), description = "Page number (default: 1)")]
    pub page: u32,

    /// Number of results per page.
    #[serde(default = "default_per_page")]
    #[schemars(
        range(min = 1, max = 80),
        description = "Number of results per page (default: 15, max: 80)"
    )]
    pub per_page: u32,

    /// Orientation filter.
    #[schemars(description = "Filter by photo orientation")]
    pub orientation: Option<Orientation>,

    /// Size filter.
    #[schemars(description = "Filter by photo size")]
    pub size: Option<PhotoSize>,

    /// Dominant color filter.
    #[schemars(description = "Filter by dominant color")]
    pub color: Option<PhotoColor>,

    /// Search locale.
    #[schemars(description = "The locale for the search (e.g., en-US, pt-BR)")]
    pub locale: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    15
}

impl SearchPhotosParams {
    /// Apply defaults and validate the required field, producing the request
    /// sent upstream. An empty `locale` counts as absent.
    fn into_request(self) -> std::result::Result<SearchRequest, ToolError> {
        if self.query.is_empty() {
            return Err(ToolError::MissingQuery);
        }

        Ok(SearchRequest {
            query: self.query,
            page: self.page,
            per_page: self.per_page,
            orientation: self.orientation,
            size: self.size,
            color: self.color,
            locale: self.locale.filter(|locale| !locale.is_empty()),
        })
    }
}

/// Pexels photo search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchPhotosTool;

impl SearchPhotosTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_photos";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for photos on Pexels using a query term";

    /// Execute the tool logic, returning the envelope as a tool result.
    pub async fn execute(params: SearchPhotosParams, client: &PexelsClient) -> CallToolResult {
        let output = match Self::run(params, client).await {
            Ok(result) => match serde_json::to_value(&result) {
                Ok(data) => ToolOutput::success(data),
                Err(e) => ToolOutput::failure(format!("Failed to serialize search result: {e}")),
            },
            Err(e) => ToolOutput::failure(e.to_string()),
        };
        output.into_call_tool_result()
    }

    /// Validate, search, reduce.
    async fn run(
        params: SearchPhotosParams,
        client: &PexelsClient,
    ) -> std::result::Result<SearchResult, ToolError> {
        let request = params.into_request()?;
        info!(
            "Searching photos: query={:?} page={} per_page={}",
            request.query, request.page, request.per_page
        );

        let response = client.search(&request).await?;
        Ok(SearchResult::from(response))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchPhotosParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    ///
    /// Fails when no API key is configured: the server must refuse to start
    /// rather than defer a missing credential to call time.
    pub fn create_route<S>(config: Arc<Config>) -> Result<ToolRoute<S>>
    where
        S: Send + Sync + 'static,
    {
        let api_key = config
            .credentials
            .pexels_api_key
            .clone()
            .ok_or_else(|| Error::config("PEXELS_API_KEY environment variable is required"))?;
        let client = PexelsClient::new(api_key, config.pexels.host.clone());

        Ok(ToolRoute::new_dyn(
            Self::to_tool(),
            move |ctx: ToolCallContext<'_, S>| {
                let args = ctx.arguments.clone().unwrap_or_default();
                let client = client.clone();
                async move {
                    let params: SearchPhotosParams =
                        serde_json::from_value(serde_json::Value::Object(args))
                            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                    Ok(Self::execute(params, &client).await)
                }
                .boxed()
            },
        ))
    }
}

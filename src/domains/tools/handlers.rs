//! Tool output envelope.
//!
//! Every `search_photos` call returns the same `{success, data|error}` shape
//! regardless of outcome, so MCP clients always receive a well-formed JSON
//! payload instead of a transport-level fault. Exactly one of `data` / `error`
//! is populated and `success` tags which.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Whether the execution was successful.
    pub success: bool,

    /// The result data from the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Error message if execution failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolOutput {
    /// Create a successful tool output.
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create a failed tool output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Render the envelope as a `CallToolResult`.
    ///
    /// The envelope is pretty-printed into a single text content block; the
    /// MCP `isError` flag mirrors the `success` field.
    pub fn into_call_tool_result(self) -> CallToolResult {
        if let Some(error) = &self.error {
            warn!("Tool call failed: {}", error);
        }

        let is_error = !self.success;
        let text = serde_json::to_string_pretty(&self).unwrap_or_else(|e| {
            // Unreachable for this struct, but never let a serializer fault
            // escape the envelope boundary.
            format!("{{\n  \"success\": false,\n  \"error\": \"Failed to serialize tool output: {e}\"\n}}")
        });

        if is_error {
            CallToolResult::error(vec![Content::text(text)])
        } else {
            CallToolResult::success(vec![Content::text(text)])
        }
    }
}

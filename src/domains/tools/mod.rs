//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder
//! - `registry.rs` - Static tool catalog
//! - `handlers.rs` - The `{success, data|error}` output envelope
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::ToolOutput;
pub use registry::ToolRegistry;
pub use router::build_tool_router;

//! Pexels MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the Pexels photo search API as a single callable tool, `search_photos`.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the `search_photos` tool, its Pexels HTTP client, and the
//!     uniform `{success, data|error}` output envelope
//!
//! # Example
//!
//! ```rust,no_run
//! use pexels_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only assembles
//! them. Unknown tool names never reach a tool: the router rejects them with
//! a protocol-level error before dispatch.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;
use crate::core::error::Result;

use super::definitions::SearchPhotosTool;

/// Build the tool router with all registered tools.
///
/// Fails when a tool cannot be constructed from the configuration, e.g. a
/// missing Pexels API key.
pub fn build_tool_router<S>(config: Arc<Config>) -> Result<ToolRouter<S>>
where
    S: Send + Sync + 'static,
{
    Ok(ToolRouter::new().with_route(SearchPhotosTool::create_route(config)?))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::Config;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        let mut config = Config::default();
        config.credentials.pexels_api_key = Some("test-key".to_string());
        Arc::new(config)
    }

    #[test]
    fn build_router_registers_search_tool() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config()).unwrap();
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"search_photos"));
    }

    #[test]
    fn build_router_fails_without_api_key() {
        let config = Arc::new(Config::default());
        let result: Result<ToolRouter<TestServer>> = build_tool_router(config);
        assert!(result.is_err());
    }

    #[test]
    fn registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_config()).unwrap();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}

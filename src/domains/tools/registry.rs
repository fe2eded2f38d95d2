//! Tool Registry - the static catalog of available tools.
//!
//! This is the single source of truth for tool metadata. The catalog is pure
//! static data: it never changes across calls and listing it cannot fail.

use rmcp::model::Tool;

use super::definitions::SearchPhotosTool;

/// Tool registry - manages all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![SearchPhotosTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![SearchPhotosTool::to_tool()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_exactly_the_search_tool() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names, vec!["search_photos"]);

        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "search_photos");
        assert_eq!(
            tools[0].description.as_deref(),
            Some("Search for photos on Pexels using a query term")
        );
    }
}

//! Projects v2 tools
//!
//! Listing, detail lookup, and the add-item mutation.

pub mod add_item;
pub mod get;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all project-related tools with the registry
pub fn register_project_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListProjectsTool::new());
    registry.register(get::GetProjectTool::new());
    registry.register(add_item::AddIssueToProjectTool::new());
}

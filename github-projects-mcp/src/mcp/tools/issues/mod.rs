//! Issue tools
//!
//! Node-id resolution, the bridge between repository-scoped issue numbers
//! and the opaque identifiers the Projects v2 mutations take.

pub mod node_id;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    registry.register(node_id::GetIssueNodeIdTool::new());
}

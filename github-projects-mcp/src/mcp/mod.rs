//! Model Context Protocol (MCP) server support
//!
//! This module wires the GitHub Projects v2 tools into an MCP server: a
//! registry of uniformly-shaped tools, the request/response types they bind,
//! the text formatting for their reports, and the `ServerHandler`
//! implementation the hosting transport drives.

// Module declarations
pub mod responses;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

// Re-export commonly used items from submodules
pub use server::McpServer;
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
pub use tools::{register_issue_tools, register_project_tools};

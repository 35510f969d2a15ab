//! MCP tool implementations
//!
//! Tools are grouped by noun, one directory per tool, each with its own
//! handler and embedded description document.

pub mod issues;
pub mod projects;

pub use issues::register_issue_tools;
pub use projects::register_project_tools;

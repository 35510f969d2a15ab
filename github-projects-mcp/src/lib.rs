//! # GitHub Projects MCP
//!
//! MCP tools for GitHub Projects v2, backed by the GitHub GraphQL API.
//!
//! ## Features
//!
//! - **Project Listing**: List Projects v2 for an organization or user
//! - **Project Details**: Fetch a single project with its custom fields
//! - **Issue Resolution**: Resolve an issue number to its GraphQL node ID
//! - **Project Mutation**: Add an issue to a project as a new item
//! - **MCP Support**: Tools registered and served over the Model Context Protocol
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use github_projects_mcp::github::env_client_accessor;
//! use github_projects_mcp::mcp::McpServer;
//!
//! // Build a server whose tools talk to api.github.com using the
//! // credentials found in the environment (GITHUB_TOKEN).
//! let server = McpServer::new(env_client_accessor());
//! # let _ = server;
//! ```

#![warn(missing_docs)]

/// Shared helpers (environment variable loading)
pub mod common;

/// Environment-backed configuration
pub mod config;

/// Error types for the crate
pub mod error;

/// GitHub GraphQL client, domain records, and per-operation query schemas
pub mod github;

/// Model Context Protocol (MCP) server support
pub mod mcp;

// Re-export core types
pub use config::GitHubConfig;
pub use error::{GitHubProjectsError, Result};

/// Crate version, exposed to MCP clients during initialization
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

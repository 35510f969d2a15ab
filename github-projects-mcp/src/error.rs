//! Error types for GitHub Projects MCP

use std::io;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, GitHubProjectsError>;

/// Errors produced by the GitHub Projects MCP library
#[derive(Debug, Error)]
pub enum GitHubProjectsError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport failure talking to the GraphQL endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured GraphQL endpoint is not a valid URL
    #[error("Invalid GraphQL endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The GraphQL API answered with one or more errors
    #[error("{0}")]
    GraphQl(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl GitHubProjectsError {
    /// Build a `GraphQl` error from the messages in a GraphQL `errors` payload
    pub fn graphql<S: Into<String>>(message: S) -> Self {
        GitHubProjectsError::GraphQl(message.into())
    }

    /// Build a `Config` error
    pub fn config<S: Into<String>>(message: S) -> Self {
        GitHubProjectsError::Config(message.into())
    }
}

//! Configuration for the GitHub GraphQL connection
//!
//! All settings come from the environment. The token is the only required
//! value; endpoint and timeout have sensible defaults so the server works
//! against api.github.com out of the box.

use crate::common::env_loader::{load_env_optional, EnvLoader};
use crate::error::{GitHubProjectsError, Result};

/// Default GraphQL endpoint for github.com
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Connection settings for the GitHub GraphQL API
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Personal access token or installation token used as a bearer credential
    pub token: String,
    /// GraphQL endpoint URL (override for GitHub Enterprise)
    pub graphql_url: String,
    /// Request timeout applied to every query and mutation
    pub timeout_seconds: u64,
}

impl GitHubConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `GITHUB_TOKEN` (required), `GITHUB_GRAPHQL_URL`, and
    /// `GITHUB_TIMEOUT_SECONDS`. A missing or empty token is a configuration
    /// error: without credentials no GraphQL client can be constructed.
    pub fn from_env() -> Result<Self> {
        let token = load_env_optional("GITHUB_TOKEN").ok_or_else(|| {
            GitHubProjectsError::config(
                "GITHUB_TOKEN is not set; a token is required to reach the GitHub GraphQL API",
            )
        })?;

        let loader = EnvLoader::new("GITHUB");
        let graphql_url = loader.load_string("GRAPHQL_URL", DEFAULT_GRAPHQL_URL);
        let timeout_seconds = loader.load_parsed("TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECONDS);

        let config = Self {
            token,
            graphql_url,
            timeout_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate field values after loading
    pub fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(GitHubProjectsError::config(
                "GITHUB_TIMEOUT_SECONDS must be greater than 0",
            ));
        }
        if self.graphql_url.is_empty() {
            return Err(GitHubProjectsError::config(
                "GITHUB_GRAPHQL_URL must not be empty",
            ));
        }
        Ok(())
    }
}

//! GraphQL transport for the GitHub API
//!
//! Everything the tools know about the wire: a request envelope carrying a
//! query document plus variables, a response envelope carrying `data` and
//! `errors`, and an object-safe client trait so tests can substitute a stub
//! for the HTTP transport.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::GitHubConfig;
use crate::error::{GitHubProjectsError, Result};

/// A single GraphQL query or mutation ready to submit
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    /// The GraphQL document (query or mutation)
    pub query: String,
    /// Variables referenced by the document
    pub variables: Value,
}

impl GraphQlRequest {
    /// Build a request from a document and a serializable variables struct
    pub fn new<V: Serialize>(query: &str, variables: V) -> Result<Self> {
        Ok(Self {
            query: query.to_string(),
            variables: serde_json::to_value(variables)?,
        })
    }
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    /// The `data` payload; absent when the request failed outright
    #[serde(default)]
    pub data: Option<Value>,
    /// Errors reported by the server, if any
    #[serde(default)]
    pub errors: Vec<GraphQlErrorEntry>,
}

/// One entry of a GraphQL `errors` array
#[derive(Debug, Deserialize)]
pub struct GraphQlErrorEntry {
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
}

/// Object-safe GraphQL client.
///
/// One method covers queries and mutations alike: the document inside the
/// request decides which it is. Implementations return the `data` payload
/// on success and surface any `errors` entries as a [`GitHubProjectsError`].
#[async_trait]
pub trait GraphQlClient: Send + Sync {
    /// Execute a query or mutation and return its `data` payload
    async fn execute(&self, request: GraphQlRequest) -> Result<Value>;
}

/// Accessor producing a GraphQL client for the current tool call.
///
/// Injected into the tool context at construction time; failure here is an
/// environment problem (missing credentials, bad endpoint) and aborts the
/// call instead of producing a tool-level error.
pub type GetGraphQlClientFn =
    Arc<dyn Fn() -> Result<Arc<dyn GraphQlClient>> + Send + Sync>;

/// GraphQL client for the GitHub API over HTTPS
pub struct GitHubGraphQlClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GitHubGraphQlClient {
    /// Build a client from connection settings.
    ///
    /// Fails when the endpoint URL does not parse or the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.graphql_url)?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|e| GitHubProjectsError::config(format!("Invalid GITHUB_TOKEN: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .user_agent(concat!("github-projects-mcp/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl GraphQlClient for GitHubGraphQlClient {
    async fn execute(&self, request: GraphQlRequest) -> Result<Value> {
        tracing::debug!("Submitting GraphQL request to {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubProjectsError::graphql(format!(
                "GitHub GraphQL endpoint returned HTTP {status}"
            )));
        }

        let envelope: GraphQlResponse = response.json().await?;
        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GitHubProjectsError::graphql(message));
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_query_and_variables() {
        #[derive(Serialize)]
        struct Variables {
            login: String,
        }

        let request = GraphQlRequest::new(
            "query($login: String!) { viewer }",
            Variables {
                login: "octocat".to_string(),
            },
        )
        .unwrap();

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["query"], "query($login: String!) { viewer }");
        assert_eq!(encoded["variables"]["login"], "octocat");
    }

    #[test]
    fn test_response_envelope_decodes_errors() {
        let envelope: GraphQlResponse = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "Could not resolve to a node"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.errors.len(), 1);
        assert_eq!(envelope.errors[0].message, "Could not resolve to a node");
    }

    #[test]
    fn test_response_envelope_tolerates_missing_fields() {
        let envelope: GraphQlResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn test_client_rejects_invalid_endpoint() {
        let config = GitHubConfig {
            token: "t".to_string(),
            graphql_url: "not a url".to_string(),
            timeout_seconds: 30,
        };
        assert!(matches!(
            GitHubGraphQlClient::new(&config),
            Err(GitHubProjectsError::InvalidEndpoint(_))
        ));
    }
}

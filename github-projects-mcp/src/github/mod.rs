//! GitHub GraphQL API support
//!
//! The wire contract lives in three layers: [`client`] owns the transport
//! (request/response envelope, client trait, reqwest implementation),
//! [`queries`] owns the per-operation document and variable/data schemas,
//! and [`types`] owns the transient domain records the tools format.

pub mod client;
pub mod queries;
pub mod types;

use std::sync::Arc;

use crate::config::GitHubConfig;

pub use client::{GetGraphQlClientFn, GitHubGraphQlClient, GraphQlClient, GraphQlRequest};
pub use types::{CustomField, IssueRef, ProjectDetail, ProjectItem, ProjectSummary};

/// Client accessor backed by the process environment.
///
/// The accessor is invoked once per tool call; a missing `GITHUB_TOKEN` (or
/// an invalid endpoint) surfaces on every call as a hard error rather than
/// preventing the server from starting. Tests substitute their own accessor
/// returning a stub [`GraphQlClient`].
pub fn env_client_accessor() -> GetGraphQlClientFn {
    Arc::new(|| {
        let config = GitHubConfig::from_env()?;
        let client = GitHubGraphQlClient::new(&config)?;
        Ok(Arc::new(client) as Arc<dyn GraphQlClient>)
    })
}

/// Client accessor that always fails with the given configuration message.
///
/// Mirrors the failure mode of [`env_client_accessor`] without touching the
/// environment; used by tests exercising the hard-error path.
pub fn failing_client_accessor(message: &str) -> GetGraphQlClientFn {
    let message = message.to_string();
    Arc::new(move || Err(crate::error::GitHubProjectsError::config(message.clone())))
}

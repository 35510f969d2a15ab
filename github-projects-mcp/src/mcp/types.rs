//! Request types for MCP operations
//!
//! Each tool binds its untyped argument map into one of these records before
//! doing anything else. `deny_unknown_fields` makes stray keys a binding
//! error, so a malformed call never reaches the GraphQL layer.

use serde::Deserialize;

/// Discriminator for who owns a project list: organization or user.
///
/// Caller-supplied, never inferred. Any other value fails binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerType {
    /// Projects belong to an organization
    Organization,
    /// Projects belong to a user
    User,
}

/// Request to list Projects v2 for an owner
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListProjectsRequest {
    /// Organization or user login
    pub owner: String,
    /// Owner type: organization or user
    pub owner_type: OwnerType,
}

/// Request to get details of a specific Projects v2
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetProjectRequest {
    /// Projects v2 node id
    pub project_id: String,
}

/// Request to resolve an issue's node id
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetIssueNodeIdRequest {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Issue number
    pub issue_number: i32,
}

/// Request to add an issue to a Projects v2
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddIssueToProjectRequest {
    /// Projects v2 node id
    pub project_id: String,
    /// Issue node id
    pub issue_id: String,
}

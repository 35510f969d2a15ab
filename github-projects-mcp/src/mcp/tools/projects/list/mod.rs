//! Projects v2 listing tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::github::queries::list_projects;
use crate::mcp::responses::create_projects_list_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{ListProjectsRequest, OwnerType};

/// Tool for listing Projects v2 owned by an organization or user
#[derive(Default)]
pub struct ListProjectsTool;

impl ListProjectsTool {
    /// Creates a new instance of the ListProjectsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListProjectsTool {
    fn name(&self) -> &'static str {
        "list_projects_v2"
    }

    fn title(&self) -> &'static str {
        "List Projects v2"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "owner": {
                    "type": "string",
                    "description": "Organization or user login"
                },
                "owner_type": {
                    "type": "string",
                    "description": "Owner type: organization or user",
                    "enum": ["organization", "user"]
                }
            },
            "required": ["owner", "owner_type"]
        })
    }

    fn read_only(&self) -> bool {
        true
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListProjectsRequest = match BaseToolImpl::parse_arguments(arguments) {
            Ok(request) => request,
            Err(e) => return Ok(BaseToolImpl::create_error_response(e.to_string(), None)),
        };

        tracing::debug!("Listing Projects v2 for {}", request.owner);

        let client = context.client().map_err(|e| {
            McpError::internal_error(format!("Failed to get GitHub GraphQL client: {e}"), None)
        })?;

        let query = match list_projects::request(&request.owner) {
            Ok(query) => query,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    format!("Failed to query projects v2: {e}"),
                    None,
                ))
            }
        };

        let data = match client.execute(query).await.and_then(list_projects::parse) {
            Ok(data) => data,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    format!("Failed to query projects v2: {e}"),
                    None,
                ))
            }
        };

        // Only the branch matching the requested owner type is surfaced;
        // the other branch may be empty and that is not an error.
        let projects = match request.owner_type {
            OwnerType::Organization => data.organization,
            OwnerType::User => data.user,
        }
        .map(|owner| owner.projects_v2.nodes)
        .unwrap_or_default();

        tracing::info!("Retrieved {} Projects v2 for {}", projects.len(), request.owner);
        Ok(create_projects_list_response(&projects))
    }
}

//! Issue node-id resolution tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::github::queries::issue_node_id;
use crate::mcp::responses::create_issue_node_id_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetIssueNodeIdRequest;

/// Tool for resolving an issue number to its GraphQL node id
#[derive(Default)]
pub struct GetIssueNodeIdTool;

impl GetIssueNodeIdTool {
    /// Creates a new instance of the GetIssueNodeIdTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueNodeIdTool {
    fn name(&self) -> &'static str {
        "get_issue_node_id"
    }

    fn title(&self) -> &'static str {
        "Get issue node ID"
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
                    "description": "Repository owner"
                },
                "repo": {
                    "type": "string",
                    "description": "Repository name"
                },
                "issue_number": {
                    "type": "integer",
                    "description": "Issue number"
                }
            },
            "required": ["owner", "repo", "issue_number"]
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
        let request: GetIssueNodeIdRequest = match BaseToolImpl::parse_arguments(arguments) {
            Ok(request) => request,
            Err(e) => return Ok(BaseToolImpl::create_error_response(e.to_string(), None)),
        };

        tracing::debug!(
            "Resolving issue {}/{}#{}",
            request.owner,
            request.repo,
            request.issue_number
        );

        let client = context.client().map_err(|e| {
            McpError::internal_error(format!("Failed to get GitHub GraphQL client: {e}"), None)
        })?;

        let query =
            match issue_node_id::request(&request.owner, &request.repo, request.issue_number) {
                Ok(query) => query,
                Err(e) => {
                    return Ok(BaseToolImpl::create_error_response(
                        format!("Failed to get issue node ID: {e}"),
                        None,
                    ))
                }
            };

        let issue = match client.execute(query).await.and_then(issue_node_id::parse) {
            Ok(issue) => issue,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    format!("Failed to get issue node ID: {e}"),
                    None,
                ))
            }
        };

        Ok(create_issue_node_id_response(&issue))
    }
}

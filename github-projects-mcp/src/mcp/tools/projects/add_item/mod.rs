//! Add-issue-to-project tool for MCP operations
//!
//! The only mutating tool in the crate. No rollback exists and the call is
//! not idempotent at this layer: duplicate handling is whatever the upstream
//! mutation defines.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::github::queries::add_project_item;
use crate::mcp::responses::create_item_added_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddIssueToProjectRequest;

/// Tool for adding an issue to a Projects v2 as a new item
#[derive(Default)]
pub struct AddIssueToProjectTool;

impl AddIssueToProjectTool {
    /// Creates a new instance of the AddIssueToProjectTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddIssueToProjectTool {
    fn name(&self) -> &'static str {
        "add_issue_to_project_v2"
    }

    fn title(&self) -> &'static str {
        "Add issue to Projects v2"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_id": {
                    "type": "string",
                    "description": "Projects v2 ID"
                },
                "issue_id": {
                    "type": "string",
                    "description": "Issue ID"
                }
            },
            "required": ["project_id", "issue_id"]
        })
    }

    fn read_only(&self) -> bool {
        false
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddIssueToProjectRequest = match BaseToolImpl::parse_arguments(arguments) {
            Ok(request) => request,
            Err(e) => return Ok(BaseToolImpl::create_error_response(e.to_string(), None)),
        };

        tracing::debug!(
            "Adding issue {} to project {}",
            request.issue_id,
            request.project_id
        );

        let client = context.client().map_err(|e| {
            McpError::internal_error(format!("Failed to get GitHub GraphQL client: {e}"), None)
        })?;

        let mutation = match add_project_item::request(&request.project_id, &request.issue_id) {
            Ok(mutation) => mutation,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    format!("Failed to add issue to project v2: {e}"),
                    None,
                ))
            }
        };

        let item = match client
            .execute(mutation)
            .await
            .and_then(add_project_item::parse)
        {
            Ok(item) => item,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    format!("Failed to add issue to project v2: {e}"),
                    None,
                ))
            }
        };

        tracing::info!("Created project item {}", item.id);
        Ok(create_item_added_response(&item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::failing_client_accessor;

    #[test]
    fn test_tool_definition() {
        let tool = AddIssueToProjectTool::new();
        assert_eq!(tool.name(), "add_issue_to_project_v2");
        assert!(!tool.description().is_empty());
        assert!(!tool.read_only());
    }

    #[test]
    fn test_tool_schema_required_fields() {
        let tool = AddIssueToProjectTool::new();
        let schema = tool.schema();
        assert_eq!(
            schema["required"],
            serde_json::json!(["project_id", "issue_id"])
        );
    }

    #[tokio::test]
    async fn test_missing_parameters_yield_soft_error() {
        let tool = AddIssueToProjectTool::new();
        let context = ToolContext::new(failing_client_accessor("must not be reached"));

        let result = tool.execute(serde_json::Map::new(), &context).await.unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}

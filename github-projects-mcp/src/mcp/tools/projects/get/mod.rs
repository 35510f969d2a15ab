//! Projects v2 detail tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::github::queries::get_project;
use crate::mcp::responses::create_project_detail_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetProjectRequest;

/// Tool for fetching one Projects v2 with its custom fields
#[derive(Default)]
pub struct GetProjectTool;

impl GetProjectTool {
    /// Creates a new instance of the GetProjectTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetProjectTool {
    fn name(&self) -> &'static str {
        "get_project_v2"
    }

    fn title(&self) -> &'static str {
        "Get Projects v2 details"
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
                }
            },
            "required": ["project_id"]
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
        let request: GetProjectRequest = match BaseToolImpl::parse_arguments(arguments) {
            Ok(request) => request,
            Err(e) => return Ok(BaseToolImpl::create_error_response(e.to_string(), None)),
        };

        tracing::debug!("Fetching Projects v2 {}", request.project_id);

        let client = context.client().map_err(|e| {
            McpError::internal_error(format!("Failed to get GitHub GraphQL client: {e}"), None)
        })?;

        let query = match get_project::request(&request.project_id) {
            Ok(query) => query,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    format!("Failed to query project v2: {e}"),
                    None,
                ))
            }
        };

        // An id that resolves to no ProjectV2 decodes to zero values and is
        // rendered as an (essentially empty) report, not an error.
        let project = match client.execute(query).await.and_then(get_project::parse) {
            Ok(project) => project,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    format!("Failed to query project v2: {e}"),
                    None,
                ))
            }
        };

        Ok(create_project_detail_response(&project))
    }
}

//! MCP server implementation for serving GitHub Projects v2 tools

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use crate::github::client::GetGraphQlClientFn;

use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::{register_issue_tools, register_project_tools};

const INSTRUCTIONS: &str = "GitHub Projects v2 tools backed by the GitHub GraphQL API. \
Use list_projects_v2 and get_project_v2 to inspect project boards, \
get_issue_node_id to resolve an issue number to the node ID the mutations expect, \
and add_issue_to_project_v2 to attach an issue to a project.";

/// MCP server exposing the Projects v2 tools
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing the injected GraphQL client accessor
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a new MCP server around a GraphQL client accessor.
    ///
    /// The accessor is the only capability the tools need; substituting a
    /// stub accessor makes the whole server testable without a network.
    pub fn new(get_client: GetGraphQlClientFn) -> Self {
        let mut tool_registry = ToolRegistry::new();
        register_project_tools(&mut tool_registry);
        register_issue_tools(&mut tool_registry);

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(get_client)),
        }
    }

    /// Names of all registered tools
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_registry.list_tool_names()
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability {
                list_changed: None,
            }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            instructions: Some(INSTRUCTIONS.into()),
            server_info: Implementation {
                name: "GitHub Projects MCP".into(),
                version: crate::VERSION.into(),
            },
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if let Some(tool) = self.tool_registry.get_tool(&request.name) {
            tool.execute(request.arguments.unwrap_or_default(), &self.tool_context)
                .await
        } else {
            Err(McpError::invalid_request(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "GitHub Projects MCP".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}

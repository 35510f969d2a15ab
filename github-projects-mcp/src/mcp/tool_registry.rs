//! Tool registry for MCP operations
//!
//! A registry pattern for managing the Projects v2 tools: each tool declares
//! its name, a short title, a long description, a JSON schema for its
//! arguments, and a read-only flag; the registry turns those declarations
//! into `rmcp` tool listings and dispatches calls to the right handler.

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool, ToolAnnotations};
use rmcp::Error as McpError;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::github::client::{GetGraphQlClientFn, GraphQlClient};

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    get_client: GetGraphQlClientFn,
}

impl ToolContext {
    /// Create a new tool context around a client accessor
    pub fn new(get_client: GetGraphQlClientFn) -> Self {
        Self { get_client }
    }

    /// Acquire a GraphQL client for the current call.
    ///
    /// Invoked once per tool execution, after argument binding succeeds.
    /// An error here is an environment problem and becomes a hard failure
    /// of the call, never a tool-level error payload.
    pub fn client(&self) -> Result<Arc<dyn GraphQlClient>> {
        (self.get_client)()
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's short human-readable title
    fn title(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Whether the tool only reads state; `false` marks a mutating tool.
    /// Consumed by hosting frameworks for safety gating.
    fn read_only(&self) -> bool;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all registered tools as Tool objects for the MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: Some(ToolAnnotations {
                        title: Some(tool.title().to_string()),
                        read_only_hint: Some(tool.read_only()),
                        destructive_hint: None,
                        idempotent_hint: None,
                        open_world_hint: None,
                    }),
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct.
    ///
    /// Unknown keys and missing required fields both fail here, before any
    /// remote call is made; callers turn the error into a tool-level error
    /// response rather than a protocol failure.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_request(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response with the given text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Create an error response with the given error message
    pub fn create_error_response<T: Into<String>>(
        error: T,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent { text: error_text }),
                None,
            )],
            is_error: Some(true),
        }
    }
}

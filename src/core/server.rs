//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` implements the rmcp `ServerHandler` for the STDIO transport
//! and exposes `list_tools`/`call_tool` for the HTTP transport. Both paths
//! reach the same tool instances held by the [`ToolRegistry`].

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// Instructions reported to clients on initialization.
pub const INSTRUCTIONS: &str = "Audit assist server. Use check_keyterm_classification to see \
     whether classified keyterm values for an order were changed by an admin, and \
     get_keyterm_definition_and_regex to fetch a keyterm's definition and extraction regex.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool instances, shared with the router.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the remote API configuration is unusable.
    pub fn new(config: Config) -> CoreResult<Self> {
        let config = Arc::new(config);
        let registry = Arc::new(ToolRegistry::new(&config.keyterm_api)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(&registry),
            registry,
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> CoreResult<serde_json::Value> {
        info!("Calling tool: {}", name);
        Ok(self.registry.call_tool(name, arguments).await?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

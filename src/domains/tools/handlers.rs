//! Common contract for tool handlers.
//!
//! A handler declares its name, description and typed parameters, and turns
//! parsed parameters into a `CallToolResult`. The helpers below derive the
//! rmcp metadata, the STDIO route and the HTTP dispatch from that contract so
//! individual tools only implement `execute`.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::ToolError;

/// Trait implemented by every tool exposed by the server.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments, also the source of the input schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool. Remote failures are reported inside the result.
    async fn execute(&self, params: Self::Params) -> CallToolResult;
}

/// Deserialize raw JSON arguments into the handler's parameter type.
pub fn parse_params<H: ToolHandler>(arguments: serde_json::Value) -> Result<H::Params, ToolError> {
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", H::NAME, e)))
}

/// Create a Tool model for `H` (metadata).
pub fn tool_model<H: ToolHandler>() -> Tool {
    Tool {
        name: H::NAME.into(),
        description: Some(H::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<H::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for STDIO transport backed by `handler`.
pub fn tool_route<S, H>(handler: Arc<H>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    H: ToolHandler,
{
    ToolRoute::new_dyn(tool_model::<H>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let handler = handler.clone();
        async move { call_routed(handler.as_ref(), args).await }.boxed()
    })
}

/// Body of a routed call: bad arguments become an MCP `invalid_params`
/// error, anything else runs the handler.
pub async fn call_routed<H: ToolHandler>(
    handler: &H,
    arguments: JsonObject,
) -> Result<CallToolResult, McpError> {
    let params = parse_params::<H>(serde_json::Value::Object(arguments))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

    Ok(handler.execute(params).await)
}

/// Run `handler` on raw JSON arguments and serialize the result (HTTP transport).
pub async fn call_json<H: ToolHandler>(
    handler: &H,
    arguments: serde_json::Value,
) -> Result<serde_json::Value, ToolError> {
    let params = parse_params::<H>(arguments)?;
    let result = handler.execute(params).await;
    Ok(envelope_to_json(&result))
}

/// Wire shape of a tool result: `{"content": [...], "isError": bool}`.
pub fn envelope_to_json(result: &CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the STDIO transport. Routes wrap the registry's tool instances,
//! so both transports run the same handlers.

use rmcp::handler::server::tool::ToolRouter;

use super::handlers::tool_route;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(tool_route(registry.classification()))
        .with_route(tool_route(registry.details()))
}

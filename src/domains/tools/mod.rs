//! Tools domain module.
//!
//! Tools are the executable functions MCP clients call. Here each one is a
//! passthrough to the keyterm audit assist API.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ToolHandler` contract and its rmcp/HTTP adapters
//! - `registry.rs` - Builds the tools at startup and dispatches HTTP calls
//! - `router.rs` - rmcp `ToolRouter` for the STDIO transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolHandler`
//! 2. Export it in `definitions/mod.rs`
//! 3. Construct it in `ToolRegistry::new` and add it to `call_tool`
//! 4. Add its route in `router.rs`

pub mod definitions;
mod error;
pub mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::ToolHandler;
pub use registry::ToolRegistry;
pub use router::build_tool_router;

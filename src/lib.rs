//! Keyterm Audit Assist MCP Server
//!
//! Exposes two MCP tools backed by the keyterm audit assist HTTP API:
//!
//! - `check_keyterm_classification`: classification values for an order
//! - `get_keyterm_definition_and_regex`: a keyterm's definition and regex
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains::tools**: the tools, their shared HTTP client and result envelope
//!
//! # Example
//!
//! ```rust,no_run
//! use keyterm_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

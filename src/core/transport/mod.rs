//! Transport layer for the MCP server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: JSON-RPC over POST requests (default) - feature: `http`
//! - **STDIO**: Standard input/output via rmcp - feature: `stdio`
//!
//! Each transport owns the connection lifecycle and hands tool calls to
//! the MCP server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;

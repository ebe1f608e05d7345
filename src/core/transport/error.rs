//! Transport error types.
//!
//! Only startup and connection-level failures land here. Tool failures,
//! including remote API errors, travel inside JSON-RPC responses.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that stop a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP listener could not bind its address.
    #[error("cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("HTTP server failed: {0}")]
    Serve(#[from] std::io::Error),

    /// The MCP handshake over STDIO did not complete.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    /// The STDIO session ended abnormally.
    #[error("MCP session ended with error: {0}")]
    Session(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn handshake(msg: impl Into<String>) -> Self {
        Self::Handshake(msg.into())
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }
}

//! Tool Registry - builds every tool once and dispatches calls by name.
//!
//! The name → tool mapping is a fixed `match` over each tool's `NAME`
//! constant. The same tool instances back the rmcp router, so HTTP and
//! STDIO calls share one HTTP client pool.

use std::sync::Arc;

use rmcp::model::Tool;
use tracing::{info, warn};

use crate::core::config::KeytermApiConfig;
use crate::core::{Error, Result};

use super::ToolError;
use super::definitions::keyterm::KeytermApiClient;
use super::definitions::{CheckClassificationTool, KeytermDetailsTool};
use super::handlers::{ToolHandler, call_json, tool_model};

/// Tool registry - owns all available tools.
pub struct ToolRegistry {
    classification: Arc<CheckClassificationTool>,
    details: Arc<KeytermDetailsTool>,
}

impl ToolRegistry {
    /// Build all tools against the configured endpoints.
    ///
    /// Fails if an endpoint is not a valid URL or the HTTP client cannot
    /// be constructed.
    pub fn new(config: &KeytermApiConfig) -> Result<Self> {
        validate_endpoint(&config.classification_url)?;
        validate_endpoint(&config.details_url)?;

        let client = KeytermApiClient::from_config(config)?;
        info!(
            "Keyterm endpoints: classification={} details={}",
            config.classification_url, config.details_url
        );

        Ok(Self {
            classification: Arc::new(CheckClassificationTool::new(
                client.clone(),
                &config.classification_url,
            )),
            details: Arc::new(KeytermDetailsTool::new(client, &config.details_url)),
        })
    }

    /// The classification lookup tool.
    pub fn classification(&self) -> Arc<CheckClassificationTool> {
        self.classification.clone()
    }

    /// The keyterm details lookup tool.
    pub fn details(&self) -> Arc<KeytermDetailsTool> {
        self.details.clone()
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![CheckClassificationTool::NAME, KeytermDetailsTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            tool_model::<CheckClassificationTool>(),
            tool_model::<KeytermDetailsTool>(),
        ]
    }

    /// Dispatch a tool call by name and return the serialized result.
    ///
    /// Used by the HTTP transport.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, ToolError> {
        match name {
            CheckClassificationTool::NAME => call_json(self.classification.as_ref(), arguments).await,
            KeytermDetailsTool::NAME => call_json(self.details.as_ref(), arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

fn validate_endpoint(url: &str) -> Result<()> {
    reqwest::Url::parse(url)
        .map(|_| ())
        .map_err(|e| Error::config(format!("invalid endpoint URL {:?}: {}", url, e)))
}

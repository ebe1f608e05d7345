//! Keyterm classification lookup tool.
//!
//! Returns the classification values the audit assist API holds for an
//! order, so an agent can tell whether an admin has edited them.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::client::{KeytermApiClient, RedirectPolicy};
use super::envelope::build_envelope;
use crate::domains::tools::handlers::ToolHandler;

/// Parameters for the classification lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ClassificationParams {
    /// Order whose keyterm classifications are checked.
    #[schemars(description = "Order number to look up")]
    pub order_number: i64,

    /// Restricts the lookup to one keyterm.
    #[schemars(description = "Optional keyterm code to restrict the lookup")]
    #[serde(default)]
    pub keyterm_code: Option<String>,
}

/// Query string sent to the classification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationQuery {
    pub order_number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyterm_code: Option<String>,
}

impl From<ClassificationParams> for ClassificationQuery {
    fn from(params: ClassificationParams) -> Self {
        Self {
            order_number: params.order_number,
            keyterm_code: params.keyterm_code.filter(|code| !code.is_empty()),
        }
    }
}

/// Keyterm classification tool implementation.
#[derive(Debug, Clone)]
pub struct CheckClassificationTool {
    client: KeytermApiClient,
    base_url: String,
}

impl CheckClassificationTool {
    pub fn new(client: KeytermApiClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Render a successful response as pretty-printed JSON.
    pub fn format_success(body: &Value) -> String {
        let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
        format!("Classification Data Retrieved:\n{}", pretty)
    }
}

#[async_trait::async_trait]
impl ToolHandler for CheckClassificationTool {
    const NAME: &'static str = "check_keyterm_classification";

    const DESCRIPTION: &'static str = "Check system classified values to verify if an admin has changed them. Returns keyterm classification data including User Value and System Edit.";

    type Params = ClassificationParams;

    #[instrument(skip(self))]
    async fn execute(&self, params: ClassificationParams) -> CallToolResult {
        info!("Checking classification for order {}", params.order_number);

        let query = ClassificationQuery::from(params);
        let outcome = self
            .client
            .fetch(&self.base_url, query, RedirectPolicy::Follow)
            .await;

        build_envelope(outcome, |body| Self::format_success(&body))
    }
}

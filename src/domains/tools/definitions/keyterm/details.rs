//! Keyterm definition and regex lookup tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::client::{KeytermApiClient, RedirectPolicy};
use super::envelope::build_envelope;
use crate::domains::tools::handlers::ToolHandler;

/// Placeholder rendered for fields the API did not return.
pub const MISSING_FIELD: &str = "N/A";

/// Parameters for the keyterm details lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct KeytermDetailsParams {
    /// Human-readable keyterm name.
    #[schemars(description = "The name of the keyterm (e.g., 'Recovery Time Objective')")]
    pub keyterm: String,
}

/// Query string sent to the details endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeytermQuery<'a> {
    pub keyterm: &'a str,
}

/// The parts of a details response the tool renders.
///
/// `description` and `regex` are optional in the API payload; absent or
/// `null` values become [`MISSING_FIELD`], other non-string values keep their
/// JSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct KeytermDetails {
    pub description: String,
    pub regex: String,
    pub raw: Value,
}

impl KeytermDetails {
    pub fn from_body(body: Value) -> Self {
        Self {
            description: field_text(&body, "description"),
            regex: field_text(&body, "regex"),
            raw: body,
        }
    }

    /// Header, description, regex, then the full payload.
    pub fn render(&self, keyterm: &str) -> String {
        format!(
            "Keyterm Details for '{}':\n\nDescription: {}\n\nRegex: {}\n\nFull Data: {}",
            keyterm, self.description, self.regex, self.raw
        )
    }
}

fn field_text(body: &Value, key: &str) -> String {
    match body.get(key) {
        None | Some(Value::Null) => MISSING_FIELD.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Keyterm details tool implementation.
#[derive(Debug, Clone)]
pub struct KeytermDetailsTool {
    client: KeytermApiClient,
    base_url: String,
}

impl KeytermDetailsTool {
    pub fn new(client: KeytermApiClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for KeytermDetailsTool {
    const NAME: &'static str = "get_keyterm_definition_and_regex";

    const DESCRIPTION: &'static str = "Get keyterm information, calculation logic, and regex used for extraction based on section headers and paragraph text.";

    type Params = KeytermDetailsParams;

    #[instrument(skip(self))]
    async fn execute(&self, params: KeytermDetailsParams) -> CallToolResult {
        info!("Fetching details for keyterm '{}'", params.keyterm);

        let query = KeytermQuery {
            keyterm: &params.keyterm,
        };
        // The details endpoint must not be redirected.
        let outcome = self
            .client
            .fetch(&self.base_url, query, RedirectPolicy::Manual)
            .await;

        build_envelope(outcome, |body| {
            KeytermDetails::from_body(body).render(&params.keyterm)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockApi, envelope_text};
    use serde_json::json;
    use std::time::Duration;

    fn tool(api: &MockApi, path: &str) -> KeytermDetailsTool {
        KeytermDetailsTool::new(
            KeytermApiClient::new(Duration::from_millis(500)).unwrap(),
            api.url(path),
        )
    }

    fn params(keyterm: &str) -> KeytermDetailsParams {
        KeytermDetailsParams {
            keyterm: keyterm.to_string(),
        }
    }

    #[test]
    fn test_query_encoding() {
        let query = KeytermQuery {
            keyterm: "Recovery Time Objective",
        };
        assert_eq!(
            serde_urlencoded::to_string(&query).unwrap(),
            "keyterm=Recovery+Time+Objective"
        );
    }

    #[test]
    fn test_details_missing_fields() {
        let details = KeytermDetails::from_body(json!({"keyterm": "SLA"}));
        assert_eq!(details.description, "N/A");
        assert_eq!(details.regex, "N/A");

        let details = KeytermDetails::from_body(json!({"description": null, "regex": "\\d+"}));
        assert_eq!(details.description, "N/A");
        assert_eq!(details.regex, "\\d+");
    }

    #[test]
    fn test_details_non_object_body() {
        let details = KeytermDetails::from_body(json!(["not", "an", "object"]));
        assert_eq!(details.description, "N/A");
        assert_eq!(details.regex, "N/A");
    }

    #[test]
    fn test_details_non_string_field_keeps_json() {
        let details = KeytermDetails::from_body(json!({"description": {"must": ["hours"]}}));
        assert_eq!(details.description, "{\"must\":[\"hours\"]}");
    }

    #[test]
    fn test_render_order() {
        let details = KeytermDetails::from_body(json!({"description": "D", "regex": "R"}));
        let text = details.render("Term");

        let header = text.find("Keyterm Details for 'Term'").unwrap();
        let description = text.find("Description: D").unwrap();
        let regex = text.find("Regex: R").unwrap();
        let full = text.find("Full Data: {").unwrap();
        assert!(header < description && description < regex && regex < full);
    }

    #[tokio::test]
    async fn test_execute_success() {
        let api = MockApi::start().await;
        let result = tool(&api, "/keyterm")
            .execute(params("Recovery Time Objective"))
            .await;

        assert_eq!(result.is_error, Some(false));
        let text = envelope_text(&result);
        assert!(text.starts_with("✅ Keyterm Details for 'Recovery Time Objective':"));
        assert!(text.contains("Description: Maximum tolerable length of time"));
        assert!(text.contains("Regex: \\d+\n"));
        assert!(text.contains("Full Data: {"));
    }

    #[tokio::test]
    async fn test_execute_missing_fields_is_not_an_error() {
        let api = MockApi::start().await;
        let result = tool(&api, "/keyterm").execute(params("Uptime")).await;

        assert_eq!(result.is_error, Some(false));
        let text = envelope_text(&result);
        assert!(text.contains("Description: N/A"));
        assert!(text.contains("Regex: N/A"));
    }

    #[tokio::test]
    async fn test_execute_not_found() {
        let api = MockApi::start().await;
        let result = tool(&api, "/keyterm").execute(params("Unknown")).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(envelope_text(&result), "❌ API Error: 404 - keyterm not found");
    }

    #[tokio::test]
    async fn test_execute_does_not_follow_redirect() {
        let api = MockApi::start().await;
        let result = tool(&api, "/keyterm/moved")
            .execute(params("Recovery Time Objective"))
            .await;

        assert_eq!(result.is_error, Some(true));
        assert!(envelope_text(&result).contains("API Error: 302"));
    }
}

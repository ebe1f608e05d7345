//! Turns a remote outcome into the tool result returned to the client.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use super::client::RemoteOutcome;

const SUCCESS_MARKER: &str = "✅";
const FAILURE_MARKER: &str = "❌";

/// Build the single-text-block result for `outcome`.
///
/// `format` only runs on success. The result is flagged as an error exactly
/// when the outcome is a failure.
pub fn build_envelope<F>(outcome: RemoteOutcome, format: F) -> CallToolResult
where
    F: FnOnce(Value) -> String,
{
    match outcome {
        Ok(body) => CallToolResult::success(vec![Content::text(format!(
            "{} {}",
            SUCCESS_MARKER,
            format(body)
        ))]),
        Err(err) => {
            warn!("Tool call failed: {}", err);
            CallToolResult::error(vec![Content::text(format!("{} {}", FAILURE_MARKER, err))])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::keyterm::RemoteError;
    use crate::testing::envelope_text;
    use serde_json::json;

    #[test]
    fn test_success_uses_formatter() {
        let result = build_envelope(Ok(json!({"a": 1})), |body| format!("got {}", body["a"]));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
        assert_eq!(envelope_text(&result), "✅ got 1");
    }

    #[test]
    fn test_http_error_envelope() {
        let outcome = Err(RemoteError::Http {
            status: 404,
            body: "{\"detail\":\"Order not found\"}".to_string(),
        });
        let result = build_envelope(outcome, |_| unreachable!("formatter must not run"));

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            envelope_text(&result),
            "❌ API Error: 404 - {\"detail\":\"Order not found\"}"
        );
    }

    #[test]
    fn test_transport_error_envelope() {
        let outcome = Err(RemoteError::Transport {
            message: "request timed out".to_string(),
        });
        let result = build_envelope(outcome, |_| unreachable!("formatter must not run"));

        assert_eq!(result.is_error, Some(true));
        assert_eq!(envelope_text(&result), "❌ Connection Error: request timed out");
    }
}

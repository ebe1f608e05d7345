//! Outbound client for the keyterm audit assist API.
//!
//! Every tool call maps to exactly one GET. Failures are classified where the
//! request resolves and are never retried.

use std::time::Duration;

use reqwest::{Client, redirect::Policy};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::core::config::KeytermApiConfig;

/// Outcome of a single remote call: the parsed JSON body or a classified failure.
pub type RemoteOutcome = Result<Value, RemoteError>;

/// Classified failure of a remote call.
///
/// The `Display` output is the text shown to the calling agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The API answered with a non-2xx status.
    #[error("API Error: {status} - {body}")]
    Http { status: u16, body: String },

    /// The request did not complete or the body was not JSON.
    #[error("Connection Error: {message}")]
    Transport { message: String },
}

impl RemoteError {
    fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::transport(format!("request timed out ({err})"))
        } else if err.is_connect() {
            Self::transport(format!("connection failed ({err})"))
        } else {
            Self::transport(err.to_string())
        }
    }
}

/// Whether 3xx responses are followed or surfaced as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Follow redirects transparently.
    Follow,
    /// Return the 3xx response to the caller.
    Manual,
}

/// Client for the keyterm API.
///
/// Holds one pooled `reqwest::Client` per redirect policy, since reqwest
/// fixes the policy at build time. Cloning is cheap and clones share pools.
#[derive(Debug, Clone)]
pub struct KeytermApiClient {
    following: Client,
    manual: Client,
}

impl KeytermApiClient {
    /// Build a client whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            following: Self::build(timeout, Policy::default())?,
            manual: Self::build(timeout, Policy::none())?,
        })
    }

    /// Build a client from the remote API configuration.
    pub fn from_config(config: &KeytermApiConfig) -> Result<Self, reqwest::Error> {
        Self::new(Duration::from_secs(config.timeout_secs))
    }

    fn build(timeout: Duration, policy: Policy) -> Result<Client, reqwest::Error> {
        Client::builder()
            .timeout(timeout)
            .redirect(policy)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
    }

    /// Issue one GET against `base_url` with `query` encoded as the query string.
    ///
    /// A 2xx response with a JSON body is a success. Any other received
    /// status becomes [`RemoteError::Http`] with the raw body. Everything
    /// else, including a 2xx body that is not JSON, is [`RemoteError::Transport`].
    #[instrument(skip_all, fields(url = %base_url, redirects = ?redirects))]
    pub async fn fetch<Q>(&self, base_url: &str, query: Q, redirects: RedirectPolicy) -> RemoteOutcome
    where
        Q: Serialize + Send,
    {
        if let Ok(encoded) = serde_urlencoded::to_string(&query) {
            debug!("GET {}?{}", base_url, encoded);
        }

        let client = match redirects {
            RedirectPolicy::Follow => &self.following,
            RedirectPolicy::Manual => &self.manual,
        };

        let response = client
            .get(base_url)
            .query(&query)
            .send()
            .await
            .map_err(RemoteError::from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(RemoteError::from_reqwest)?;

        if !status.is_success() {
            warn!("Keyterm API returned {}", status);
            return Err(RemoteError::Http {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Keyterm API response received: {} bytes", body.len());

        serde_json::from_str(&body)
            .map_err(|e| RemoteError::transport(format!("invalid JSON in response body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;
    use serde_json::json;

    #[derive(Serialize)]
    struct OrderQuery {
        order_number: i64,
    }

    fn client() -> KeytermApiClient {
        KeytermApiClient::new(Duration::from_millis(500)).unwrap()
    }

    #[test]
    fn test_error_display() {
        let http = RemoteError::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(http.to_string(), "API Error: 404 - not found");

        let transport = RemoteError::transport("dns failure");
        assert_eq!(transport.to_string(), "Connection Error: dns failure");
    }

    #[tokio::test]
    async fn test_fetch_success_parses_json() {
        let api = MockApi::start().await;
        let body = client()
            .fetch(
                &api.url("/keyterms"),
                OrderQuery { order_number: 42 },
                RedirectPolicy::Follow,
            )
            .await
            .unwrap();

        assert_eq!(body["body"]["User Value"], json!("X"));
        assert_eq!(body["query"]["order_number"], json!("42"));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_keeps_body() {
        let api = MockApi::start().await;
        let err = client()
            .fetch(&api.url("/broken"), OrderQuery { order_number: 1 }, RedirectPolicy::Follow)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RemoteError::Http {
                status: 500,
                body: "internal failure".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_follows_redirect_when_asked() {
        let api = MockApi::start().await;
        let body = client()
            .fetch(
                &api.url("/keyterms/moved"),
                OrderQuery { order_number: 7 },
                RedirectPolicy::Follow,
            )
            .await
            .unwrap();

        assert_eq!(body["query"]["order_number"], json!("7"));
    }

    #[tokio::test]
    async fn test_fetch_surfaces_redirect_when_manual() {
        let api = MockApi::start().await;
        let err = client()
            .fetch(
                &api.url("/keyterms/moved"),
                OrderQuery { order_number: 7 },
                RedirectPolicy::Manual,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RemoteError::Http { status: 302, .. }));
    }

    #[tokio::test]
    async fn test_fetch_non_json_body_is_transport_error() {
        let api = MockApi::start().await;
        let err = client()
            .fetch(&api.url("/not-json"), OrderQuery { order_number: 1 }, RedirectPolicy::Follow)
            .await
            .unwrap_err();

        match err {
            RemoteError::Transport { message } => assert!(message.contains("invalid JSON")),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_transport_error() {
        let api = MockApi::start().await;
        let client = KeytermApiClient::new(Duration::from_millis(100)).unwrap();
        let err = client
            .fetch(&api.url("/slow"), OrderQuery { order_number: 1 }, RedirectPolicy::Follow)
            .await
            .unwrap_err();

        match err {
            RemoteError::Transport { message } => assert!(message.contains("timed out")),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        // Nothing listens on port 1 of the loopback interface.
        let err = client()
            .fetch(
                "http://127.0.0.1:1/keyterms",
                OrderQuery { order_number: 1 },
                RedirectPolicy::Follow,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RemoteError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_cancelled_fetch_leaves_client_usable() {
        let api = MockApi::start().await;
        let client = client();

        let slow = {
            let client = client.clone();
            let url = api.url("/slow");
            tokio::spawn(async move {
                client
                    .fetch(&url, OrderQuery { order_number: 1 }, RedirectPolicy::Follow)
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        slow.abort();
        assert!(slow.await.unwrap_err().is_cancelled());

        let body = client
            .fetch(
                &api.url("/keyterms"),
                OrderQuery { order_number: 2 },
                RedirectPolicy::Follow,
            )
            .await
            .unwrap();
        assert_eq!(body["query"]["order_number"], json!("2"));
    }
}

//! Test support: an in-process stand-in for the keyterm audit assist API.
//!
//! Routes:
//! - `GET /keyterms` echoes the query next to a fixed classification body
//! - `GET /keyterm` knows "Recovery Time Objective", 404s on "Unknown" and
//!   returns a body without `description`/`regex` for anything else
//! - `GET /keyterms/moved`, `GET /keyterm/moved` answer 302 to the routes above
//! - `GET /broken` answers 500, `GET /not-json` answers 200 with HTML,
//!   `GET /slow` answers after three seconds

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, RawQuery},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::json;
use tokio::task::JoinHandle;

use crate::core::config::KeytermApiConfig;

/// Mock API server bound to an ephemeral loopback port.
///
/// The server task is aborted on drop.
pub(crate) struct MockApi {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockApi {
    pub(crate) async fn start() -> Self {
        let app = Router::new()
            .route("/keyterms", get(classification))
            .route(
                "/keyterms/moved",
                get(|RawQuery(query): RawQuery| async move { redirect_to("/keyterms", query) }),
            )
            .route("/keyterm", get(details))
            .route(
                "/keyterm/moved",
                get(|RawQuery(query): RawQuery| async move { redirect_to("/keyterm", query) }),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal failure") }),
            )
            .route(
                "/not-json",
                get(|| async { (StatusCode::OK, "<html>maintenance</html>") }),
            )
            .route("/slow", get(slow));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, handle }
    }

    /// Absolute URL for `path` on this server.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Remote API config pointing both tools at this server.
    pub(crate) fn config(&self) -> KeytermApiConfig {
        KeytermApiConfig {
            classification_url: self.url("/keyterms"),
            details_url: self.url("/keyterm"),
            timeout_secs: 2,
        }
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Text of the single content block of a tool result.
pub(crate) fn envelope_text(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}

async fn classification(Query(query): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": 200,
        "body": {"User Value": "X", "System Edit": "Y"},
        "query": query,
    }))
}

async fn details(Query(query): Query<HashMap<String, String>>) -> Response {
    match query.get("keyterm").map(String::as_str) {
        Some("Recovery Time Objective") => Json(json!({
            "keyterm": "Recovery Time Objective",
            "description": "Maximum tolerable length of time a system can be down",
            "regex": "\\d+",
        }))
        .into_response(),
        Some("Unknown") => (StatusCode::NOT_FOUND, "keyterm not found").into_response(),
        Some(other) => Json(json!({ "keyterm": other })).into_response(),
        None => (StatusCode::BAD_REQUEST, "missing keyterm").into_response(),
    }
}

async fn slow() -> Json<serde_json::Value> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({ "late": true }))
}

fn redirect_to(path: &str, query: Option<String>) -> Response {
    let location = match query {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };
    (StatusCode::FOUND, [(header::LOCATION, location)], "moved").into_response()
}

//! Canned-response HTTP server for exercising outbound transports.
//!
//! # Design
//! Every route accepts POST only. `/a` and `/b` return fixed, distinguishable
//! replies so concurrent callers can check they got their own response.
//! `/echo` reflects the received headers and body back as JSON. The headers
//! come from axum's `HeaderMap`, so values are grouped by name: order within
//! a name matches the wire, order across names does not. `/status/{code}`
//! replies with an arbitrary status and `/redirect` answers 302 to `/a`.

use axum::{
    body::Bytes,
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Body of the `/echo` reply.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Echo {
    /// All values received for `name`, in the order they arrived.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/a", post(reply_a))
        .route("/b", post(reply_b))
        .route("/echo", post(echo))
        .route("/status/{code}", post(reply_status))
        .route("/redirect", post(redirect))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::debug!(%addr, "mock server accepting connections");
    }
    axum::serve(listener, app()).await
}

async fn reply_a() -> (StatusCode, &'static str) {
    (StatusCode::OK, "A")
}

async fn reply_b() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "B")
}

async fn redirect() -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    (StatusCode::FOUND, [(header::LOCATION, "/a")], "")
}

async fn echo(headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(Echo {
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn reply_status(Path(code): Path<u16>) -> (StatusCode, String) {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, format!("status {code}")),
        Err(_) => (StatusCode::BAD_REQUEST, format!("invalid status {code}")),
    }
}

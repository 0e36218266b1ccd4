//! Transports backed by `ureq`.
//!
//! # Design
//! Both clients share one request path (`execute`). They differ only in who
//! owns the connection pool:
//!
//! - `UreqClient` builds its agent up front and needs no startup, so it is
//!   the SDK default.
//! - `PooledUreqClient` leaves its pool slot empty until the supervisor
//!   starts the `ChildSpec` it hands out, and empties it again on stop.
//!
//! Status codes are never treated as errors: a 404 or 503 is a response.
//! Only transport problems (DNS, refused connection, timeout, oversize body)
//! end up in the failure branch. Redirects are not followed, so a 3xx comes
//! back as the answer to the caller's own POST.
//!
//! ureq keeps headers in an `http::HeaderMap`, which groups values by name.
//! Values sharing a name go out in the order given; the relative order of
//! different names is not kept, which HTTP/1.1 allows.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;
use uuid::Uuid;

use crate::child_spec::{ChildHandle, ChildSpec};
use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{Headers, HttpResponse, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum UreqError {
    #[error(transparent)]
    Request(#[from] ureq::Error),

    /// The pooled client was used before its child was started, or after it
    /// was stopped.
    #[error("connection pool is not started")]
    NotStarted,

    #[error("connection pool lock poisoned")]
    PoolPoisoned,
}

impl From<UreqError> for TransportError {
    fn from(err: UreqError) -> Self {
        Self::new(err)
    }
}

fn build_agent(config: &ClientConfig) -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .max_redirects(0)
        .timeout_global(config.timeout())
        .max_idle_connections_per_host(config.max_idle_connections_per_host)
        .build()
        .new_agent()
}

fn execute(
    agent: &ureq::Agent,
    max_response_bytes: u64,
    url: &str,
    headers: &[(String, String)],
    body: &[u8],
) -> Result<HttpResponse, TransportError> {
    debug!(url, headers = headers.len(), body_len = body.len(), "POST");

    let mut request = agent.post(url);
    for (name, value) in headers {
        request = request.header(name, value);
    }
    let mut response = request.send(body).map_err(UreqError::from)?;

    let status = StatusCode::new(response.status().as_u16())?;
    let headers: Headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .with_config()
        .limit(max_response_bytes)
        .read_to_vec()
        .map_err(UreqError::from)?;

    debug!(url, %status, body_len = body.len(), "response");
    Ok(HttpResponse { status, headers, body })
}

/// Default transport. Its agent lives as long as the client and needs no
/// supervised startup.
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
    max_response_bytes: u64,
}

impl UreqClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            agent: build_agent(config),
            max_response_bytes: config.max_response_bytes,
        }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl fmt::Debug for UreqClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqClient")
            .field("max_response_bytes", &self.max_response_bytes)
            .finish_non_exhaustive()
    }
}

impl HttpClient for UreqClient {
    fn post(&self, url: &str, headers: &[(String, String)], body: &[u8]) -> Result<HttpResponse, TransportError> {
        execute(&self.agent, self.max_response_bytes, url, headers, body)
    }
}

/// Transport whose connection pool is started and stopped by a supervisor.
#[derive(Clone)]
pub struct PooledUreqClient {
    id: String,
    config: ClientConfig,
    pool: Arc<RwLock<Option<ureq::Agent>>>,
}

impl PooledUreqClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            id: format!("ureq-pool-{}", Uuid::new_v4()),
            config,
            pool: Arc::new(RwLock::new(None)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_started(&self) -> bool {
        self.pool.read().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl fmt::Debug for PooledUreqClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledUreqClient")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("started", &self.is_started())
            .finish()
    }
}

impl HttpClient for PooledUreqClient {
    fn post(&self, url: &str, headers: &[(String, String)], body: &[u8]) -> Result<HttpResponse, TransportError> {
        let agent = self
            .pool
            .read()
            .map_err(|_| UreqError::PoolPoisoned)?
            .clone()
            .ok_or(UreqError::NotStarted)?;
        execute(&agent, self.config.max_response_bytes, url, headers, body)
    }

    fn child_spec(&self) -> Option<ChildSpec> {
        let id = self.id.clone();
        let config = self.config.clone();
        let pool = Arc::clone(&self.pool);
        Some(ChildSpec::new(self.id.clone(), move || {
            *pool.write().map_err(|_| UreqError::PoolPoisoned)? = Some(build_agent(&config));
            let pool = Arc::clone(&pool);
            Ok(ChildHandle::new(id.clone(), move || {
                pool.write().unwrap_or_else(PoisonError::into_inner).take();
            }))
        }))
    }
}

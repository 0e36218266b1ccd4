//! In-memory transport with canned replies, for testing SDK code without a
//! network.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::client::HttpClient;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StubError {
    #[error("no stubbed reply for {0}")]
    NoRoute(String),

    #[error("{0}")]
    Scripted(String),
}

#[derive(Debug, Clone)]
enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

/// Replies by exact URL and records every request it receives.
#[derive(Debug, Default)]
pub struct StubClient {
    routes: HashMap<String, Reply>,
    received: Mutex<Vec<HttpRequest>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: impl Into<String>, response: HttpResponse) -> Self {
        self.routes.insert(url.into(), Reply::Respond(response));
        self
    }

    /// Make `url` fail with `message`, as a connection error would.
    pub fn fail(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.routes.insert(url.into(), Reply::Fail(message.into()));
        self
    }

    /// Requests seen so far, oldest first.
    pub fn received(&self) -> Vec<HttpRequest> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl HttpClient for StubClient {
    fn post(&self, url: &str, headers: &[(String, String)], body: &[u8]) -> Result<HttpResponse, TransportError> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(HttpRequest {
                url: url.to_string(),
                headers: headers.to_vec(),
                body: body.to_vec(),
            });

        match self.routes.get(url) {
            Some(Reply::Respond(response)) => Ok(response.clone()),
            Some(Reply::Fail(message)) => Err(TransportError::new(StubError::Scripted(message.clone()))),
            None => Err(TransportError::new(StubError::NoRoute(url.to_string()))),
        }
    }
}

//! The SDK's handle on whichever `HttpClient` was configured.
//!
//! # Design
//! The transport is chosen once, when the SDK is set up, and the resulting
//! `Transport` is passed (or cloned) into every entry point that makes
//! outbound calls. There is no global to swap at runtime. Without an explicit
//! choice, `Transport::default()` uses `UreqClient`.
//!
//! `startup_spec` is the capability query for supervised startup: when the
//! client offers no `ChildSpec`, the SDK starts nothing for it.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::child_spec::ChildSpec;
use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::ureq_client::UreqClient;

#[derive(Clone)]
pub struct Transport {
    client: Arc<dyn HttpClient>,
}

impl Transport {
    pub fn new<C: HttpClient + 'static>(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn from_shared(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// The default transport built from `config`.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(UreqClient::new(config))
    }

    pub fn client(&self) -> &dyn HttpClient {
        self.client.as_ref()
    }

    pub fn startup_spec(&self) -> Option<ChildSpec> {
        let spec = self.client.child_spec();
        match &spec {
            Some(spec) => debug!(id = spec.id(), "transport requires supervised startup"),
            None => debug!("transport manages its own resources"),
        }
        spec
    }

    /// Send `request` through the configured client. The outcome is returned
    /// unchanged.
    pub fn post(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = self.client.post(&request.url, &request.headers, &request.body);
        match &result {
            Ok(response) => debug!(url = %request.url, status = %response.status, "outbound call completed"),
            Err(error) => warn!(url = %request.url, %error, "outbound call failed"),
        }
        result
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(UreqClient::default())
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("supervised", &self.client.child_spec().is_some())
            .finish()
    }
}

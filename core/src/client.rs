//! The contract every outbound HTTP transport implements.
//!
//! # Design
//! `HttpClient` has one required operation, `post`, and one optional
//! capability, `child_spec`. The optional one defaults to `None`, so a
//! transport that manages its resources implicitly implements nothing extra,
//! and the SDK skips supervised startup for it.
//!
//! `post` is synchronous and may block the calling thread. It takes no
//! timeout or cancellation argument; those belong to the implementation's
//! own configuration. Each call is independent: implementations must be
//! safe to call from many threads at once.

use std::sync::Arc;

use crate::child_spec::ChildSpec;
use crate::error::TransportError;
use crate::http::HttpResponse;

/// A pluggable HTTP transport.
pub trait HttpClient: Send + Sync {
    /// POST `body` to `url` with `headers`.
    ///
    /// Duplicate names are all sent, and values sharing a name keep their
    /// relative order. Order across different names is not guaranteed, as
    /// HTTP/1.1 treats it as insignificant.
    ///
    /// Returns `Ok` for any response the server produced, whatever its
    /// status. Returns `Err` only when no response was obtained. The request
    /// is neither retried nor modified.
    fn post(&self, url: &str, headers: &[(String, String)], body: &[u8]) -> Result<HttpResponse, TransportError>;

    /// Describe a long-lived resource the supervisor should start before
    /// this client is used. Must not perform I/O or start anything itself.
    fn child_spec(&self) -> Option<ChildSpec> {
        None
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn post(&self, url: &str, headers: &[(String, String)], body: &[u8]) -> Result<HttpResponse, TransportError> {
        (**self).post(url, headers, body)
    }

    fn child_spec(&self) -> Option<ChildSpec> {
        (**self).child_spec()
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Box<T> {
    fn post(&self, url: &str, headers: &[(String, String)], body: &[u8]) -> Result<HttpResponse, TransportError> {
        (**self).post(url, headers, body)
    }

    fn child_spec(&self) -> Option<ChildSpec> {
        (**self).child_spec()
    }
}

//! Pluggable outbound HTTP transport for the SDK.
//!
//! # Overview
//! SDK code never talks to an HTTP library directly. It holds a `Transport`,
//! which wraps some implementation of the `HttpClient` contract: one
//! required `post` operation plus an optional `child_spec` startup hook.
//!
//! # Design
//! - The contract is a small object-safe trait; request/response values are
//!   plain owned data (`HttpRequest`, `HttpResponse`).
//! - Every call ends in `Ok(HttpResponse)` with a status in `100..=599`, or
//!   `Err(TransportError)`, whose contents are opaque to the contract.
//! - `UreqClient` is the default transport. `PooledUreqClient` hands its
//!   connection pool to an external supervisor via `ChildSpec`.
//!   `StubClient` serves canned replies for tests.

pub mod child_spec;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod stub;
pub mod transport;
pub mod ureq_client;

pub use child_spec::{ChildHandle, ChildSpec, Restart};
pub use client::HttpClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{InvalidStatus, TransportError};
pub use http::{Headers, HttpRequest, HttpResponse, StatusCode};
pub use stub::{StubClient, StubError};
pub use transport::Transport;
pub use ureq_client::{PooledUreqClient, UreqClient, UreqError};

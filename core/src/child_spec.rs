//! Startup descriptors for transports that own a long-lived resource.
//!
//! # Design
//! A `ChildSpec` only *describes* how to start something, such as a
//! connection pool. Building one performs no I/O. The process supervisor
//! that owns the application's lifecycle calls `start` when it is ready, and
//! keeps the returned `ChildHandle` for as long as the resource should live.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::error::TransportError;

type StartFn = dyn Fn() -> Result<ChildHandle, TransportError> + Send + Sync;

/// What a supervisor should do when the child exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Restart {
    /// Always restart.
    #[default]
    Permanent,
    /// Restart only after an abnormal exit.
    Transient,
    /// Never restart.
    Temporary,
}

/// A description of a supervisable resource.
#[derive(Clone)]
pub struct ChildSpec {
    id: String,
    restart: Restart,
    start: Arc<StartFn>,
}

impl ChildSpec {
    pub fn new<F>(id: impl Into<String>, start: F) -> Self
    where
        F: Fn() -> Result<ChildHandle, TransportError> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            restart: Restart::default(),
            start: Arc::new(start),
        }
    }

    pub fn with_restart(mut self, restart: Restart) -> Self {
        self.restart = restart;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn restart(&self) -> Restart {
        self.restart
    }

    /// Start the resource. Called by the supervisor, possibly more than once
    /// when restarting.
    pub fn start(&self) -> Result<ChildHandle, TransportError> {
        let handle = (self.start)()?;
        info!(id = %self.id, "child started");
        Ok(handle)
    }
}

impl fmt::Debug for ChildSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildSpec")
            .field("id", &self.id)
            .field("restart", &self.restart)
            .finish_non_exhaustive()
    }
}

/// A started resource. Stopping (or dropping) the handle releases it once.
pub struct ChildHandle {
    id: String,
    stop: Option<Box<dyn FnOnce() + Send>>,
}

impl ChildHandle {
    pub fn new<F>(id: impl Into<String>, stop: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            id: id.into(),
            stop: Some(Box::new(stop)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for ChildHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
            info!(id = %self.id, "child stopped");
        }
    }
}

impl fmt::Debug for ChildHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildHandle")
            .field("id", &self.id)
            .field("running", &self.stop.is_some())
            .finish()
    }
}

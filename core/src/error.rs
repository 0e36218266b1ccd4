//! Error types for the transport contract.
//!
//! # Design
//! The contract has exactly one failure type, `TransportError`, and it is
//! opaque: it wraps whatever the implementation produced. Code that only
//! knows the contract must not branch on its contents. An SDK layer that has
//! agreed on a concrete error shape with a specific transport can still
//! recover it with `downcast_ref`.

use std::error::Error as StdError;

/// Opaque failure from an `HttpClient::post` call.
#[derive(Debug, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(#[source] Box<dyn StdError + Send + Sync + 'static>);

impl TransportError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self(error.into())
    }

    /// Borrow the implementation's error if it is an `E`.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.0
    }
}

/// A status code outside `100..=599`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("status code {0} is outside 100..=599")]
pub struct InvalidStatus(pub u16);

impl From<InvalidStatus> for TransportError {
    fn from(err: InvalidStatus) -> Self {
        Self::new(err)
    }
}

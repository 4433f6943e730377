//! Error types for the event catalog and queue.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::types::EventId;

/// Errors raised by catalog, queue and session operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The handle does not belong to any event in the catalog.
    #[error("unknown event: {0}")]
    UnknownEvent(EventId),

    /// Storage for `what` could not grow.
    #[error("out of memory while storing {what}")]
    ResourceExhausted {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

impl CoreError {
    pub(crate) fn exhausted(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| Self::ResourceExhausted { what, source }
    }
}

//! # Framework Errors
//!
//! Channel-level failures shared by every actor, wrapped around the entity's own
//! error type so that domain failures reach the caller unchanged.

/// Errors returned by a [`ResourceClient`](crate::framework::ResourceClient).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError<E: std::error::Error> {
    /// The actor task is gone; the request was never delivered.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the request without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity is stored under the requested id.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The entity rejected the operation.
    #[error(transparent)]
    Entity(E),
}

impl<E: std::error::Error> FrameworkError<E> {
    /// True when the owning actor is unreachable.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ActorClosed | Self::ActorDropped)
    }
}

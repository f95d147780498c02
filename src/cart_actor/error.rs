//! Error types for the Cart actor.

use crate::framework::FrameworkError;

pub use crate::model::error::CartError;

impl From<FrameworkError<CartError>> for CartError {
    fn from(e: FrameworkError<CartError>) -> Self {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => CartError::CartNotFound(id),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                CartError::ContextUnavailable(e.to_string())
            }
        }
    }
}

//! Error types for the Order actor.

use crate::framework::FrameworkError;

pub use crate::model::error::OrderError;

impl From<FrameworkError<OrderError>> for OrderError {
    fn from(e: FrameworkError<OrderError>) -> Self {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => OrderError::OrderNotFound(id),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                OrderError::ContextUnavailable(e.to_string())
            }
        }
    }
}

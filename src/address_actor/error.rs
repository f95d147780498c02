//! Error types for the Address Book actor.

use crate::framework::FrameworkError;

pub use crate::model::error::AddressError;

impl From<FrameworkError<AddressError>> for AddressError {
    fn from(e: FrameworkError<AddressError>) -> Self {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => AddressError::BookNotFound(id),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                AddressError::ContextUnavailable(e.to_string())
            }
        }
    }
}

//! # Generic Messages
//!
//! Request envelope exchanged between `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel carrying the entity's error type.
pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

/// Message sent to a [`ResourceActor`](crate::framework::ResourceActor).
///
/// `Create`, `Get` and `Delete` cover the lifecycle of a resource and `List`
/// serves history views. Every change to a stored entity goes through `Action`
/// (adding an item to a cart, advancing an order).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

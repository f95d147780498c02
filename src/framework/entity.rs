//! # ActorEntity Trait
//!
//! The contract every resource (cart, address book, order) implements so that a
//! single generic [`ResourceActor`](crate::framework::ResourceActor) can own it.
//!
//! Associated types pin down the payload of every request: a `Cart` only accepts
//! `CartAction`s, an `Order` only accepts a `CheckoutRequest` on creation. The
//! compiler rejects a mismatched message outright.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults do nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` type is handed
/// to `run()` rather than `new()`, which lets actors be created first and wired
/// to each other afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier of one stored entity. Produced by the actor's id generator.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `AddItem`, `Advance`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected when the actor starts. Use `()` if none.
    type Context: Send + Sync;

    /// Domain error for every operation on this entity.
    ///
    /// One enum per actor rather than one per action: clients match on a single
    /// type, at the cost of some variants being unreachable from some actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly generated id and the create payload.
    /// Runs synchronously before `on_create`; an error here stores nothing.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    /// An error aborts the creation.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed. An error keeps it.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    ///
    /// Implementations must leave `self` untouched when they return an error.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

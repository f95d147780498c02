//! Generic resource actor engine.
//!
//! Every piece of shopper state (a cart, an address book, the placed orders) is
//! owned by exactly one [`ResourceActor`] task. Callers never touch that state
//! directly: they hold a cloneable [`ResourceClient`] and send it requests, which
//! the actor applies one at a time. A mutation is therefore always observed as a
//! whole, never half-applied.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a store of entities
//! - [`ResourceClient`] - Typed sender half used by the domain clients
//! - [`FrameworkError`] - Channel failures plus the entity's own error type
//!
//! # Testing
//!
//! See [`mock`] for utilities to test actors whose context holds other clients.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

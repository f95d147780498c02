//! # Order Actor
//!
//! Materializes orders from a cart and a completed checkout, and tracks their
//! delivery status.
//!
//! ## Dependencies
//!
//! The order actor reads and empties carts, so its context holds a
//! [`CartClient`] alongside the [`PricingPolicy`] used to price the snapshot:
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = cart_actor::new(32);
//! let (order_actor, order_client) = order_actor::new(32);
//!
//! tokio::spawn(cart_actor.run(pricing));
//! tokio::spawn(order_actor.run(OrderContext { cart: cart_client.clone(), pricing }));
//! ```
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CartClient, OrderClient};
use crate::framework::ResourceActor;
use crate::model::{Order, OrderId, PricingPolicy};
use chrono::Utc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Dependencies injected into the order actor at `run()`.
#[derive(Clone)]
pub struct OrderContext {
    pub cart: CartClient,
    pub pricing: PricingPolicy,
}

/// Creates a new Order actor and its client.
///
/// Ids combine today's date with a process-wide sequence number, so they are
/// unique for the lifetime of the actor.
pub fn new(capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let order_seq = Arc::new(AtomicU32::new(1));
    let next_order_id = move || {
        let seq = order_seq.fetch_add(1, Ordering::SeqCst);
        OrderId::new(Utc::now().date_naive(), seq)
    };

    let (actor, generic_client) = ResourceActor::new(capacity, next_order_id);
    (actor, OrderClient::new(generic_client))
}

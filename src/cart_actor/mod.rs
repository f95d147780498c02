//! # Cart Actor
//!
//! Owns every shopper cart. One actor serves all carts; each cart is an entity
//! keyed by [`CartId`](crate::model::CartId) and changed only through
//! [`CartAction`]s, so a reader never sees a half-applied update.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use freshcart::cart_actor;
//! use freshcart::model::{Money, PricingPolicy, Product};
//!
//! # async fn demo() -> Result<(), freshcart::cart_actor::CartError> {
//! let (actor, client) = cart_actor::new(32);
//! tokio::spawn(actor.run(PricingPolicy::default()));
//!
//! let cart_id = client.create_cart(None).await?;
//! let chicken = Product::new("p1", "Chicken Curry Cut", Money::from_major(100));
//! client.add_item(cart_id, chicken, 2).await?;
//! assert_eq!(client.get_subtotal(cart_id).await?, Money::from_major(200));
//! # Ok(())
//! # }
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::{Cart, CartId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Cart actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Cart>, CartClient) {
    let cart_id_counter = Arc::new(AtomicU32::new(1));
    let next_cart_id = move || CartId(cart_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(capacity, next_cart_id);
    (actor, CartClient::new(generic_client))
}

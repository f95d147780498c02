//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors.
//!
//! Dependencies are injected late: every actor is created first, then started
//! with `run(context)`. The order actor's context holds a clone of the cart
//! client, which is how placing an order reads and empties a cart.
//!
//! Shutdown is channel closure. Dropping the clients ends each actor's receive
//! loop; since the dependency graph (order -> cart) is acyclic, every actor
//! stops once the clients pointing at it are gone.

pub mod store_system;
pub mod tracing;

pub use store_system::*;
pub use self::tracing::setup_tracing;

//! Plain domain types. Everything here is synchronous and owns its own
//! invariants; the actors in [`crate::cart_actor`], [`crate::address_actor`] and
//! [`crate::order_actor`] only decide who may touch which value and when.

pub mod address;
pub mod cart;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;

pub use address::*;
pub use cart::*;
pub use money::*;
pub use order::*;
pub use pricing::{OrderTotals, PricingPolicy};

//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each wrapper turns the generic request/response pairs into named domain
//! operations and maps [`FrameworkError`](crate::framework::FrameworkError) into
//! the actor's own error type.

pub mod actor_client;
pub mod address_client;
pub mod cart_client;
pub mod order_client;

pub use actor_client::*;
pub use address_client::*;
pub use cart_client::*;
pub use order_client::*;

//! # Address Book Actor
//!
//! Owns the customers' address books. Each [`AddressBook`] keeps exactly one
//! default address whenever it is non-empty, plus a separate checkout
//! selection.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`AddressBook`]
//! - [`error`] - [`AddressError`]
//! - [`new()`] - Factory function that creates the actor and client

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::AddressClient;
use crate::framework::ResourceActor;
use crate::model::{AddressBook, AddressBookId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Address Book actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<AddressBook>, AddressClient) {
    let book_id_counter = Arc::new(AtomicU32::new(1));
    let next_book_id = move || AddressBookId(book_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(capacity, next_book_id);
    (actor, AddressClient::new(generic_client))
}

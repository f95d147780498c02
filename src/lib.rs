//! # freshcart
//!
//! The cart and order engine of a grocery and meat delivery storefront: a cart
//! ledger, an address book with a single default address, and an order
//! lifecycle that turns a cart into an immutable order and tracks its delivery.
//!
//! ## Architecture
//!
//! Each kind of state is owned by one actor. A [`ResourceActor`](framework::ResourceActor)
//! runs in its own Tokio task, keeps its entities in a private map and applies
//! requests one at a time, so no mutation is ever observed half-done and no
//! locks are needed. Callers hold cloneable clients instead of shared state.
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, and mocks for testing one actor against
//! scripted neighbours.
//!
//! ### 2. The Domain ([`model`])
//! Synchronous types with their invariants: [`Cart`](model::Cart),
//! [`AddressBook`](model::AddressBook), [`Order`](model::Order) and the pricing
//! rules in [`model::pricing`]. Money is integer paise throughout.
//!
//! ### 3. The Actors ([`cart_actor`], [`address_actor`], [`order_actor`])
//! `ActorEntity` implementations, error types and factories. The order actor
//! depends on the cart actor: placing an order snapshots and empties the cart
//! in one cart action.
//!
//! ### 4. The Interface ([`clients`])
//! Named domain operations over the generic client, e.g.
//! [`CartClient::add_item`](clients::CartClient::add_item) or
//! [`OrderClient::place_order`](clients::OrderClient::place_order).
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`StoreSystem`](lifecycle::StoreSystem) starts and wires the actors from a
//! [`StoreConfig`](config::StoreConfig).
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod address_actor;
pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;

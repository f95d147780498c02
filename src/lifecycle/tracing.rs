//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven by
//! `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per request outcome
//! RUST_LOG=debug cargo run    # plus full request payloads
//! ```
//!
//! Module paths are hidden (`with_target(false)`). Framework log lines carry an
//! `entity_type` field (`Cart`, `AddressBook`, `Order`) and the entity id
//! instead, and client calls open spans named after the operation:
//!
//! ```text
//! INFO Actor started entity_type="Cart"
//! INFO checkout:place_order{cart_id=cart_1}: Created entity_type="Order" id=ORD20261018000001 size=1
//! WARN checkout:place_order{cart_id=cart_2}: on_create failed entity_type="Order" id=ORD20261018000002 error=Cart cart_2 is empty
//! ```

/// Initializes the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

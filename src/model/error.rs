//! Errors raised by the domain types. The actor modules re-export them as the
//! error type of their entity.

use crate::model::{CartId, MissingField, OrderId};
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A quantity change asked for a negative amount, an add asked for none,
    /// or the line would grow past `u32::MAX` units. The cart is unchanged.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// No cart is stored under this id.
    #[error("Cart not found: {0}")]
    CartNotFound(String),

    /// The cart actor is not running.
    #[error("Cart unavailable: {0}")]
    ContextUnavailable(String),
}

/// Errors that can occur during address book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    /// A field of the address failed validation. Nothing was changed.
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    /// No address book is stored under this id.
    #[error("Address book not found: {0}")]
    BookNotFound(String),

    /// The address book actor is not running.
    #[error("Address book unavailable: {0}")]
    ContextUnavailable(String),
}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Address, delivery slot or payment method was not provided. No order was
    /// created and the cart was not touched.
    #[error("Incomplete checkout: missing {0}")]
    IncompleteCheckout(MissingField),

    /// The cart had nothing to order.
    #[error("Cart {0} is empty")]
    EmptyCart(CartId),

    /// The order is at the end of its timeline.
    #[error("Order {0} is already delivered")]
    AlreadyDelivered(OrderId),

    /// Placed orders are kept for the whole session and cannot be deleted.
    #[error("Order {0} cannot be deleted")]
    Immutable(OrderId),

    /// No order is stored under this id.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// The cart actor rejected the checkout read.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The order actor is not running.
    #[error("Order service unavailable: {0}")]
    ContextUnavailable(String),
}

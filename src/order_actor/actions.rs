//! Custom actions for the Order actor.

use crate::model::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Moves the order one step along its delivery timeline. This is the
    /// external trigger for status changes (courier app, backend webhook);
    /// nothing inside the crate advances orders on its own.
    Advance,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderActionResult {
    Advance(OrderStatus),
}

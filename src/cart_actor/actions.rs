//! Custom actions for the Cart actor.
//!
//! Every cart mutation is an action on one [`Cart`](crate::model::Cart), so it
//! is applied whole by the cart's actor. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{CartSummary, LineItem, Product, ProductId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds units of a product, merging with an existing line.
    AddItem { product: Product, quantity: u32 },
    /// Sets a line's quantity. Zero removes the line; negative is rejected.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Removes a line. Absent ids are a no-op.
    RemoveItem(ProductId),
    /// Empties the cart.
    Clear,
    /// Items, item count and totals under the actor's pricing policy.
    Summary,
    /// Summary of the current contents, then empties the cart, in one step.
    /// Used when an order is placed.
    Checkout,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    AddItem(LineItem),
    /// `None` when the line was removed or never existed.
    UpdateQuantity(Option<LineItem>),
    RemoveItem(Option<LineItem>),
    Clear,
    Summary(CartSummary),
    Checkout(CartSummary),
}

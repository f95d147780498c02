//! [`ActorEntity`] implementation for [`Order`].
//!
//! Placing an order runs in two phases:
//!
//! 1. `from_create_params` checks that the checkout request is complete. A
//!    missing field fails here, before the cart is contacted.
//! 2. `on_create` takes the cart's contents and empties the cart in a single
//!    cart action, then prices the snapshot with the injected policy.
//!
//! The order is only stored once both phases succeed, and from then on it is
//! never removed: `on_delete` always refuses.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use super::OrderContext;
use crate::framework::ActorEntity;
use crate::model::{CheckoutRequest, Order, OrderId};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = CheckoutRequest;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, request: CheckoutRequest) -> Result<Self, OrderError> {
        Order::from_checkout(id, request, Utc::now())
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        debug!(order_id = %self.id, cart_id = %self.cart_id, "Taking cart snapshot");
        let snapshot = ctx.cart.checkout(self.cart_id).await?;
        if snapshot.is_empty() {
            return Err(OrderError::EmptyCart(self.cart_id));
        }

        self.totals = ctx.pricing.quote(&snapshot.items);
        self.items = snapshot.items;
        info!(
            order_id = %self.id,
            items = self.items.len(),
            total = %self.totals.total,
            "Order priced"
        );
        Ok(())
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), OrderError> {
        Err(OrderError::Immutable(self.id.clone()))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Advance => self.advance().map(OrderActionResult::Advance),
        }
    }
}

//! [`ActorEntity`] implementation for [`Cart`].
//!
//! The actor's context is the [`PricingPolicy`] used to price summaries.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::framework::ActorEntity;
use crate::model::{Cart, CartCreate, CartId, PricingPolicy};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = PricingPolicy;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id, params.owner))
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        policy: &PricingPolicy,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::AddItem { product, quantity } => {
                self.add_item(product, quantity).map(CartActionResult::AddItem)
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => self
                .update_quantity(&product_id, quantity)
                .map(CartActionResult::UpdateQuantity),
            CartAction::RemoveItem(product_id) => {
                Ok(CartActionResult::RemoveItem(self.remove_item(&product_id)))
            }
            CartAction::Clear => {
                self.clear();
                Ok(CartActionResult::Clear)
            }
            CartAction::Summary => Ok(CartActionResult::Summary(self.summary(policy))),
            CartAction::Checkout => {
                let summary = self.summary(policy);
                self.clear();
                Ok(CartActionResult::Checkout(summary))
            }
        }
    }
}

//! # Cart Client
//!
//! High-level API for the `Cart` actor. Every method is one cart action, so it
//! is applied atomically to the whole cart.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartCreate, CartId, CartSummary, LineItem, Money, Product, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError<CartError>) -> Self::Error {
        CartError::from(e)
    }
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn create_cart(&self, owner: Option<String>) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartCreate { owner })
            .await
            .map(|cart| cart.id)
            .map_err(Self::map_error)
    }

    /// Adds `quantity` units of `product`, merging with an existing line.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(
        &self,
        id: CartId,
        product: Product,
        quantity: u32,
    ) -> Result<LineItem, CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::AddItem { product, quantity }).await? {
            CartActionResult::AddItem(line) => Ok(line),
            _ => unreachable!("AddItem action must return AddItem result"),
        }
    }

    /// Sets a line's quantity. `0` removes the line.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: CartId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Option<LineItem>, CartError> {
        debug!("Sending request");
        let action = CartAction::UpdateQuantity {
            product_id,
            quantity,
        };
        match self.act(id, action).await? {
            CartActionResult::UpdateQuantity(line) => Ok(line),
            _ => unreachable!("UpdateQuantity action must return UpdateQuantity result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        id: CartId,
        product_id: ProductId,
    ) -> Result<Option<LineItem>, CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::RemoveItem(product_id)).await? {
            CartActionResult::RemoveItem(line) => Ok(line),
            _ => unreachable!("RemoveItem action must return RemoveItem result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<(), CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::Clear).await? {
            CartActionResult::Clear => Ok(()),
            _ => unreachable!("Clear action must return Clear result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, id: CartId) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::Summary).await? {
            CartActionResult::Summary(summary) => Ok(summary),
            _ => unreachable!("Summary action must return Summary result"),
        }
    }

    /// Snapshot of the cart taken in the same step that empties it.
    #[instrument(skip(self))]
    pub async fn checkout(&self, id: CartId) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::Checkout).await? {
            CartActionResult::Checkout(summary) => Ok(summary),
            _ => unreachable!("Checkout action must return Checkout result"),
        }
    }

    /// Sum of quantities across all lines.
    pub async fn get_total_item_count(&self, id: CartId) -> Result<u64, CartError> {
        Ok(self.summary(id).await?.total_item_count)
    }

    pub async fn get_subtotal(&self, id: CartId) -> Result<Money, CartError> {
        Ok(self.summary(id).await?.totals.subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create};
    use crate::model::PricingPolicy;

    #[tokio::test]
    async fn test_create_cart_returns_id() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.create_cart(Some("guest".into())).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.owner.as_deref(), Some("guest"));
        responder.send(Ok(Cart::new(CartId(3), params.owner))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(CartId(3)));
    }

    #[tokio::test]
    async fn test_update_quantity_sends_signed_amount() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move {
            cart_client
                .update_quantity(CartId(1), ProductId::from("p1"), -1)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        match action {
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                assert_eq!(product_id, ProductId::from("p1"));
                assert_eq!(quantity, -1);
            }
            other => panic!("Expected UpdateQuantity, got {other:?}"),
        }
        responder
            .send(Err(FrameworkError::Entity(CartError::InvalidQuantity(-1))))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(CartError::InvalidQuantity(-1)));
    }

    #[tokio::test]
    async fn test_subtotal_reads_summary() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.get_subtotal(CartId(1)).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, CartAction::Summary));

        let mut cart = Cart::new(CartId(1), None);
        cart.add_item(Product::new("p1", "Eggs", Money::from_major(60)), 2)
            .unwrap();
        let summary = cart.summary(&PricingPolicy::default());
        responder.send(Ok(CartActionResult::Summary(summary))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Money::from_major(120)));
    }

    #[tokio::test]
    async fn test_unknown_cart_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.clear(CartId(9)).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::NotFound("cart_9".to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(CartError::CartNotFound("cart_9".to_string()))
        );
    }

    #[tokio::test]
    async fn test_stopped_actor_is_context_unavailable() {
        let (client, receiver) = create_mock_client::<Cart>(1);
        drop(receiver);

        let err = CartClient::new(client).summary(CartId(1)).await.unwrap_err();
        assert!(matches!(err, CartError::ContextUnavailable(_)));
    }
}

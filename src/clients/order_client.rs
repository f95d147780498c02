//! # Order Client
//!
//! High-level API for the `Order` actor.
//!
//! Placing an order is a plain `create`: reading and emptying the cart happens
//! inside the Order actor's `on_create` hook.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CheckoutRequest, Order, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError<OrderError>) -> Self::Error {
        OrderError::from(e)
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order from the cart named in `request`, consuming the request.
    ///
    /// On success the cart is empty and the returned order holds a copy of
    /// what it contained. On failure no order exists and the cart is as it was.
    #[instrument(skip(self, request), fields(cart_id = %request.cart_id))]
    pub async fn place_order(&self, request: CheckoutRequest) -> Result<Order, OrderError> {
        debug!("place_order called");
        let order = self.inner.create(request).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, total = %order.totals.total, "Order placed");
        Ok(order)
    }

    /// `None` when no order has this id.
    pub async fn get_order_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    /// Order history, oldest first.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    /// Moves the order one step along its timeline and returns the new status.
    #[instrument(skip(self))]
    pub async fn advance_status(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Advance)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Advance(status) => Ok(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_get};
    use crate::model::CartId;

    #[tokio::test]
    async fn test_advance_status() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);
        let id = OrderId::from("ORD20261018000001");

        let task = {
            let id = id.clone();
            tokio::spawn(async move { order_client.advance_status(id).await })
        };

        let (requested, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(requested, id);
        assert_eq!(action, OrderAction::Advance);
        responder
            .send(Ok(OrderActionResult::Advance(OrderStatus::Preparing)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(OrderStatus::Preparing));
    }

    #[tokio::test]
    async fn test_missing_order_is_none() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .get_order_by_id(OrderId::from("ORD-unknown"))
                .await
        });

        let (_, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        responder.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_place_order_surfaces_entity_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .place_order(CheckoutRequest::new(CartId(1)))
                .await
        });

        let (request, responder) = crate::framework::mock::expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(request.cart_id, CartId(1));
        responder
            .send(Err(FrameworkError::Entity(OrderError::EmptyCart(CartId(1)))))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(OrderError::EmptyCart(CartId(1))));
    }
}

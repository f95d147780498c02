use crate::clients::{AddressClient, CartClient, OrderClient};
use crate::config::StoreConfig;
use crate::order_actor::OrderContext;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the storefront core.
///
/// `StoreSystem` starts one actor each for carts, address books and orders,
/// wires the order actor to the cart actor, and hands out the three clients.
/// Clients are plain handles: clone them into whatever needs them.
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::new(StoreConfig::from_env()?);
///
/// let cart = system.cart_client.create_cart(None).await?;
/// system.cart_client.add_item(cart, product, 2).await?;
/// let order = system.order_client.place_order(checkout).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    pub cart_client: CartClient,
    pub address_client: AddressClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Creates and starts every actor. Must be called inside a Tokio runtime.
    pub fn new(config: StoreConfig) -> Self {
        let capacity = config.channel_capacity;

        // 1. Create actors (no dependencies)
        let (cart_actor, cart_client) = crate::cart_actor::new(capacity);
        let (address_actor, address_client) = crate::address_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        // 2. Start actors with injected context
        let cart_handle = tokio::spawn(cart_actor.run(config.pricing));
        let address_handle = tokio::spawn(address_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            cart: cart_client.clone(),
            pricing: config.pricing,
        }));

        info!(capacity, pricing = ?config.pricing, "Store system started");

        Self {
            cart_client,
            address_client,
            order_client,
            handles: vec![order_handle, cart_handle, address_handle],
        }
    }

    /// Drops every client and waits for the actors to drain and stop.
    ///
    /// The order actor holds a cart client in its context, so the cart actor
    /// only stops once the order actor has.
    ///
    /// # Errors
    ///
    /// `ActorTaskFailed` if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.cart_client);
        drop(self.address_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

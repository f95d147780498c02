//! Demo flow: fill a cart, save an address, check out, follow the delivery.

use chrono::{Duration, Utc};
use freshcart::config::StoreConfig;
use freshcart::lifecycle::{setup_tracing, StoreSystem};
use freshcart::model::{
    AddressDraft, AddressKind, CheckoutRequest, DeliverySlot, Money, PaymentMethod, Product,
    ProductId,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StoreConfig::from_env()?;
    let pricing = config.pricing;
    let system = StoreSystem::new(config);

    let span = tracing::info_span!("cart");
    let cart_id = async {
        let cart_id = system.cart_client.create_cart(Some("guest".into())).await?;
        let curry_cut = Product::new("p1", "Chicken Curry Cut", Money::from_major(220))
            .with_image("chicken-curry-cut.jpg");
        let eggs = Product::new("p2", "Farm Eggs (6)", Money::from_major(60));

        system.cart_client.add_item(cart_id, curry_cut, 1).await?;
        system.cart_client.add_item(cart_id, eggs, 1).await?;
        system
            .cart_client
            .update_quantity(cart_id, ProductId::from("p2"), 3)
            .await?;

        let summary = system.cart_client.summary(cart_id).await?;
        info!(
            items = summary.total_item_count,
            subtotal = %summary.totals.subtotal,
            total = %summary.totals.total,
            "Cart ready"
        );
        if let Some(short) = pricing.amount_until_free_delivery(summary.totals.subtotal) {
            info!(%short, "Add more for free delivery");
        }
        Ok::<_, freshcart::cart_actor::CartError>(cart_id)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("address");
    let address = async {
        let book = system.address_client.create_book(Some("guest".into())).await?;
        system
            .address_client
            .add_address(
                book,
                AddressDraft {
                    name: "John Doe".into(),
                    phone: "+91 9876543210".into(),
                    house_no: "123".into(),
                    area: "Main Street".into(),
                    landmark: Some("Near Central Park".into()),
                    city: "Namakkal".into(),
                    state: "Tamil Nadu".into(),
                    pincode: "637001".into(),
                    kind: AddressKind::Home,
                    is_default: true,
                },
            )
            .await?;
        system.address_client.get_selected_address(book).await
    }
    .instrument(span)
    .await?;

    let Some(address) = address else {
        error!("No address selected");
        system.shutdown().await?;
        return Ok(());
    };

    let span = tracing::info_span!("checkout");
    let tomorrow = (Utc::now() + Duration::days(1)).date_naive();
    let request = CheckoutRequest::new(cart_id)
        .address(address)
        .delivery_slot(DeliverySlot::new(tomorrow, "6:30 PM - 8:30 PM"))
        .payment_method(PaymentMethod::Upi);
    let order = system
        .order_client
        .place_order(request)
        .instrument(span)
        .await?;
    info!(
        order_id = %order.id,
        total = %order.totals.total,
        arrival = order.delivery_slot.estimated_arrival(),
        payment = order.payment_method.label(),
        "Order confirmed"
    );

    let span = tracing::info_span!("tracking");
    async {
        for _ in 0..2 {
            let status = system.order_client.advance_status(order.id.clone()).await?;
            info!(%status, "Status advanced");
        }
        if let Some(order) = system.order_client.get_order_by_id(order.id.clone()).await? {
            for step in order.tracking() {
                info!(label = step.label, state = ?step.state, "Tracking");
            }
        }
        Ok::<_, freshcart::order_actor::OrderError>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}

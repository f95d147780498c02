use chrono::NaiveDate;
use freshcart::address_actor::AddressError;
use freshcart::cart_actor::CartError;
use freshcart::clients::ActorClient;
use freshcart::config::StoreConfig;
use freshcart::lifecycle::StoreSystem;
use freshcart::model::{
    AddressDraft, AddressKind, AddressPatch, CheckoutRequest, DeliverySlot, MissingField, Money,
    OrderId, OrderStatus, PaymentMethod, Product, ProductId, StepState,
};
use freshcart::order_actor::OrderError;

fn draft(name: &str, is_default: bool) -> AddressDraft {
    AddressDraft {
        name: name.to_string(),
        phone: "+91 9876543210".to_string(),
        house_no: "12".to_string(),
        area: "Main Street".to_string(),
        landmark: None,
        city: "Namakkal".to_string(),
        state: "Tamil Nadu".to_string(),
        pincode: "637001".to_string(),
        kind: AddressKind::Home,
        is_default,
    }
}

fn slot() -> DeliverySlot {
    DeliverySlot::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(), "7 AM - 9 AM")
}

fn product(id: &str, rupees: u64) -> Product {
    Product::new(id, id.to_uppercase(), Money::from_major(rupees))
}

#[tokio::test]
async fn test_cart_totals_follow_mutations() {
    let system = StoreSystem::new(StoreConfig::default());
    let carts = system.cart_client.clone();
    let cart = carts.create_cart(None).await.unwrap();

    carts.add_item(cart, product("p1", 1), 2).await.unwrap();
    assert_eq!(carts.get_subtotal(cart).await.unwrap(), Money::from_major(2));
    assert_eq!(carts.get_total_item_count(cart).await.unwrap(), 2);

    carts
        .update_quantity(cart, ProductId::from("p1"), 0)
        .await
        .unwrap();
    carts.add_item(cart, product("p2", 600), 1).await.unwrap();
    let summary = carts.summary(cart).await.unwrap();
    assert_eq!(summary.totals.delivery_charge, Money::ZERO);

    carts
        .update_quantity(cart, ProductId::from("p2"), 0)
        .await
        .unwrap();
    carts.add_item(cart, product("p3", 300), 1).await.unwrap();
    let summary = carts.summary(cart).await.unwrap();
    assert_eq!(summary.totals.delivery_charge, Money::from_major(40));
    assert_eq!(summary.totals.tax, Money::from_major(15));
    assert_eq!(summary.totals.total, Money::from_major(355));

    let err = carts
        .update_quantity(cart, ProductId::from("p3"), -2)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::InvalidQuantity(-2));
    assert_eq!(carts.get_total_item_count(cart).await.unwrap(), 1);

    drop(carts);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_carts_are_independent() {
    let system = StoreSystem::new(StoreConfig::default());
    let carts = &system.cart_client;
    let a = carts.create_cart(Some("a".into())).await.unwrap();
    let b = carts.create_cart(Some("b".into())).await.unwrap();

    carts.add_item(a, product("p1", 10), 3).await.unwrap();
    assert_eq!(carts.get_total_item_count(b).await.unwrap(), 0);

    let missing = carts.summary(freshcart::model::CartId(99)).await.unwrap_err();
    assert!(matches!(missing, CartError::CartNotFound(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_address_default_and_selection() {
    let system = StoreSystem::new(StoreConfig::default());
    let book_client = &system.address_client;
    let book = book_client.create_book(None).await.unwrap();

    let x = book_client.add_address(book, draft("X", false)).await.unwrap();
    let y = book_client.add_address(book, draft("Y", false)).await.unwrap();
    assert!(x.is_default);
    assert_eq!(
        book_client.get_selected_address(book).await.unwrap().map(|a| a.id),
        Some(x.id)
    );
    assert_eq!(
        book_client.get_default_address(book).await.unwrap().map(|a| a.id),
        Some(x.id)
    );

    // Deleting the default promotes and selects the remaining address.
    book_client.delete_address(book, x.id).await.unwrap();
    let selected = book_client.get_selected_address(book).await.unwrap().unwrap();
    assert_eq!(selected.id, y.id);
    assert!(selected.is_default);

    // A patch to the selected address is visible through the selection.
    let patch = AddressPatch {
        area: Some("Park Road".to_string()),
        ..AddressPatch::default()
    };
    book_client.update_address(book, y.id, patch).await.unwrap();
    let selected = book_client.get_selected_address(book).await.unwrap().unwrap();
    assert_eq!(selected.area, "Park Road");

    let invalid = AddressDraft {
        pincode: "12".to_string(),
        ..draft("Z", true)
    };
    let err = book_client.add_address(book, invalid).await.unwrap_err();
    assert!(matches!(err, AddressError::Validation { field: "pincode", .. }));

    let addresses = book_client.list_addresses(book).await.unwrap();
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses.iter().filter(|a| a.is_default).count(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_slot_keeps_cart() {
    let system = StoreSystem::new(StoreConfig::default());
    let cart = system.cart_client.create_cart(None).await.unwrap();
    system
        .cart_client
        .add_item(cart, product("p1", 100), 2)
        .await
        .unwrap();
    let book = system.address_client.create_book(None).await.unwrap();
    let address = system
        .address_client
        .add_address(book, draft("X", true))
        .await
        .unwrap();

    let request = CheckoutRequest::new(cart)
        .address(address)
        .payment_method(PaymentMethod::Card);
    let err = system.order_client.place_order(request).await.unwrap_err();

    assert_eq!(err, OrderError::IncompleteCheckout(MissingField::DeliverySlot));
    assert_eq!(system.cart_client.get_total_item_count(cart).await.unwrap(), 2);
    assert!(system.order_client.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_snapshot_survives_cart_and_address_changes() {
    let system = StoreSystem::new(StoreConfig::default());
    let cart = system.cart_client.create_cart(None).await.unwrap();
    system
        .cart_client
        .add_item(cart, product("p1", 100), 2)
        .await
        .unwrap();
    system
        .cart_client
        .add_item(cart, product("p2", 60), 1)
        .await
        .unwrap();
    let book = system.address_client.create_book(None).await.unwrap();
    let address = system
        .address_client
        .add_address(book, draft("X", true))
        .await
        .unwrap();

    let request = CheckoutRequest::new(cart)
        .address(address.clone())
        .delivery_slot(slot())
        .payment_method(PaymentMethod::Upi);
    let order = system.order_client.place_order(request).await.unwrap();

    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.totals.subtotal, Money::from_major(260));
    assert_eq!(order.totals.delivery_charge, Money::from_major(40));
    assert_eq!(order.totals.tax, Money::from_major(13));
    assert_eq!(order.totals.total, Money::from_major(313));
    assert_eq!(order.delivery_slot.estimated_arrival(), "9 AM");

    // Placing the order emptied the cart.
    assert_eq!(system.cart_client.get_total_item_count(cart).await.unwrap(), 0);

    // Later edits never reach the stored order.
    system
        .cart_client
        .add_item(cart, product("p1", 100), 5)
        .await
        .unwrap();
    let patch = AddressPatch {
        city: Some("Salem".to_string()),
        ..AddressPatch::default()
    };
    system
        .address_client
        .update_address(book, address.id, patch)
        .await
        .unwrap();

    let stored = system
        .order_client
        .get_order_by_id(order.id.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.items, order.items);
    assert_eq!(stored.items[0].quantity, 2);
    assert_eq!(stored.address.city, "Namakkal");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_cart_cannot_be_ordered() {
    let system = StoreSystem::new(StoreConfig::default());
    let cart = system.cart_client.create_cart(None).await.unwrap();
    let book = system.address_client.create_book(None).await.unwrap();
    let address = system
        .address_client
        .add_address(book, draft("X", true))
        .await
        .unwrap();

    let request = CheckoutRequest::new(cart)
        .address(address)
        .delivery_slot(slot())
        .payment_method(PaymentMethod::Cod);
    let err = system.order_client.place_order(request).await.unwrap_err();

    assert_eq!(err, OrderError::EmptyCart(cart));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_placed_order_cannot_be_deleted() {
    let system = StoreSystem::new(StoreConfig::default());
    let cart = system.cart_client.create_cart(None).await.unwrap();
    system
        .cart_client
        .add_item(cart, product("p1", 250), 2)
        .await
        .unwrap();
    let book = system.address_client.create_book(None).await.unwrap();
    let address = system
        .address_client
        .add_address(book, draft("X", true))
        .await
        .unwrap();
    let request = CheckoutRequest::new(cart)
        .address(address)
        .delivery_slot(slot())
        .payment_method(PaymentMethod::Upi);
    let order = system.order_client.place_order(request).await.unwrap();

    assert_eq!(
        system.order_client.delete(order.id.clone()).await,
        Err(OrderError::Immutable(order.id.clone()))
    );
    assert_eq!(
        system.order_client.get_order_by_id(order.id.clone()).await,
        Ok(Some(order.clone()))
    );
    assert_eq!(system.order_client.list_orders().await.unwrap(), vec![order]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_status_progression_and_tracking() {
    let system = StoreSystem::new(StoreConfig::default());
    let cart = system.cart_client.create_cart(None).await.unwrap();
    system
        .cart_client
        .add_item(cart, product("p1", 700), 1)
        .await
        .unwrap();
    let book = system.address_client.create_book(None).await.unwrap();
    let address = system
        .address_client
        .add_address(book, draft("X", true))
        .await
        .unwrap();
    let request = CheckoutRequest::new(cart)
        .address(address)
        .delivery_slot(slot())
        .payment_method(PaymentMethod::Cod);
    let order = system.order_client.place_order(request).await.unwrap();
    let orders = &system.order_client;

    assert_eq!(
        orders.advance_status(order.id.clone()).await,
        Ok(OrderStatus::Preparing)
    );
    let tracked = orders.get(order.id.clone()).await.unwrap().unwrap();
    let states: Vec<StepState> = tracked.tracking().iter().map(|s| s.state).collect();
    assert_eq!(
        states,
        vec![
            StepState::Completed,
            StepState::Active,
            StepState::Pending,
            StepState::Pending
        ]
    );

    orders.advance_status(order.id.clone()).await.unwrap();
    assert_eq!(
        orders.advance_status(order.id.clone()).await,
        Ok(OrderStatus::Delivered)
    );
    assert_eq!(
        orders.advance_status(order.id.clone()).await,
        Err(OrderError::AlreadyDelivered(order.id.clone()))
    );

    assert_eq!(
        orders.get_order_by_id(OrderId::from("ORD-missing")).await,
        Ok(None)
    );
    assert!(matches!(
        orders.advance_status(OrderId::from("ORD-missing")).await,
        Err(OrderError::OrderNotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_ids_are_unique_and_history_is_ordered() {
    let system = StoreSystem::new(StoreConfig::default());
    let book = system.address_client.create_book(None).await.unwrap();
    let address = system
        .address_client
        .add_address(book, draft("X", true))
        .await
        .unwrap();

    let mut placed = Vec::new();
    for _ in 0..3 {
        let cart = system.cart_client.create_cart(None).await.unwrap();
        system
            .cart_client
            .add_item(cart, product("p1", 50), 1)
            .await
            .unwrap();
        let request = CheckoutRequest::new(cart)
            .address(address.clone())
            .delivery_slot(slot())
            .payment_method(PaymentMethod::Upi);
        placed.push(system.order_client.place_order(request).await.unwrap().id);
    }

    let history: Vec<OrderId> = system
        .order_client
        .list_orders()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(history, placed);
    assert!(placed[0] != placed[1] && placed[1] != placed[2]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_pricing_is_used() {
    let config = StoreConfig {
        pricing: freshcart::model::PricingPolicy {
            free_delivery_above: Money::from_major(100),
            delivery_fee: Money::from_major(25),
            tax_rate_bps: 0,
        },
        ..StoreConfig::default()
    };
    let system = StoreSystem::new(config);
    let cart = system.cart_client.create_cart(None).await.unwrap();
    system
        .cart_client
        .add_item(cart, product("p1", 100), 1)
        .await
        .unwrap();

    let totals = system.cart_client.summary(cart).await.unwrap().totals;
    assert_eq!(totals.delivery_charge, Money::from_major(25));
    assert_eq!(totals.tax, Money::ZERO);
    assert_eq!(totals.total, Money::from_major(125));

    system.shutdown().await.unwrap();
}

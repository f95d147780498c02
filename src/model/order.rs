use crate::model::error::OrderError;
use crate::model::{Address, CartId, LineItem, OrderTotals};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Order identifier of the form `ORD<yyyymmdd><seq>`, e.g. `ORD20261018000001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(date: NaiveDate, seq: u32) -> Self {
        Self(format!("ORD{}{:06}", date.format("%Y%m%d"), seq))
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Delivery progress. Strictly linear; there is no cancelled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// The following state, or `None` from `Delivered`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Confirmed => Some(Self::Preparing),
            Self::Preparing => Some(Self::OutForDelivery),
            Self::OutForDelivery => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Order Confirmed",
            Self::Preparing => "Preparing Order",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
        };
        f.write_str(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cod,
    Upi,
    Card,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cod => "Cash on Delivery",
            Self::Upi => "UPI",
            Self::Card => "Card",
        }
    }
}

/// A delivery window, e.g. `2026-10-19` / `"6:30 PM - 8:30 PM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySlot {
    pub date: NaiveDate,
    pub time_range: String,
}

impl DeliverySlot {
    pub fn new(date: NaiveDate, time_range: impl Into<String>) -> Self {
        Self {
            date,
            time_range: time_range.into(),
        }
    }

    /// End of the window, shown as the estimated arrival.
    pub fn estimated_arrival(&self) -> &str {
        self.time_range
            .split(" - ")
            .nth(1)
            .map(str::trim)
            .filter(|end| !end.is_empty())
            .unwrap_or("8:30 PM")
    }
}

/// The checkout field that was not provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Address,
    DeliverySlot,
    PaymentMethod,
}

impl Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Address => "address",
            Self::DeliverySlot => "delivery slot",
            Self::PaymentMethod => "payment method",
        };
        f.write_str(name)
    }
}

/// Pending checkout context, filled in step by step and consumed by placing the
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub cart_id: CartId,
    pub address: Option<Address>,
    pub delivery_slot: Option<DeliverySlot>,
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutRequest {
    pub fn new(cart_id: CartId) -> Self {
        Self {
            cart_id,
            address: None,
            delivery_slot: None,
            payment_method: None,
        }
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn delivery_slot(mut self, slot: DeliverySlot) -> Self {
        self.delivery_slot = Some(slot);
        self
    }

    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// First missing field, checked in form order.
    pub fn missing_field(&self) -> Option<MissingField> {
        if self.address.is_none() {
            Some(MissingField::Address)
        } else if self.delivery_slot.is_none() {
            Some(MissingField::DeliverySlot)
        } else if self.payment_method.is_none() {
            Some(MissingField::PaymentMethod)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// One row of the tracking timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingStep {
    pub status: OrderStatus,
    pub label: &'static str,
    pub state: StepState,
    /// Only known for the confirmation step.
    pub time: Option<DateTime<Utc>>,
}

/// A placed order.
///
/// Items and address are copies taken at placement; later changes to the cart
/// or the address book never reach them. Only `status` changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub cart_id: CartId,
    pub items: Vec<LineItem>,
    pub address: Address,
    pub delivery_slot: DeliverySlot,
    pub payment_method: PaymentMethod,
    #[serde(flatten)]
    pub totals: OrderTotals,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Builds a confirmed order from a complete checkout request. Items and
    /// totals are filled in by the caller once the cart has been read.
    ///
    /// # Errors
    /// `IncompleteCheckout` naming the first missing field.
    pub fn from_checkout(
        id: OrderId,
        request: CheckoutRequest,
        created_at: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        if let Some(field) = request.missing_field() {
            return Err(OrderError::IncompleteCheckout(field));
        }
        let CheckoutRequest {
            cart_id,
            address: Some(address),
            delivery_slot: Some(delivery_slot),
            payment_method: Some(payment_method),
        } = request
        else {
            // missing_field() covers every None above
            return Err(OrderError::IncompleteCheckout(MissingField::Address));
        };

        Ok(Self {
            id,
            cart_id,
            items: Vec::new(),
            address,
            delivery_slot,
            payment_method,
            totals: OrderTotals::default(),
            created_at,
            status: OrderStatus::Confirmed,
        })
    }

    /// Moves one step along the delivery timeline.
    pub fn advance(&mut self) -> Result<OrderStatus, OrderError> {
        let next = self
            .status
            .next()
            .ok_or_else(|| OrderError::AlreadyDelivered(self.id.clone()))?;
        self.status = next;
        Ok(next)
    }

    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// The four timeline steps with their state relative to the current status.
    pub fn tracking(&self) -> Vec<TrackingStep> {
        OrderStatus::ALL
            .iter()
            .map(|&status| TrackingStep {
                status,
                label: status.label(),
                state: match status.cmp(&self.status) {
                    std::cmp::Ordering::Less => StepState::Completed,
                    std::cmp::Ordering::Equal => StepState::Active,
                    std::cmp::Ordering::Greater => StepState::Pending,
                },
                time: (status == OrderStatus::Confirmed).then_some(self.created_at),
            })
            .collect()
    }
}

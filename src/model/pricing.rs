//! Checkout pricing.
//!
//! Every figure here is derived from the item list on demand. Nothing is cached,
//! so a total can never disagree with the cart it was computed from.

use crate::model::{LineItem, Money};
use serde::{Deserialize, Serialize};

/// Delivery fee and tax rules applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Delivery is free once the subtotal is strictly above this amount.
    pub free_delivery_above: Money,
    /// Flat fee charged otherwise.
    pub delivery_fee: Money,
    /// Tax rate in basis points (500 = 5%).
    pub tax_rate_bps: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_delivery_above: Money::from_major(500),
            delivery_fee: Money::from_major(40),
            tax_rate_bps: 500,
        }
    }
}

/// Price breakdown of an order or a cart preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub delivery_charge: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderTotals {
    /// The fee waived because delivery is free, or zero when it is charged.
    pub fn delivery_savings(&self, policy: &PricingPolicy) -> Money {
        if self.delivery_charge.is_zero() {
            policy.delivery_fee
        } else {
            Money::ZERO
        }
    }
}

impl PricingPolicy {
    pub fn delivery_charge(&self, subtotal: Money) -> Money {
        if subtotal > self.free_delivery_above {
            Money::ZERO
        } else {
            self.delivery_fee
        }
    }

    pub fn tax(&self, subtotal: Money) -> Money {
        subtotal.apply_rate_bps(self.tax_rate_bps)
    }

    /// Smallest top-up that makes delivery free, or `None` once it already is.
    pub fn amount_until_free_delivery(&self, subtotal: Money) -> Option<Money> {
        if subtotal > self.free_delivery_above {
            None
        } else {
            Some(self.free_delivery_above - subtotal + Money::from_minor(1))
        }
    }

    /// Full breakdown for `items`, with the delivery charge this policy implies.
    pub fn quote(&self, items: &[LineItem]) -> OrderTotals {
        let delivery_charge = self.delivery_charge(subtotal(items));
        self.calculate_order_total(items, delivery_charge)
    }

    /// Breakdown for `items` with an explicit delivery charge.
    ///
    /// Independent of any live cart, so checkout can preview totals freely.
    pub fn calculate_order_total(&self, items: &[LineItem], delivery_charge: Money) -> OrderTotals {
        let subtotal = subtotal(items);
        let tax = self.tax(subtotal);
        OrderTotals {
            subtotal,
            delivery_charge,
            tax,
            total: total(subtotal, delivery_charge, tax),
        }
    }
}

/// Sum of `unit_price * quantity` over `items`.
pub fn subtotal(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::line_total).sum()
}

pub fn total(subtotal: Money, delivery_charge: Money, tax: Money) -> Money {
    subtotal + delivery_charge + tax
}

/// [`PricingPolicy::calculate_order_total`] under the default policy.
pub fn calculate_order_total(items: &[LineItem], delivery_charge: Money) -> OrderTotals {
    PricingPolicy::default().calculate_order_total(items, delivery_charge)
}

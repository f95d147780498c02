use crate::model::error::CartError;
use crate::model::pricing::{self, OrderTotals, PricingPolicy};
use crate::model::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Catalogue identifier of a product, as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product as shown on a listing, i.e. what gets added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub image: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id: ProductId(id.into()),
            title: title.into(),
            unit_price,
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// One product entry in the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub image: Option<String>,
}

impl LineItem {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Payload for creating a new cart.
#[derive(Debug, Clone, Default)]
pub struct CartCreate {
    /// Free-form label of whoever owns the cart (session or customer).
    pub owner: Option<String>,
}

/// Read-only view of a cart, with totals priced under the actor's policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub cart_id: CartId,
    pub items: Vec<LineItem>,
    pub total_item_count: u64,
    pub totals: OrderTotals,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A shopper's cart: the ledger of line items waiting for checkout.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Cart`](#impl-ActorEntity-for-Cart) for the actions it accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub owner: Option<String>,
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new(id: CartId, owner: Option<String>) -> Self {
        Self {
            id,
            owner,
            items: Vec::new(),
        }
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Adds `quantity` units of `product`, merging with an existing line.
    ///
    /// # Errors
    /// `InvalidQuantity` when `quantity` is zero or the merged line would
    /// exceed `u32::MAX` units; the cart is left unchanged.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> Result<LineItem, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }
        if let Some(line) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::InvalidQuantity(i64::from(quantity)))?;
            return Ok(line.clone());
        }
        let line = LineItem {
            product_id: product.id,
            title: product.title,
            unit_price: product.unit_price,
            quantity,
            image: product.image,
        };
        self.items.push(line.clone());
        Ok(line)
    }

    /// Sets the quantity of a line. Zero removes the line.
    ///
    /// Returns the updated line, or `None` when the line was removed or was
    /// never there.
    ///
    /// # Errors
    /// `InvalidQuantity` for negative values or values above `u32::MAX`; the
    /// cart is left unchanged.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<Option<LineItem>, CartError> {
        if quantity < 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        if quantity == 0 {
            self.remove_item(product_id);
            return Ok(None);
        }
        let quantity = u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity(quantity))?;
        Ok(self
            .items
            .iter_mut()
            .find(|i| &i.product_id == product_id)
            .map(|line| {
                line.quantity = quantity;
                line.clone()
            }))
    }

    /// Removes a line; absent ids are ignored.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Option<LineItem> {
        let index = self.items.iter().position(|i| &i.product_id == product_id)?;
        Some(self.items.remove(index))
    }

    /// Sum of quantities (not the number of distinct lines).
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn subtotal(&self) -> Money {
        pricing::subtotal(&self.items)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn summary(&self, policy: &PricingPolicy) -> CartSummary {
        CartSummary {
            cart_id: self.id,
            items: self.items.clone(),
            total_item_count: self.total_item_count(),
            totals: policy.quote(&self.items),
        }
    }
}

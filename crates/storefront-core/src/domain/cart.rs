//! Cart Store
//!
//! The line items of a single shopping cart. Every mutation either fully
//! applies or is rejected and leaves the cart untouched; nothing here
//! panics or returns `Err` for an ordinary constraint violation.
//!
//! Invariant after every applied mutation: `1 <= quantity <= stock`, with
//! stock read from the snapshot passed to the call. A later reload with a
//! lower stock does not clamp held quantities; see [`LineStatus::OverLimit`].
//! While no snapshot is available stock is unknown: increases are rejected
//! and no line is reported over the limit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::StockLookup;
use super::product::{Product, ProductId};

/// Why a cart mutation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("product {product_id} is out of stock")]
    OutOfStock { product_id: ProductId },

    #[error("product {product_id} is already in the cart")]
    AlreadyInCart { product_id: ProductId },

    #[error("product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },

    #[error("product {product_id} is not in the current catalog")]
    UnknownProduct { product_id: ProductId },

    #[error("stock for product {product_id} is unknown until the catalog loads")]
    StockUnknown { product_id: ProductId },

    #[error("quantity {requested} for product {product_id} is outside 1..={stock}")]
    QuantityOutOfRange {
        product_id: ProductId,
        requested: u32,
        stock: u32,
    },
}

/// Result of a cart mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The cart is unchanged
    Rejected(ConstraintViolation),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn rejection(&self) -> Option<&ConstraintViolation> {
        match self {
            Outcome::Applied => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}

/// One product's entry in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: ProductId,
    /// Captured when the product was added
    pub title: String,
    /// Captured when the product was added
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartLineItem {
    fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Held quantity compared with the current stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// More can be added
    Available { remaining: u32 },
    /// Quantity equals stock
    AtLimit { stock: u32 },
    /// Stock dropped below the held quantity after a reload
    OverLimit { stock: u32 },
    /// No catalog snapshot to compare against
    StockUnknown,
}

/// Finalized cart handed to the checkout flow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutOrder {
    pub lines: Vec<CartLineItem>,
    pub total_items: u32,
    pub total_price: f64,
}

/// Ordered line items, at most one per product
///
/// Totals are recomputed on every read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of `price * quantity`
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// Add a product not yet in the cart.
    ///
    /// The quantity is capped at `product.stock`. Rejected when the product
    /// is out of stock, already in the cart, or `quantity` is 0.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Outcome {
        let product_id = product.id;
        let outcome = if product.is_out_of_stock() {
            Outcome::Rejected(ConstraintViolation::OutOfStock { product_id })
        } else if self.contains(product_id) {
            Outcome::Rejected(ConstraintViolation::AlreadyInCart { product_id })
        } else if quantity == 0 {
            Outcome::Rejected(ConstraintViolation::QuantityOutOfRange {
                product_id,
                requested: 0,
                stock: product.stock,
            })
        } else {
            let quantity = quantity.min(product.stock);
            self.items.push(CartLineItem::new(product, quantity));
            Outcome::Applied
        };
        log_outcome("add_to_cart", product_id, outcome)
    }

    /// Set the quantity of an existing line item.
    ///
    /// `new_quantity` must lie in `1..=stock`, where stock comes from
    /// `stock` at call time; a product missing from it counts as stock 0.
    /// Rejected while stock is unknown.
    pub fn update_quantity<S>(&mut self, product_id: ProductId, new_quantity: u32, stock: &S) -> Outcome
    where
        S: StockLookup + ?Sized,
    {
        let current_stock = stock.stock_of(product_id).unwrap_or(0);
        let outcome = match self.items.iter_mut().find(|item| item.product_id == product_id) {
            None => Outcome::Rejected(ConstraintViolation::NotInCart { product_id }),
            Some(_) if !stock.stock_known() => {
                Outcome::Rejected(ConstraintViolation::StockUnknown { product_id })
            }
            Some(_) if new_quantity < 1 || new_quantity > current_stock => {
                Outcome::Rejected(ConstraintViolation::QuantityOutOfRange {
                    product_id,
                    requested: new_quantity,
                    stock: current_stock,
                })
            }
            Some(item) => {
                item.quantity = new_quantity;
                Outcome::Applied
            }
        };
        log_outcome("update_quantity", product_id, outcome)
    }

    /// Add one to an existing line item, bounded by current stock
    pub fn increase_quantity<S>(&mut self, product_id: ProductId, stock: &S) -> Outcome
    where
        S: StockLookup + ?Sized,
    {
        match self.get(product_id).map(|item| item.quantity) {
            Some(quantity) => self.update_quantity(product_id, quantity.saturating_add(1), stock),
            None => log_outcome(
                "increase_quantity",
                product_id,
                Outcome::Rejected(ConstraintViolation::NotInCart { product_id }),
            ),
        }
    }

    /// Take one away; a line item reaching zero is removed
    pub fn decrease_quantity(&mut self, product_id: ProductId) -> Outcome {
        let position = self.items.iter().position(|item| item.product_id == product_id);
        let outcome = match position {
            None => Outcome::Rejected(ConstraintViolation::NotInCart { product_id }),
            Some(index) if self.items[index].quantity <= 1 => {
                self.items.remove(index);
                Outcome::Applied
            }
            Some(index) => {
                self.items[index].quantity -= 1;
                Outcome::Applied
            }
        };
        log_outcome("decrease_quantity", product_id, outcome)
    }

    /// Drop a line item regardless of quantity
    pub fn remove_item(&mut self, product_id: ProductId) -> Outcome {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        let outcome = if self.items.len() < before {
            Outcome::Applied
        } else {
            Outcome::Rejected(ConstraintViolation::NotInCart { product_id })
        };
        log_outcome("remove_item", product_id, outcome)
    }

    /// Compare a line item's quantity against current stock
    pub fn line_status<S>(&self, product_id: ProductId, stock: &S) -> Option<LineStatus>
    where
        S: StockLookup + ?Sized,
    {
        let item = self.get(product_id)?;
        if !stock.stock_known() {
            return Some(LineStatus::StockUnknown);
        }
        let current_stock = stock.stock_of(product_id).unwrap_or(0);
        let status = if item.quantity < current_stock {
            LineStatus::Available {
                remaining: current_stock - item.quantity,
            }
        } else if item.quantity == current_stock {
            LineStatus::AtLimit { stock: current_stock }
        } else {
            LineStatus::OverLimit { stock: current_stock }
        };
        Some(status)
    }

    /// Whether `increase_quantity` would currently apply
    pub fn can_increase<S>(&self, product_id: ProductId, stock: &S) -> bool
    where
        S: StockLookup + ?Sized,
    {
        matches!(self.line_status(product_id, stock), Some(LineStatus::Available { .. }))
    }

    /// Line items whose quantity exceeds the current stock; none while
    /// stock is unknown
    pub fn over_limit<'a, S>(&'a self, stock: &'a S) -> impl Iterator<Item = &'a CartLineItem> + 'a
    where
        S: StockLookup + ?Sized,
    {
        let known = stock.stock_known();
        self.items
            .iter()
            .filter(move |item| known && item.quantity > stock.stock_of(item.product_id).unwrap_or(0))
    }

    /// Snapshot for the checkout flow. The cart itself is left as is.
    pub fn checkout(&self) -> CheckoutOrder {
        CheckoutOrder {
            lines: self.items.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }
}

fn log_outcome(operation: &str, product_id: ProductId, outcome: Outcome) -> Outcome {
    match &outcome {
        Outcome::Applied => log::debug!("[Cart] {} applied for product {}", operation, product_id),
        Outcome::Rejected(reason) => log::debug!("[Cart] {} rejected: {}", operation, reason),
    }
    outcome
}

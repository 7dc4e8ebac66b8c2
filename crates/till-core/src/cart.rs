//! # Shopping Cart
//!
//! The single-session cart: an ordered set of line items keyed by product
//! id, plus a running total kept in lockstep with every mutation.

use crate::error::{PosError, PosResult};
use crate::product::{Price, Product};
use serde::{Deserialize, Serialize};

/// Default bound on distinct products in one cart.
pub const DEFAULT_CART_CAPACITY: usize = 50;

/// A line item: a product snapshot plus a quantity.
///
/// Carts own their line items exclusively; checkout copies them verbatim
/// into the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product snapshot (copied by value)
    pub product: Product,

    /// Quantity (at least 1)
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item from a product
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product: product.clone(),
            quantity,
        }
    }

    /// Total price for this line
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// A point-in-time copy of the cart contents, used by checkout and the
/// cart view. Taking a snapshot never mutates the cart.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    /// Line items in insertion order
    pub lines: Vec<LineItem>,

    /// Sum of all line totals
    pub total: Price,
}

/// The current, unsubmitted selection of products.
///
/// Invariants:
/// - at most one line per distinct product id (re-adding merges quantities)
/// - `total()` equals the sum of `quantity x unit price` over all lines
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<LineItem>,
    total: Price,
    capacity: usize,
}

impl Cart {
    /// Create an empty cart with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CART_CAPACITY)
    }

    /// Create an empty cart bounded to `capacity` distinct products
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::new(),
            total: Price::zero(),
            capacity,
        }
    }

    /// Add `quantity` units of a product.
    ///
    /// If a line for this product id already exists its quantity is
    /// incremented; otherwise a new line is appended. Fails with
    /// [`PosError::CartCapacity`] when a new line would exceed the bound.
    ///
    /// `quantity` must be at least 1; callers validate quantities before
    /// they reach the cart.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> PosResult<()> {
        debug_assert!(quantity >= 1, "quantity must be at least 1");

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            if self.lines.len() >= self.capacity {
                return Err(PosError::CartCapacity { max: self.capacity });
            }
            self.lines.push(LineItem::from_product(product, quantity));
        }
        self.total += product.price.times(quantity);
        Ok(())
    }

    /// Take a snapshot of the current lines and total
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total,
        }
    }

    /// Check if the cart has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct product lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total unit count across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Running total
    pub fn total(&self) -> Price {
        self.total
    }

    /// Line items in insertion order
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Reset to the empty state. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.total = Price::zero();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

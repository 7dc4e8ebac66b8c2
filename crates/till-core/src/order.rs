//! # Orders and the Order Ledger
//!
//! An `Order` is the immutable record of one completed checkout. The
//! `OrderLedger` is the process-lifetime, append-only store of all orders
//! plus the counter that hands out order ids.

use crate::cart::LineItem;
use crate::error::{PosError, PosResult};
use crate::payment::PaymentKind;
use crate::product::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default bound on recorded orders per session.
pub const DEFAULT_LEDGER_CAPACITY: usize = 50;

/// An immutable record of one completed checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order id: 1-based, strictly increasing, gapless across the session
    pub id: u64,

    /// Customer name as entered (may be empty; accepted as-is)
    pub customer_name: String,

    /// Item snapshots in cart insertion order
    pub items: Vec<LineItem>,

    /// Order total at checkout time
    pub total: Price,

    /// Payment method the order settled with
    pub payment: PaymentKind,

    /// When the checkout completed
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Create an order from a cart snapshot's parts.
    pub fn new(
        id: u64,
        customer_name: impl Into<String>,
        items: Vec<LineItem>,
        total: Price,
        payment: PaymentKind,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            items,
            total,
            payment,
            placed_at: Utc::now(),
        }
    }

    /// Total unit count across all items
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// The canonical one-line record written to the order log sink.
    pub fn log_line(&self) -> String {
        format!(
            "Order ID: {} has been successfully checked out and paid using {}.",
            self.id, self.payment
        )
    }
}

/// Append-only, in-memory store of completed orders.
///
/// Owns the next-order-id counter; ids are handed out via [`next_id`] and
/// advanced as part of [`append`], so committed ids are strictly increasing
/// with no reuse.
///
/// [`next_id`]: OrderLedger::next_id
/// [`append`]: OrderLedger::append
#[derive(Debug, Clone)]
pub struct OrderLedger {
    orders: Vec<Order>,
    next_id: u64,
    capacity: usize,
}

impl OrderLedger {
    /// Create an empty ledger with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LEDGER_CAPACITY)
    }

    /// Create an empty ledger bounded to `capacity` orders
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
            capacity,
        }
    }

    /// The id the next committed order will carry
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Append a completed order.
    ///
    /// The order must carry the id obtained from [`next_id`]; the counter
    /// advances past it as part of the same append. Fails with
    /// [`PosError::LedgerCapacity`] once the configured bound is reached,
    /// leaving the ledger untouched.
    ///
    /// [`next_id`]: OrderLedger::next_id
    pub fn append(&mut self, order: Order) -> PosResult<&Order> {
        if self.orders.len() >= self.capacity {
            return Err(PosError::LedgerCapacity { max: self.capacity });
        }
        debug_assert_eq!(order.id, self.next_id, "order id must come from next_id");

        self.next_id = order.id + 1;
        self.orders.push(order);
        Ok(self.orders.last().expect("just pushed"))
    }

    /// Iterate orders in insertion (chronological) order.
    ///
    /// The iterator is lazy and restartable: call again for a fresh pass.
    pub fn all(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Number of recorded orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if no orders have been recorded
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Check if the ledger cannot accept another order
    pub fn is_full(&self) -> bool {
        self.orders.len() >= self.capacity
    }

    /// Configured maximum order count
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn order_with_id(id: u64) -> Order {
        let product = Product::new(101, "Notebook", Price::new(100.0));
        Order::new(
            id,
            "Ana",
            vec![LineItem::from_product(&product, 2)],
            Price::new(200.0),
            PaymentKind::Cash,
        )
    }

    #[test]
    fn test_ids_advance_with_append() {
        let mut ledger = OrderLedger::new();
        assert_eq!(ledger.next_id(), 1);

        ledger.append(order_with_id(1)).unwrap();
        assert_eq!(ledger.next_id(), 2);

        ledger.append(order_with_id(2)).unwrap();
        assert_eq!(ledger.next_id(), 3);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_all_is_chronological_and_restartable() {
        let mut ledger = OrderLedger::new();
        ledger.append(order_with_id(1)).unwrap();
        ledger.append(order_with_id(2)).unwrap();

        let ids: Vec<u64> = ledger.all().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);

        // A second pass starts over
        let ids_again: Vec<u64> = ledger.all().map(|o| o.id).collect();
        assert_eq!(ids_again, ids);
    }

    #[test]
    fn test_capacity_rejects_append() {
        let mut ledger = OrderLedger::with_capacity(1);
        ledger.append(order_with_id(1)).unwrap();

        let err = ledger.append(order_with_id(2)).unwrap_err();
        assert_eq!(err, PosError::LedgerCapacity { max: 1 });
        assert_eq!(ledger.len(), 1);
        // The counter did not advance for the rejected order
        assert_eq!(ledger.next_id(), 2);
    }

    #[test]
    fn test_log_line_format() {
        let order = order_with_id(7);
        assert_eq!(
            order.log_line(),
            "Order ID: 7 has been successfully checked out and paid using Cash."
        );
    }

    #[test]
    fn test_item_count() {
        assert_eq!(order_with_id(1).item_count(), 2);
    }
}

//! # Checkout Coordinator
//!
//! Orchestrates the transition from a populated cart to a committed order:
//! guard, collect customer info, select payment, finalize, commit.
//!
//! The interactive collaborator and the order-log sink sit behind the
//! [`CheckoutPrompt`] and [`OrderLog`] traits, so the coordinator can be
//! driven by a terminal, a test script, or anything else.
//!
//! ```text
//! Idle -> CollectingCustomerInfo -> SelectingPayment -> Finalizing -> Completed
//!                                      ^        |
//!                                      +--------+  (unknown label, re-prompt)
//! ```

use crate::cart::Cart;
use crate::error::{PosError, PosResult};
use crate::order::{Order, OrderLedger};
use crate::payment::PaymentKind;
use crate::product::Price;

/// Interactive collaborator that supplies checkout fields.
///
/// Returning `None` from either prompt cancels the checkout; the cart and
/// ledger are left exactly as they were.
pub trait CheckoutPrompt {
    /// Obtain the customer name. Content is accepted as-is, empty included.
    fn customer_name(&mut self) -> Option<String>;

    /// Obtain a payment label to resolve.
    fn payment_label(&mut self) -> Option<String>;

    /// Called when a label fails to resolve, before the next prompt.
    fn payment_rejected(&mut self, _label: &str) {}
}

/// External sink that receives one formatted record per committed order.
///
/// Best-effort: a failing sink is reported but never rolls back the order.
pub trait OrderLog {
    fn record(&mut self, order: &Order) -> PosResult<()>;
}

/// An [`OrderLog`] that discards every record. Useful for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOrderLog;

impl OrderLog for NullOrderLog {
    fn record(&mut self, _order: &Order) -> PosResult<()> {
        Ok(())
    }
}

/// What the caller gets back from a successful checkout.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Id of the committed order
    pub order_id: u64,

    /// Payment method the order settled with
    pub payment: PaymentKind,

    /// Order total
    pub total: Price,

    /// Whether the order log sink accepted the record
    pub logged: bool,
}

/// Drives one checkout attempt over a cart and a ledger.
pub struct CheckoutCoordinator<'a> {
    cart: &'a mut Cart,
    ledger: &'a mut OrderLedger,
}

impl<'a> CheckoutCoordinator<'a> {
    pub fn new(cart: &'a mut Cart, ledger: &'a mut OrderLedger) -> Self {
        Self { cart, ledger }
    }

    /// Run the checkout to completion.
    ///
    /// On any error the cart and ledger are unmodified. On success the
    /// order is appended to the ledger, the log sink is notified
    /// (best-effort), and the cart is cleared - the order counts as
    /// committed from the moment the append succeeds, whatever the sink
    /// does.
    pub fn run(self, prompt: &mut dyn CheckoutPrompt, log: &mut dyn OrderLog) -> PosResult<Receipt> {
        if self.cart.is_empty() {
            return Err(PosError::EmptyCart);
        }
        if self.ledger.is_full() {
            return Err(PosError::LedgerCapacity {
                max: self.ledger.capacity(),
            });
        }

        let customer_name = prompt.customer_name().ok_or(PosError::Cancelled)?;

        let payment = loop {
            let label = prompt.payment_label().ok_or(PosError::Cancelled)?;
            match PaymentKind::resolve(&label) {
                Ok(kind) => break kind,
                Err(_) => prompt.payment_rejected(&label),
            }
        };

        let snapshot = self.cart.snapshot();
        let order = Order::new(
            self.ledger.next_id(),
            customer_name,
            snapshot.lines,
            snapshot.total,
            payment,
        );
        let (order_id, total) = (order.id, order.total);

        let committed = self.ledger.append(order)?;
        let logged = match log.record(committed) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(order_id, error = %err, "order log sink failed");
                false
            }
        };
        self.cart.clear();

        Ok(Receipt {
            order_id,
            payment,
            total,
            logged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    /// Scripted prompt: pops a name and a queue of payment labels.
    struct Script {
        name: Option<String>,
        labels: Vec<Option<String>>,
        rejections: Vec<String>,
    }

    impl Script {
        fn new(name: Option<&str>, labels: &[Option<&str>]) -> Self {
            Self {
                name: name.map(String::from),
                labels: labels.iter().rev().map(|&l| l.map(String::from)).collect(),
                rejections: Vec::new(),
            }
        }
    }

    impl CheckoutPrompt for Script {
        fn customer_name(&mut self) -> Option<String> {
            self.name.take()
        }

        fn payment_label(&mut self) -> Option<String> {
            self.labels.pop().flatten()
        }

        fn payment_rejected(&mut self, label: &str) {
            self.rejections.push(label.to_string());
        }
    }

    fn stocked_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_product(&Product::new(101, "Notebook", Price::new(100.0)), 2)
            .unwrap();
        cart
    }

    #[test]
    fn test_empty_cart_is_rejected_before_any_prompt() {
        let mut cart = Cart::new();
        let mut ledger = OrderLedger::new();
        let mut prompt = Script::new(Some("Ana"), &[Some("cash")]);

        let err = CheckoutCoordinator::new(&mut cart, &mut ledger)
            .run(&mut prompt, &mut NullOrderLog)
            .unwrap_err();

        assert_eq!(err, PosError::EmptyCart);
        assert!(ledger.is_empty());
        // The prompt was never consulted
        assert_eq!(prompt.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_unknown_labels_retry_until_resolved() {
        let mut cart = stocked_cart();
        let mut ledger = OrderLedger::new();
        let mut prompt = Script::new(Some("Ana"), &[Some("bitcoin"), Some("barter"), Some("GCASH")]);

        let receipt = CheckoutCoordinator::new(&mut cart, &mut ledger)
            .run(&mut prompt, &mut NullOrderLog)
            .unwrap();

        assert_eq!(receipt.payment, PaymentKind::Gcash);
        assert_eq!(prompt.rejections, vec!["bitcoin", "barter"]);
    }

    #[test]
    fn test_cancel_during_payment_leaves_state_untouched() {
        let mut cart = stocked_cart();
        let mut ledger = OrderLedger::new();
        let mut prompt = Script::new(Some("Ana"), &[Some("bitcoin"), None]);

        let err = CheckoutCoordinator::new(&mut cart, &mut ledger)
            .run(&mut prompt, &mut NullOrderLog)
            .unwrap_err();

        assert_eq!(err, PosError::Cancelled);
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_id(), 1);
        assert_eq!(cart.item_count(), 2);
    }
}

//! # till-core
//!
//! Cart, checkout, and order-ledger core for the till-rs point-of-sale
//! simulator.
//!
//! This crate provides:
//! - `Product`, `Price`, and `Catalog` for the product catalog
//! - `Cart` and `LineItem` for the in-session shopping cart
//! - `PaymentKind` and its label resolver
//! - `Order` and `OrderLedger` for the append-only order history
//! - `CheckoutCoordinator` plus the `CheckoutPrompt` / `OrderLog` seams
//! - `PosError` for typed error handling
//!
//! The crate performs no I/O of its own: prompts and the order-log sink
//! are traits implemented by the caller (the `till` binary wires them to
//! stdin and an append-only log file).
//!
//! ## Example
//!
//! ```rust,ignore
//! use till_core::{Cart, CheckoutCoordinator, OrderLedger, Price, Product};
//!
//! let catalog_entry = Product::new(101, "Notebook", Price::new(100.0));
//!
//! let mut cart = Cart::new();
//! cart.add_product(&catalog_entry, 2)?;
//!
//! let mut ledger = OrderLedger::new();
//! let receipt = CheckoutCoordinator::new(&mut cart, &mut ledger)
//!     .run(&mut prompt, &mut order_log)?;
//!
//! assert!(cart.is_empty());
//! println!("committed order {}", receipt.order_id);
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod order;
pub mod payment;
pub mod product;

// Re-exports for convenience
pub use cart::{Cart, CartSnapshot, LineItem, DEFAULT_CART_CAPACITY};
pub use checkout::{CheckoutCoordinator, CheckoutPrompt, NullOrderLog, OrderLog, Receipt};
pub use error::{PosError, PosResult};
pub use order::{Order, OrderLedger, DEFAULT_LEDGER_CAPACITY};
pub use payment::PaymentKind;
pub use product::{Catalog, Price, Product};

//! # Tabular Rendering
//!
//! Read-only text projections of the catalog, the cart snapshot, and the
//! order history. Pure string builders so the tables are testable without
//! capturing stdout.

use std::fmt::Write;
use till_core::{Cart, CartSnapshot, Catalog, Order};

/// Render the available-products table.
pub fn catalog_table(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n========================================================");
    let _ = writeln!(out, "                 AVAILABLE PRODUCTS");
    let _ = writeln!(out, "========================================================");
    let _ = writeln!(out, "{:<12}{:<20}{:<12}", "ID", "Name", "Price");
    let _ = writeln!(out, "--------------------------------------------------------");
    for product in catalog.iter() {
        let _ = writeln!(
            out,
            "{:<12}{:<20}{:<12}",
            product.id,
            product.name,
            product.price.to_string()
        );
    }
    let _ = writeln!(out, "--------------------------------------------------------");
    out
}

/// Render the shopping-cart table with its running total.
pub fn cart_table(cart: &Cart) -> String {
    let snapshot = cart.snapshot();
    snapshot_table(&snapshot)
}

fn snapshot_table(snapshot: &CartSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=======================================");
    let _ = writeln!(out, "             SHOPPING CART");
    let _ = writeln!(out, "=======================================");
    let _ = writeln!(out, "{:<10}{:<20}{:<10}{:<10}", "ID", "Name", "Price", "Qty");
    let _ = writeln!(out, "---------------------------------------");
    for line in &snapshot.lines {
        let _ = writeln!(
            out,
            "{:<10}{:<20}{:<10}{:<10}",
            line.product.id,
            line.product.name,
            line.product.price.to_string(),
            line.quantity
        );
    }
    let _ = writeln!(out, "---------------------------------------");
    let _ = writeln!(out, "Total: {}", snapshot.total);
    let _ = writeln!(out, "=======================================");
    out
}

/// Render one order: header block plus its item table.
pub fn order_block(order: &Order) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Order ID       : {}", order.id);
    let _ = writeln!(out, "Customer Name  : {}", order.customer_name);
    let _ = writeln!(out, "Payment Method : {}", order.payment);
    let _ = writeln!(out, "Total Amount   : {}", order.total);
    let _ = writeln!(out, "Placed At      : {}", order.placed_at.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out, "---------------------------------------------");
    let _ = writeln!(
        out,
        "{:<12}{:<20}{:<10}{:<10}",
        "Product ID", "Name", "Price", "Quantity"
    );
    let _ = writeln!(out, "---------------------------------------------");
    for item in &order.items {
        let _ = writeln!(
            out,
            "{:<12}{:<20}{:<10}{:<10}",
            item.product.id,
            item.product.name,
            item.product.price.to_string(),
            item.quantity
        );
    }
    let _ = writeln!(out, "=======================================\n");
    out
}

/// Render the full order history.
pub fn order_history<'a>(orders: impl Iterator<Item = &'a Order>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=======================================");
    let _ = writeln!(out, "            ORDER DETAILS");
    let _ = writeln!(out, "=======================================");
    for order in orders {
        out.push_str(&order_block(order));
    }
    out
}

//! # Menu Loop
//!
//! The interactive session loop: view products and add to cart, view the
//! cart and check out, view the order history. Every error from the core
//! is mapped to a message and the loop continues; nothing here is fatal.

use crate::input::{self, StdinPrompt};
use crate::render;
use crate::state::Session;
use till_core::{CheckoutCoordinator, PosError};

/// Top-level menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Products,
    Cart,
    Orders,
    Exit,
}

/// Parse a menu choice, rejecting anything but a bare 1-4.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input::parse_u32(input)? {
        1 => Some(MenuChoice::Products),
        2 => Some(MenuChoice::Cart),
        3 => Some(MenuChoice::Orders),
        4 => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Run the session loop until the user exits (or input ends).
pub fn run(session: &mut Session) -> anyhow::Result<()> {
    loop {
        println!("\n[1] View Products\n[2] View Shopping Cart\n[3] View Orders\n[4] Exit");
        let Some(line) = input::read_line("Enter your choice: ")? else {
            break;
        };
        match parse_choice(&line) {
            Some(MenuChoice::Products) => products_flow(session)?,
            Some(MenuChoice::Cart) => cart_flow(session)?,
            Some(MenuChoice::Orders) => view_orders(session),
            Some(MenuChoice::Exit) => break,
            None => println!("Invalid choice! Please enter 1, 2, 3, or 4 only."),
        }
    }
    Ok(())
}

/// Show the catalog, then add products to the cart until the user stops.
fn products_flow(session: &mut Session) -> anyhow::Result<()> {
    print!("{}", render::catalog_table(&session.catalog));

    loop {
        let Some(id) = prompt_product_id(session)? else {
            return Ok(());
        };
        let Some(quantity) = prompt_quantity()? else {
            return Ok(());
        };

        // The id was validated against the catalog just above
        if let Some(product) = session.catalog.get(id) {
            match session.cart.add_product(product, quantity) {
                Ok(()) => println!("Product added successfully!"),
                Err(err @ PosError::CartCapacity { .. }) => {
                    println!("{err}");
                    return Ok(());
                }
                Err(err) => println!("{err}"),
            }
        }

        match input::prompt_yes_no("Add another product? (Y/N): ")? {
            Some(true) => continue,
            _ => return Ok(()),
        }
    }
}

/// Ask for a product id until it matches a catalog entry. `None` on EOF.
fn prompt_product_id(session: &Session) -> anyhow::Result<Option<u32>> {
    loop {
        let Some(line) = input::read_line("Enter product ID to add to cart: ")? else {
            return Ok(None);
        };
        match input::parse_u32(&line) {
            Some(id) if session.catalog.get(id).is_some() => return Ok(Some(id)),
            Some(_) => println!("Invalid product ID! Try again."),
            None => println!("Invalid input! Enter numeric product ID only."),
        }
    }
}

/// Ask for a positive quantity. `None` on EOF.
fn prompt_quantity() -> anyhow::Result<Option<u32>> {
    loop {
        let Some(line) = input::read_line("Enter quantity: ")? else {
            return Ok(None);
        };
        match input::parse_u32(&line) {
            Some(quantity) if quantity >= 1 => return Ok(Some(quantity)),
            _ => println!("Invalid quantity! Enter positive whole numbers only."),
        }
    }
}

/// Show the cart and offer checkout.
fn cart_flow(session: &mut Session) -> anyhow::Result<()> {
    if session.cart.is_empty() {
        println!("Your cart is empty!");
        return Ok(());
    }

    print!("{}", render::cart_table(&session.cart));

    match input::prompt_yes_no("Do you want to proceed to checkout? (Y/N): ")? {
        Some(true) => checkout(session),
        _ => Ok(()),
    }
}

/// Run the checkout coordinator against stdin and the order-log file.
fn checkout(session: &mut Session) -> anyhow::Result<()> {
    let result = CheckoutCoordinator::new(&mut session.cart, &mut session.ledger)
        .run(&mut StdinPrompt, &mut session.order_log);

    match result {
        Ok(receipt) => {
            println!(
                "Order ID: {} has been successfully checked out and paid using {}.",
                receipt.order_id, receipt.payment
            );
            println!("You have successfully checked out the products!");
            if !receipt.logged {
                eprintln!("Error opening log file!");
            }
        }
        Err(PosError::EmptyCart) => {
            println!("Your cart is empty. Add products before checkout.");
        }
        Err(PosError::Cancelled) => {
            println!("Checkout cancelled.");
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

/// Show every recorded order.
fn view_orders(session: &Session) {
    if session.ledger.is_empty() {
        println!("No orders placed yet!");
        return;
    }
    print!("{}", render::order_history(session.ledger.all()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Products));
        assert_eq!(parse_choice(" 4 "), Some(MenuChoice::Exit));
        assert_eq!(parse_choice("5"), None);
        assert_eq!(parse_choice("1x"), None);
        assert_eq!(parse_choice("one"), None);
        assert_eq!(parse_choice(""), None);
    }
}

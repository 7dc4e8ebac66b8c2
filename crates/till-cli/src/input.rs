//! # Terminal Input
//!
//! Line-oriented stdin helpers and the stdin-backed checkout prompt.
//! All parsing returns `Option`/`Result` values; malformed input never
//! panics and never aborts the session loop.

use std::io::{self, BufRead, Write};
use till_core::{CheckoutPrompt, PaymentKind};

/// Print a prompt and read one line from stdin.
///
/// Returns `None` on end of input (Ctrl-D), which callers treat as
/// "leave this flow".
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Parse a whole non-negative number, rejecting trailing garbage.
pub fn parse_u32(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Parse a strict Y/N answer (case-insensitive).
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim() {
        "y" | "Y" => Some(true),
        "n" | "N" => Some(false),
        _ => None,
    }
}

/// Keep asking until the answer is Y or N. `None` on end of input.
pub fn prompt_yes_no(prompt: &str) -> io::Result<Option<bool>> {
    loop {
        let Some(line) = read_line(prompt)? else {
            return Ok(None);
        };
        match parse_yes_no(&line) {
            Some(answer) => return Ok(Some(answer)),
            None => println!("Enter only Y or N."),
        }
    }
}

/// Checkout prompt wired to stdin, mirroring the checkout form text.
pub struct StdinPrompt;

impl CheckoutPrompt for StdinPrompt {
    fn customer_name(&mut self) -> Option<String> {
        println!("\n=======================================");
        println!("            CHECKOUT FORM");
        println!("=======================================");
        read_line("Enter customer name  : ").ok().flatten()
    }

    fn payment_label(&mut self) -> Option<String> {
        let methods = PaymentKind::ALL.map(|k| k.as_str()).join(", ");
        read_line(&format!("Enter payment method ({methods}): "))
            .ok()
            .flatten()
    }

    fn payment_rejected(&mut self, _label: &str) {
        println!("Invalid payment method!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u32_strictness() {
        assert_eq!(parse_u32("3"), Some(3));
        assert_eq!(parse_u32("  12 "), Some(12));
        assert_eq!(parse_u32("12x"), None);
        assert_eq!(parse_u32("-1"), None);
        assert_eq!(parse_u32("1.5"), None);
        assert_eq!(parse_u32(""), None);
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("N"), Some(false));
        assert_eq!(parse_yes_no("yes"), None);
        assert_eq!(parse_yes_no(""), None);
    }
}

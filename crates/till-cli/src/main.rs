//! # till
//!
//! Interactive point-of-sale simulator.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at a catalog file and order log
//! export TILL_CATALOG=config/products.toml
//! export TILL_ORDER_LOG=order_log.txt
//!
//! till
//! ```

use till_cli::{
    menu,
    state::{AppConfig, Session},
};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let config = AppConfig::from_env();
    let mut session = Session::new(&config)?;

    info!("Products loaded: {}", session.catalog.len());
    info!("Order log: {}", session.order_log.path().display());

    menu::run(&mut session)?;

    info!("Session ended with {} orders", session.ledger.len());
    Ok(())
}

fn print_banner() {
    println!(
        r#"
  till-rs
  ----------------------------
  Point-of-sale simulator
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}

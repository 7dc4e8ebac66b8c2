//! # Session State
//!
//! Configuration and the single-session state: the catalog, the cart, the
//! order ledger, and the order-log sink. Constructed once at startup and
//! passed explicitly to the menu loop so tests can build isolated sessions.

use crate::logfile::FileOrderLog;
use till_core::{Cart, Catalog, OrderLedger, Price, Product};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Explicit catalog file path (otherwise the search paths are tried)
    pub catalog_path: Option<String>,
    /// Order log file path
    pub order_log_path: String,
    /// Maximum distinct products per cart
    pub cart_capacity: usize,
    /// Maximum orders per session
    pub ledger_capacity: usize,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            catalog_path: std::env::var("TILL_CATALOG").ok(),
            order_log_path: std::env::var("TILL_ORDER_LOG")
                .unwrap_or_else(|_| "order_log.txt".to_string()),
            cart_capacity: std::env::var("TILL_CART_CAP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(till_core::DEFAULT_CART_CAPACITY),
            ledger_capacity: std::env::var("TILL_LEDGER_CAP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(till_core::DEFAULT_LEDGER_CAPACITY),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The single active session: one cart, one ledger, one log sink.
pub struct Session {
    pub catalog: Catalog,
    pub cart: Cart,
    pub ledger: OrderLedger,
    pub order_log: FileOrderLog,
}

impl Session {
    /// Build a session from configuration
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let catalog = load_catalog(config)?;

        Ok(Self {
            catalog,
            cart: Cart::with_capacity(config.cart_capacity),
            ledger: OrderLedger::with_capacity(config.ledger_capacity),
            order_log: FileOrderLog::new(&config.order_log_path),
        })
    }
}

/// Load the product catalog from config, falling back to the built-in seed
fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    if let Some(path) = &config.catalog_path {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?;
        let catalog = Catalog::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
        tracing::info!("Loaded {} products from {}", catalog.len(), path);
        return Ok(catalog);
    }

    let search_paths = [
        "config/products.toml",
        "../config/products.toml",
        "../../config/products.toml",
    ];

    for path in search_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = Catalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} products from {}", catalog.len(), path);
            return Ok(catalog);
        }
    }

    tracing::warn!("No product catalog found, using built-in seed");
    Ok(seed_catalog())
}

/// The built-in stationery catalog used when no config file is present
pub fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Product::new(101, "Notebook", Price::new(100.0)));
    catalog.add(Product::new(102, "Pen", Price::new(20.0)));
    catalog.add(Product::new(103, "Pencil", Price::new(15.0)));
    catalog.add(Product::new(104, "Eraser", Price::new(10.0)));
    catalog.add(Product::new(105, "Clip", Price::new(10.0)));
    catalog
}

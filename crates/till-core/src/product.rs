//! # Product Types
//!
//! Product and catalog types for till-rs.
//! Catalogs are loaded once at startup from `config/products.toml`.

use serde::{Deserialize, Serialize};

/// Monetary amount in centavos.
///
/// Prices are stored as an integer count of the smallest currency unit to
/// keep arithmetic exact; decimal values only appear at the serialization
/// and display boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Price {
    centavos: i64,
}

impl Price {
    /// Create a price from a decimal peso amount (rounded to the centavo).
    pub fn new(amount: f64) -> Self {
        Self {
            centavos: (amount * 100.0).round() as i64,
        }
    }

    /// Create a price directly from centavos.
    pub fn from_centavos(centavos: i64) -> Self {
        Self { centavos }
    }

    /// Amount in centavos.
    pub fn centavos(&self) -> i64 {
        self.centavos
    }

    /// Decimal peso amount.
    pub fn as_decimal(&self) -> f64 {
        self.centavos as f64 / 100.0
    }

    /// Price of `quantity` units at this unit price.
    pub fn times(&self, quantity: u32) -> Price {
        Price {
            centavos: self.centavos * i64::from(quantity),
        }
    }

    /// Zero amount.
    pub fn zero() -> Self {
        Self { centavos: 0 }
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Price::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.as_decimal()
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price {
            centavos: self.centavos + rhs.centavos,
        }
    }
}

impl std::ops::AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.centavos += rhs.centavos;
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\u{20b1}{:.2}", self.as_decimal())
    }
}

/// A product in the catalog.
///
/// Immutable after startup. Cart lines and orders embed a value copy, so
/// a historical order is never affected by later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (positive, unique within the catalog)
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unit price (non-negative)
    pub price: Price,
}

impl Product {
    /// Create a new product.
    pub fn new(id: u32, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Product catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Find a product by ID
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate products in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_conversion() {
        assert_eq!(Price::new(100.0).centavos(), 10000);
        assert_eq!(Price::new(10.99).centavos(), 1099);
        assert_eq!(Price::from_centavos(1099).as_decimal(), 10.99);
    }

    #[test]
    fn test_price_arithmetic() {
        let unit = Price::new(20.0);
        assert_eq!(unit.times(3), Price::new(60.0));

        let total: Price = [Price::new(1.5), Price::new(2.25)].into_iter().sum();
        assert_eq!(total, Price::new(3.75));
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::new(100.0).to_string(), "\u{20b1}100.00");
        assert_eq!(Price::new(10.5).to_string(), "\u{20b1}10.50");
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = Catalog::new();
        catalog.add(Product::new(101, "Notebook", Price::new(100.0)));
        catalog.add(Product::new(102, "Pen", Price::new(20.0)));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(101).map(|p| p.name.as_str()), Some("Notebook"));
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn test_catalog_from_toml() {
        let catalog = Catalog::from_toml(
            r#"
            [[products]]
            id = 101
            name = "Notebook"
            price = 100.0

            [[products]]
            id = 102
            name = "Pen"
            price = 20.0
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(102).unwrap().price, Price::new(20.0));
    }
}

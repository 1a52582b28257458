use std::sync::Arc;

use serde::{Deserialize, Serialize};

use bookshop_core::ValueObject;

/// Fields every product carries, whatever its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    name: String,
    description: String,
    /// Unit price. Not validated: zero and negative prices are kept as given.
    price: f64,
}

impl ProductInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl ValueObject for ProductInfo {}

/// Something the shop sells.
///
/// `Product` is a capability, not a type you can build: each product kind is
/// its own struct holding a [`ProductInfo`] and supplying its own rendering.
/// Callers work with `Arc<dyn Product>` and never switch on the concrete kind.
///
/// `Product` itself cannot be constructed:
///
/// ```compile_fail
/// use bookshop_products::Product;
///
/// let product: Box<dyn Product> = Box::new(Product);
/// ```
///
/// and the shared fields alone do not make a product either:
///
/// ```compile_fail
/// use bookshop_products::{Product, ProductInfo};
///
/// let product: Box<dyn Product> = Box::new(ProductInfo::new("Krzyżacy", "Lektura szkolna", 99.99));
/// ```
pub trait Product: core::fmt::Debug + Send + Sync {
    fn info(&self) -> &ProductInfo;

    fn info_mut(&mut self) -> &mut ProductInfo;

    /// Human-readable, kind-specific description of the product.
    fn render(&self) -> String;

    /// Copy this product into a fresh, unshared allocation.
    fn clone_arc(&self) -> Arc<dyn Product>;

    fn name(&self) -> &str {
        self.info().name()
    }

    fn description(&self) -> &str {
        self.info().description()
    }

    fn price(&self) -> f64 {
        self.info().price()
    }
}

impl core::fmt::Display for dyn Product + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

use std::sync::Arc;

use bookshop_parties::Customer;
use bookshop_products::Product;

/// An order: `quantity` units of one product for one customer.
///
/// The customer and product are shared with whoever built the order; many
/// orders may point at the same `Customer`. [`Clone`] is the exception: it
/// copies the whole graph, so a cloned order owns its own customer and product.
#[derive(Debug)]
pub struct Order {
    customer: Arc<Customer>,
    product: Arc<dyn Product>,
    /// Not validated: zero and negative quantities are kept as given.
    quantity: i64,
}

impl Order {
    pub fn new(customer: Arc<Customer>, product: Arc<dyn Product>, quantity: i64) -> Self {
        Self {
            customer,
            product,
            quantity,
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn product(&self) -> &dyn Product {
        self.product.as_ref()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// Mutable access to the customer, available only while no other order
    /// (or caller) shares it.
    pub fn customer_mut(&mut self) -> Option<&mut Customer> {
        Arc::get_mut(&mut self.customer)
    }

    /// Mutable access to the product, available only while no other order
    /// (or caller) shares it.
    pub fn product_mut(&mut self) -> Option<&mut (dyn Product + 'static)> {
        Arc::get_mut(&mut self.product)
    }

    pub fn shares_customer_with(&self, other: &Order) -> bool {
        Arc::ptr_eq(&self.customer, &other.customer)
    }

    pub fn shares_product_with(&self, other: &Order) -> bool {
        Arc::ptr_eq(&self.product, &other.product)
    }
}

impl Clone for Order {
    /// Deep copy: the returned order shares nothing with `self`.
    fn clone(&self) -> Self {
        tracing::debug!(
            customer = %self.customer.full_name(),
            product = %self.product.name(),
            quantity = self.quantity,
            "deep-cloning order"
        );

        Self {
            customer: Arc::new(Customer::clone(&self.customer)),
            product: self.product.clone_arc(),
            quantity: self.quantity,
        }
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order: {} x {}, Customer: {} {}",
            self.quantity,
            self.product.render(),
            self.customer.first_name(),
            self.customer.surname()
        )
    }
}

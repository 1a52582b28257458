//! Sales Orders domain module.
//!
//! Orders tie a customer to a product and a quantity. Pure data (no IO, no
//! storage).

pub mod order;
pub mod pricing;

pub use order::Order;
pub use pricing::{cmp_by_price, price_key, sort_by_price};

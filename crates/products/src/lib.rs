//! Products domain module.
//!
//! The [`Product`] capability shared by everything the shop sells, and the
//! concrete product kinds. Pure data (no IO, no storage).

pub mod book;
pub mod product;

pub use book::Book;
pub use product::{Product, ProductInfo};

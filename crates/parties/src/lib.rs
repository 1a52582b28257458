//! Parties domain module.
//!
//! Customers who place orders. Pure data (no IO, no storage).

pub mod customer;

pub use customer::Customer;

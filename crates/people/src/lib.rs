//! People domain module.
//!
//! Persons with an age derived from a [`bookshop_core::Clock`] and a total
//! ordering by age, surname and first name.

pub mod person;

pub use person::Person;

//! `bookshop-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod clock;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use value_object::ValueObject;

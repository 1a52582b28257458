//! Demonstration of the bookshop domain: builds the sample customers, books,
//! orders and people, then prints, sorts and clones them.

pub mod config;
pub mod scenario;

pub use config::{ConfigError, DemoConfig};
pub use scenario::{Catalog, run};

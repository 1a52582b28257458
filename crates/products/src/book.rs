use std::sync::Arc;

use serde::{Deserialize, Serialize};

use bookshop_core::ValueObject;

use crate::product::{Product, ProductInfo};

/// A book: a [`Product`] with an author and a publication year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(flatten)]
    info: ProductInfo,
    author: String,
    publication_year: i32,
}

impl Book {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        author: impl Into<String>,
        publication_year: i32,
    ) -> Self {
        Self {
            info: ProductInfo::new(name, description, price),
            author: author.into(),
            publication_year,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }
}

impl ValueObject for Book {}

impl Product for Book {
    fn info(&self) -> &ProductInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ProductInfo {
        &mut self.info
    }

    fn render(&self) -> String {
        format!(
            "Book: {}, author: {}, publication year: {}, price: {}",
            self.info.name(),
            self.author,
            self.publication_year,
            self.info.price()
        )
    }

    fn clone_arc(&self) -> Arc<dyn Product> {
        Arc::new(self.clone())
    }
}

impl core::fmt::Display for Book {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

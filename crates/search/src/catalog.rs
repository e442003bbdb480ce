//! In-memory product catalog
//!
//! A [`SearchClient`] backed by a plain product list. Used by integration
//! tests and local demos in place of the real product API; matching is a
//! case-insensitive substring check on the product name, which is how the
//! storefront search box behaves.

use async_trait::async_trait;

use crate::client::{SearchClient, SearchError};
use crate::product::Product;

/// In-memory catalog of products.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Build a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self { products })
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl SearchClient for InMemoryCatalog {
    async fn search(&self, query: &str) -> Result<Vec<Product>, SearchError> {
        let needle = query.to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

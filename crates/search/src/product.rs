//! Product model as surfaced in search results

use serde::{Deserialize, Serialize};

/// A product entry in a search result set.
///
/// Mirrors the fields the search dropdown renders; the full product document
/// lives behind the product-detail page and is not this crate's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable product identifier.
    pub id: String,
    /// Display name shown in the dropdown row.
    pub name: String,
    /// Thumbnail image URL.
    pub thumbnail_url: String,
    /// Unit price in the store currency.
    pub unit_price: f64,
}

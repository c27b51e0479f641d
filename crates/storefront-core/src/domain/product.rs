//! Product Entity
//!
//! A purchasable product from one catalog load. Immutable once built.

use serde::{Deserialize, Serialize};

/// Product identifier, unique within one catalog load
pub type ProductId = u32;

/// Titles longer than this are shortened on cards
const SHORT_TITLE_CHARS: usize = 12;

/// Review summary attached by the catalog service
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u32,
}

/// Product record as served by the catalog API (carries no stock)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// A product with its stock attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the load
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Price in the source currency (USD)
    pub price: f64,
    pub category: String,
    /// Image URI
    pub image: String,
    pub rating: Option<Rating>,
    /// Maximum purchasable quantity, fixed for the lifetime of the load
    pub stock: u32,
}

impl Product {
    /// Attach a stock value to a wire record
    pub fn from_record(record: ProductRecord, stock: u32) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            price: record.price,
            category: record.category,
            image: record.image,
            rating: record.rating,
            stock,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Title cut to 12 characters with a trailing `...` when longer
    pub fn short_title(&self) -> String {
        if self.title.chars().count() > SHORT_TITLE_CHARS {
            let head: String = self.title.chars().take(SHORT_TITLE_CHARS).collect();
            format!("{}...", head)
        } else {
            self.title.clone()
        }
    }

    /// Number of reviews, 0 when the service sent no rating
    pub fn review_count(&self) -> u32 {
        self.rating.map(|r| r.count).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: ProductId, title: &str) -> ProductRecord {
        ProductRecord {
            id,
            title: title.to_string(),
            price: 9.5,
            description: "desc".to_string(),
            category: "misc".to_string(),
            image: "https://img.example/1.png".to_string(),
            rating: Some(Rating { rate: 4.1, count: 120 }),
        }
    }

    #[test]
    fn test_from_record_attaches_stock() {
        let product = Product::from_record(record(7, "Mug"), 5);
        assert_eq!(product.id, 7);
        assert_eq!(product.stock, 5);
        assert_eq!(product.review_count(), 120);
        assert!(!product.is_out_of_stock());
    }

    #[test]
    fn test_short_title() {
        let long = Product::from_record(record(1, "Fjallraven Backpack"), 1);
        assert_eq!(long.short_title(), "Fjallraven B...");

        let exact = Product::from_record(record(2, "Twelve chars"), 1);
        assert_eq!(exact.short_title(), "Twelve chars");
    }

    #[test]
    fn test_short_title_counts_characters_not_bytes() {
        let product = Product::from_record(record(3, "Sépatu Kulit Asli"), 1);
        assert_eq!(product.short_title(), "Sépatu Kulit...");
    }

    #[test]
    fn test_record_decodes_without_optional_fields() {
        let json = r#"{"id": 4, "title": "Hat", "price": 3.25}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 4);
        assert!(record.rating.is_none());
        assert!(record.description.is_empty());
    }
}

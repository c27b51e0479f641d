//! Catalog Loader
//!
//! Fetches the product list once per load, attaches stock to every
//! product and hands back a complete snapshot or an error. Partial
//! results are never exposed. No retries; reloading is manual.

mod http_source;
mod traits;

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Catalog, Product, ProductRecord};
use crate::error::FetchError;

pub use http_source::{decode_records, HttpCatalogSource};
pub use traits::CatalogSource;

/// How stock is assigned to fetched products
///
/// The catalog service carries no inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockPolicy {
    /// Every product gets the same stock
    Uniform(u32),
}

impl Default for StockPolicy {
    fn default() -> Self {
        StockPolicy::Uniform(5)
    }
}

impl StockPolicy {
    pub fn stock_for(&self, _record: &ProductRecord) -> u32 {
        match self {
            StockPolicy::Uniform(stock) => *stock,
        }
    }
}

/// Produces catalog snapshots from a source
///
/// Clones share the source and the generation counter.
pub struct CatalogLoader<S> {
    source: Arc<S>,
    policy: StockPolicy,
    generation: Arc<AtomicU64>,
}

impl<S> Clone for CatalogLoader<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            policy: self.policy,
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S, policy: StockPolicy) -> Self {
        Self {
            source: Arc::new(source),
            policy,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch and build a fresh snapshot
    pub async fn load(&self) -> Result<Catalog, FetchError> {
        log::info!("[Catalog] Loading products");
        let result = match self.source.fetch_records().await {
            Ok(records) => build_products(records, self.policy),
            Err(err) => Err(err),
        };

        match result {
            Ok(products) => {
                let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
                log::info!(
                    "[Catalog] Loaded {} products (generation {})",
                    products.len(),
                    generation
                );
                Ok(Catalog::new(generation, products))
            }
            Err(err) => {
                log::error!("[Catalog] Load failed: {}", err);
                Err(err)
            }
        }
    }
}

/// Attach stock and reject payloads that break the product model
fn build_products(records: Vec<ProductRecord>, policy: StockPolicy) -> Result<Vec<Product>, FetchError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut products = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(FetchError::Malformed(format!("duplicate product id {}", record.id)));
        }
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(FetchError::Malformed(format!(
                "product {} has invalid price {}",
                record.id, record.price
            )));
        }
        let stock = policy.stock_for(&record);
        products.push(Product::from_record(record, stock));
    }
    Ok(products)
}

//! Catalog Snapshot
//!
//! One immutable product list per successful load, and the load state
//! consumers gate on before running the view pipeline.

use std::sync::Arc;

use super::product::{Product, ProductId};
use crate::error::FetchError;

/// Read-only stock lookup against a product list
pub trait StockLookup {
    /// Current stock for a product, `None` when the product is unknown
    fn stock_of(&self, product_id: ProductId) -> Option<u32>;

    /// Whether stock numbers are known at all; an unknown product still
    /// counts as stock 0 only when this holds
    fn stock_known(&self) -> bool {
        true
    }
}

impl StockLookup for [Product] {
    fn stock_of(&self, product_id: ProductId) -> Option<u32> {
        self.iter().find(|p| p.id == product_id).map(|p| p.stock)
    }
}

/// Products of one load generation
///
/// Cloning is cheap; the product list is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    generation: u64,
    products: Arc<Vec<Product>>,
}

impl Catalog {
    pub fn new(generation: u64, products: Vec<Product>) -> Self {
        Self {
            generation,
            products: Arc::new(products),
        }
    }

    /// Load counter, increasing with every successful fetch
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl StockLookup for Catalog {
    fn stock_of(&self, product_id: ProductId) -> Option<u32> {
        self.get(product_id).map(|p| p.stock)
    }
}

/// Load state of the catalog as seen by consumers
///
/// An empty `Ready` catalog means "no products exist"; a failed fetch is
/// always `Unavailable`, never an empty list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// Fetch in flight; the view pipeline must not run
    #[default]
    Loading,
    Ready(Catalog),
    Unavailable(FetchError),
}

impl CatalogState {
    pub fn from_result(result: Result<Catalog, FetchError>) -> Self {
        match result {
            Ok(catalog) => CatalogState::Ready(catalog),
            Err(err) => CatalogState::Unavailable(err),
        }
    }

    /// The snapshot, only when loading finished successfully
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            CatalogState::Unavailable(err) => Some(err),
            _ => None,
        }
    }
}

/// Stock lookup against the load state; stock is unknown until `Ready`
impl StockLookup for CatalogState {
    fn stock_of(&self, product_id: ProductId) -> Option<u32> {
        self.catalog().and_then(|c| c.stock_of(product_id))
    }

    fn stock_known(&self) -> bool {
        self.catalog().is_some()
    }
}

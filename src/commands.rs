//! Catalog Commands
//!
//! Frontend bindings to the product catalog service.

use storefront_core::{CatalogLoader, CatalogState, HttpCatalogSource, StorefrontConfig};

/// Loader used by the app; clones share the generation counter
pub type StoreLoader = CatalogLoader<HttpCatalogSource>;

pub fn new_loader(config: &StorefrontConfig) -> StoreLoader {
    CatalogLoader::new(HttpCatalogSource::new(config.catalog_url.clone()), config.stock_policy)
}

/// Fetch a fresh snapshot. Failures become `Unavailable`, never an empty catalog.
pub async fn fetch_catalog(loader: &StoreLoader) -> CatalogState {
    CatalogState::from_result(loader.load().await)
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The cart is only mutated through the helpers below, which always read
//! the latest catalog snapshot at call time.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{Cart, CatalogState, ConstraintViolation, Outcome, ProductId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest catalog snapshot, or why there is none
    pub catalog: CatalogState,
    /// Shopping cart line items
    pub cart: Cart,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the catalog load state
pub fn store_set_catalog(store: &AppStore, state: CatalogState) {
    *store.catalog().write() = state;
}

/// Cloning is cheap: the product list is shared
fn latest_catalog(store: &AppStore) -> CatalogState {
    store.catalog().get_untracked()
}

/// Add a product from the current catalog to the cart
pub fn store_add_to_cart(store: &AppStore, product_id: ProductId, quantity: u32) -> Outcome {
    let catalog = latest_catalog(store);
    match catalog.catalog().and_then(|c| c.get(product_id)) {
        Some(product) => store.cart().write().add_to_cart(product, quantity),
        None => Outcome::Rejected(ConstraintViolation::UnknownProduct { product_id }),
    }
}

/// Add one to a line item, bounded by current stock
pub fn store_increase_quantity(store: &AppStore, product_id: ProductId) -> Outcome {
    let catalog = latest_catalog(store);
    store.cart().write().increase_quantity(product_id, &catalog)
}

/// Set a line item's quantity, bounded by current stock
pub fn store_update_quantity(store: &AppStore, product_id: ProductId, quantity: u32) -> Outcome {
    let catalog = latest_catalog(store);
    store.cart().write().update_quantity(product_id, quantity, &catalog)
}

/// Take one away from a line item (removes it at zero)
pub fn store_decrease_quantity(store: &AppStore, product_id: ProductId) -> Outcome {
    store.cart().write().decrease_quantity(product_id)
}

/// Remove a line item from the cart
pub fn store_remove_item(store: &AppStore, product_id: ProductId) -> Outcome {
    store.cart().write().remove_item(product_id)
}

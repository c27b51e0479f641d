//! Storefront Core
//!
//! Cart and catalog state for the Toko storefront:
//! - domain: products, catalog snapshots, the cart state machine and the view pipeline
//! - loader: fetching catalog snapshots from the product API
//! - config: storefront-wide settings

pub mod config;
pub mod domain;
pub mod error;
pub mod loader;

pub use config::StorefrontConfig;
pub use domain::{
    filter_products, monthly_revenue, paginate, sort_products, view_page, Cart, CartLineItem,
    Catalog, CatalogPage, CatalogState, CatalogViewState, CheckoutOrder, ConstraintViolation,
    CurrencyFormat, DashboardStats, LineStatus, MonthlyRevenue, Outcome, PageContext, Product,
    ProductId, ProductRecord, Rating, SearchScope, SortKey, StockLookup,
};
pub use error::{ConfigError, FetchError};
pub use loader::{CatalogLoader, CatalogSource, HttpCatalogSource, StockPolicy};

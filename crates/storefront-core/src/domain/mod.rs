//! Domain Layer
//!
//! Products, catalog snapshots, the cart state machine and the catalog
//! view pipeline. Nothing in here touches the network or the UI.

mod cart;
mod catalog;
mod catalog_view;
mod currency;
mod product;
mod sales;

pub use cart::{Cart, CartLineItem, CheckoutOrder, ConstraintViolation, LineStatus, Outcome};
pub use catalog::{Catalog, CatalogState, StockLookup};
pub use catalog_view::{
    filter_products, paginate, sort_products, view_page, CatalogPage, CatalogViewState,
    PageContext, SearchScope, SortKey,
};
pub use currency::CurrencyFormat;
pub use product::{Product, ProductId, ProductRecord, Rating};
pub use sales::{monthly_revenue, DashboardStats, MonthlyRevenue, MONTHS};

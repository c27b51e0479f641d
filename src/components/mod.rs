//! UI Components
//!
//! Leptos components for the storefront pages.

mod admin_dashboard;
mod cart_drawer;
mod catalog_gate;
mod catalog_toolbar;
mod checkout_page;
mod header;
mod home_page;
mod page_nav;
mod product_card;
mod product_list;

pub use admin_dashboard::AdminDashboard;
pub use cart_drawer::CartDrawer;
pub use catalog_gate::CatalogGate;
pub use catalog_toolbar::CatalogToolbar;
pub use checkout_page::CheckoutPage;
pub use header::Header;
pub use home_page::HomePage;
pub use page_nav::PageNav;
pub use product_card::ProductCard;
pub use product_list::ProductListPage;

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use storefront_core::CurrencyFormat;

/// Top-level pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Products,
    Checkout,
    Admin,
}

impl Page {
    /// Pages listed in the header
    pub const NAV: [Page; 3] = [Page::Home, Page::Products, Page::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Products => "Products",
            Page::Checkout => "Checkout",
            Page::Admin => "Admin Dashboard",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the catalog - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the catalog - write
    set_reload_trigger: WriteSignal<u32>,
    /// Page being shown - read
    pub current_page: ReadSignal<Page>,
    /// Page being shown - write
    set_current_page: WriteSignal<Page>,
    /// Display currency
    currency: StoredValue<CurrencyFormat>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_page: (ReadSignal<Page>, WriteSignal<Page>),
        currency: CurrencyFormat,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_page: current_page.0,
            set_current_page: current_page.1,
            currency: StoredValue::new(currency),
        }
    }

    /// Trigger a catalog reload
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, page: Page) {
        self.set_current_page.set(page);
    }

    /// Render a source-currency price for display
    pub fn format_price(&self, amount: f64) -> String {
        self.currency.with_value(|currency| currency.format(amount))
    }
}

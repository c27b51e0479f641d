//! Toko Storefront App
//!
//! Root component: provides the store and context, loads the catalog and
//! switches between pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use storefront_core::{CatalogState, StorefrontConfig};

use crate::commands;
use crate::components::{AdminDashboard, CheckoutPage, Header, HomePage, ProductListPage};
use crate::context::{AppContext, Page};
use crate::store::{store_set_catalog, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = StorefrontConfig::default();

    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_page, set_current_page) = signal(Page::Home);
    let loader = StoredValue::new(commands::new_loader(&config));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (current_page, set_current_page),
        config.currency.clone(),
    ));

    // Load the catalog on mount and on every manual reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::info!("[APP] Loading catalog, trigger={}", trigger);
        store_set_catalog(&store, CatalogState::Loading);
        let loader = loader.get_value();
        spawn_local(async move {
            let state = commands::fetch_catalog(&loader).await;
            store_set_catalog(&store, state);
        });
    });

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || match current_page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Products => view! { <ProductListPage /> }.into_any(),
                    Page::Checkout => view! { <CheckoutPage /> }.into_any(),
                    Page::Admin => view! { <AdminDashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}

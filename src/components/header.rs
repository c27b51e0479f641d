//! Header Component
//!
//! Brand, page tabs and the cart badge.

use leptos::prelude::*;

use crate::context::{AppContext, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let total_items = move || store.cart().read().total_items();

    view! {
        <header class="app-header">
            <span class="brand" on:click=move |_| ctx.navigate(Page::Home)>
                "Toko Serba Ada"
            </span>
            <nav class="page-tabs">
                {Page::NAV
                    .iter()
                    .map(|&page| {
                        let tab_class = move || {
                            if ctx.current_page.get() == page { "page-tab active" } else { "page-tab" }
                        };
                        view! {
                            <button class=tab_class on:click=move |_| ctx.navigate(page)>
                                {page.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="cart-badge" on:click=move |_| ctx.navigate(Page::Checkout)>
                "🛒"
                <span class="badge-count">{total_items}</span>
            </button>
        </header>
    }
}

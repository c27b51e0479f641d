//! Product List Page Component
//!
//! Searchable, sortable, paginated product grid with the floating cart
//! button and drawer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{view_page, CatalogViewState, PageContext};

use crate::components::{CartDrawer, CatalogGate, CatalogToolbar, PageNav, ProductCard};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Delay before the cart button reappears after the drawer closes
const BADGE_RESHOW_MS: u32 = 500;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let view_state = RwSignal::new(CatalogViewState::default());
    let (drawer_open, set_drawer_open) = signal(false);
    let (badge_visible, set_badge_visible) = signal(true);

    let page = Memo::new(move |_| {
        let state = view_state.get();
        store
            .catalog()
            .read()
            .catalog()
            .map(|catalog| view_page(catalog.products(), &state, PageContext::Catalog))
    });
    let total_pages = Signal::derive(move || page.with(|p| p.as_ref().map_or(0, |p| p.total_pages)));

    // Hide the floating button while the drawer is open
    Effect::new(move |was_open: Option<bool>| {
        let open = drawer_open.get();
        if open {
            set_badge_visible.set(false);
        } else if was_open == Some(true) {
            spawn_local(async move {
                TimeoutFuture::new(BADGE_RESHOW_MS).await;
                set_badge_visible.set(true);
            });
        }
        open
    });

    let badge_text = move || {
        let cart = store.cart().read();
        format!("{} Item | {}", cart.len(), ctx.format_price(cart.total_price()))
    };

    view! {
        <section class="product-list-page">
            <CatalogToolbar context=PageContext::Catalog view_state=view_state />
            <CatalogGate>
                <div class="product-grid">
                    <For
                        each=move || page.get().map(|p| p.items).unwrap_or_default()
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>
                <Show when=move || page.with(|p| p.as_ref().is_some_and(|p| p.total_matches == 0))>
                    <p class="no-results">"Tidak ada produk yang cocok"</p>
                </Show>
                <PageNav view_state=view_state total_pages=total_pages />
            </CatalogGate>
            <Show when=move || badge_visible.get()>
                <button class="floating-cart" on:click=move |_| set_drawer_open.set(true)>
                    "🛒 "
                    {badge_text}
                </button>
            </Show>
            <CartDrawer open=drawer_open set_open=set_drawer_open />
        </section>
    }
}

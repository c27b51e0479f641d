//! Home Page Component
//!
//! Hero banner and a preview of the cheapest products.

use leptos::prelude::*;
use storefront_core::{view_page, CatalogViewState, PageContext};

use crate::components::{CatalogGate, ProductCard};
use crate::context::{AppContext, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Home has no controls; the default view state is fixed
    let featured = Memo::new(move |_| {
        store
            .catalog()
            .read()
            .catalog()
            .map(|catalog| view_page(catalog.products(), &CatalogViewState::default(), PageContext::Home).items)
            .unwrap_or_default()
    });

    view! {
        <section class="hero">
            <h1>"Selamat Datang di Toko Serba Ada"</h1>
            <p>"Temukan produk terbaik dengan harga terbaik"</p>
            <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Products)>
                "Belanja Sekarang"
            </button>
        </section>
        <section class="featured">
            <div class="section-header">
                <h2>"Produk Pilihan"</h2>
                <button class="outline-btn" on:click=move |_| ctx.navigate(Page::Products)>
                    "Lihat Semua Produk"
                </button>
            </div>
            <CatalogGate>
                <div class="product-grid">
                    <For
                        each=move || featured.get()
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product is_home=true /> }
                    />
                </div>
            </CatalogGate>
        </section>
    }
}

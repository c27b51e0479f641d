//! Product Card Component
//!
//! One product tile with price and add-to-cart button.

use leptos::prelude::*;
use storefront_core::Product;

use crate::context::AppContext;
use crate::store::{store_add_to_cart, use_app_store, AppStateStoreFields};

/// Product tile. Home previews hide price and button.
#[component]
pub fn ProductCard(product: Product, #[prop(optional)] is_home: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = product.id;
    let out_of_stock = product.is_out_of_stock();
    let in_cart = move || store.cart().read().contains(id);

    let on_add = move |_| {
        if !out_of_stock {
            let _ = store_add_to_cart(&store, id, 1);
        }
    };

    let button_label = move || {
        if out_of_stock {
            "Stok habis"
        } else if in_cart() {
            "Di keranjang"
        } else {
            "Tambah Keranjang"
        }
    };

    let purchase = (!is_home).then(|| {
        view! {
            <div class="product-purchase">
                <div class="product-price">{ctx.format_price(product.price)}</div>
                <button
                    class="add-to-cart-btn"
                    disabled=move || out_of_stock || in_cart()
                    on:click=on_add
                >
                    {button_label}
                </button>
            </div>
        }
    });

    view! {
        <div class="product-card" class:out-of-stock=out_of_stock>
            <div
                class="product-image"
                style=format!("background-image: url({});", product.image)
            ></div>
            <div class="product-body">
                <div class="product-title" title=product.title.clone()>
                    {product.short_title()}
                </div>
                {purchase}
            </div>
        </div>
    }
}

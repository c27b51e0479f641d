//! Catalog Gate Component
//!
//! Renders its children only once the catalog is ready; shows a loading
//! or unavailable panel (with reload) otherwise.

use leptos::prelude::*;
use storefront_core::CatalogState;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CatalogGate(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    move || match store.catalog().get() {
        CatalogState::Loading => view! { <div class="loading">"Loading products..."</div> }.into_any(),
        CatalogState::Unavailable(err) => view! {
            <div class="catalog-unavailable">
                <p>"Produk tidak dapat dimuat."</p>
                <p class="error-detail">{err.to_string()}</p>
                <button class="reload-btn" on:click=move |_| ctx.reload()>"Muat ulang"</button>
            </div>
        }
        .into_any(),
        CatalogState::Ready(_) => children().into_any(),
    }
}

//! Catalog Toolbar Component
//!
//! Search box (applied on Enter) and sort selector.

use leptos::prelude::*;
use storefront_core::{CatalogViewState, PageContext, SortKey};

#[component]
pub fn CatalogToolbar(context: PageContext, view_state: RwSignal<CatalogViewState>) -> impl IntoView {
    let sort_options = context.sort_options();

    let on_search = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            let search = event_target_value(&ev);
            view_state.update(|state| state.set_search(search));
        }
    };

    let on_sort = move |ev: web_sys::Event| {
        let sort = SortKey::from_str(&event_target_value(&ev));
        view_state.update(|state| state.set_sort(sort));
    };

    let sort_select = (sort_options.len() > 1).then(|| {
        view! {
            <label class="sort-select">
                "Sort by "
                <select
                    on:change=on_sort
                    prop:value=move || view_state.with(|state| state.sort.as_str())
                >
                    {sort_options
                        .iter()
                        .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                        .collect_view()}
                </select>
            </label>
        }
    });

    view! {
        <div class="catalog-toolbar">
            <input
                type="text"
                class="search-input"
                placeholder="Search products"
                on:keydown=on_search
            />
            {sort_select}
        </div>
    }
}

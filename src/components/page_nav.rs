//! Page Navigation Component
//!
//! Page buttons under a product list; hidden for a single page.

use leptos::prelude::*;
use storefront_core::CatalogViewState;

use crate::pagination::{page_links, PageLink};

#[component]
pub fn PageNav(
    view_state: RwSignal<CatalogViewState>,
    #[prop(into)] total_pages: Signal<usize>,
) -> impl IntoView {
    let current = move || view_state.with(|state| state.page);
    let go_to = move |page: usize| view_state.update(|state| state.page = page);

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="page-nav">
                <button
                    class="page-step"
                    disabled=move || current() <= 1
                    on:click=move |_| go_to(current() - 1)
                >
                    "‹"
                </button>
                {move || {
                    page_links(current(), total_pages.get())
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Page(page) => {
                                let class = if page == current() { "page-btn active" } else { "page-btn" };
                                view! {
                                    <button class=class on:click=move |_| go_to(page)>
                                        {page}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageLink::Gap => view! { <span class="page-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="page-step"
                    disabled=move || current() >= total_pages.get()
                    on:click=move |_| go_to(current() + 1)
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}

//! Cart Drawer Component
//!
//! Slide-out cart with per-line quantity controls and the running total.

use leptos::prelude::*;
use storefront_core::{CartLineItem, LineStatus};

use crate::context::{AppContext, Page};
use crate::store::{
    store_decrease_quantity, store_increase_quantity, store_remove_item, use_app_store,
    AppStateStoreFields,
};

/// One cart line with − / + / delete
#[component]
fn CartLine(line: CartLineItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let id = line.product_id;

    // Clone the snapshot first so the cart read does not overlap it
    let status = move || {
        let catalog = store.catalog().get();
        store.cart().read().line_status(id, &catalog)
    };
    let can_increase = move || {
        let catalog = store.catalog().get();
        store.cart().read().can_increase(id, &catalog)
    };

    let price_line = format!(
        "{} × {} = {}",
        ctx.format_price(line.price),
        line.quantity,
        ctx.format_price(line.subtotal())
    );

    view! {
        <div class="cart-line">
            <div class="cart-line-info">
                <div class="cart-line-title">{line.title.clone()}</div>
                <div class="cart-line-price">{price_line}</div>
                {move || match status() {
                    Some(LineStatus::AtLimit { stock }) => view! {
                        <span class="stock-note">{format!("Stok tersisa: {}", stock)}</span>
                    }
                    .into_any(),
                    Some(LineStatus::OverLimit { stock }) => view! {
                        <span class="stock-warning">
                            {format!("Melebihi stok: hanya {} tersedia", stock)}
                        </span>
                    }
                    .into_any(),
                    Some(LineStatus::StockUnknown) => view! {
                        <span class="stock-note">"Stok belum diketahui"</span>
                    }
                    .into_any(),
                    _ => view! { <span></span> }.into_any(),
                }}
            </div>
            <div class="cart-line-actions">
                <button
                    class="qty-btn"
                    on:click=move |_| {
                        let _ = store_decrease_quantity(&store, id);
                    }
                >
                    "−"
                </button>
                <span class="cart-line-qty">{line.quantity}</span>
                <button
                    class="qty-btn"
                    disabled=move || !can_increase()
                    on:click=move |_| {
                        let _ = store_increase_quantity(&store, id);
                    }
                >
                    "+"
                </button>
                <button
                    class="delete-btn"
                    on:click=move |_| {
                        let _ = store_remove_item(&store, id);
                    }
                >
                    "×"
                </button>
            </div>
        </div>
    }
}

/// Cart drawer, shown while `open` is set
#[component]
pub fn CartDrawer(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let lines = move || store.cart().read().items().to_vec();
    let is_empty = move || store.cart().read().is_empty();
    let total = move || ctx.format_price(store.cart().read().total_price());

    view! {
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| set_open.set(false)></div>
            <aside class="cart-drawer">
                <div class="cart-drawer-header">
                    <h2>"Keranjang Belanja"</h2>
                    <button class="close-btn" on:click=move |_| set_open.set(false)>"×"</button>
                </div>
                <Show when=is_empty>
                    <p class="cart-empty">"Keranjang masih kosong"</p>
                </Show>
                <div class="cart-lines">
                    // Keyed by quantity too so a changed line re-renders
                    <For
                        each=lines
                        key=|line| (line.product_id, line.quantity)
                        children=move |line| view! { <CartLine line=line /> }
                    />
                </div>
                <div class="cart-total">
                    <span>"Total"</span>
                    <span>{total}</span>
                </div>
                <button
                    class="checkout-btn"
                    on:click=move |_| {
                        set_open.set(false);
                        ctx.navigate(Page::Checkout);
                    }
                >
                    "Lihat Pembayaran"
                </button>
            </aside>
        </Show>
    }
}

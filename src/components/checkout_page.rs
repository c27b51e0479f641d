//! Checkout Page Component
//!
//! Order summary handed to the external payment flow.

use leptos::prelude::*;
use storefront_core::{CheckoutOrder, StockLookup};

use crate::context::{AppContext, Page};
use crate::store::{store_update_quantity, use_app_store, AppStateStoreFields};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let order = Memo::new(move |_| store.cart().read().checkout());
    let has_over_limit = move || {
        let catalog = store.catalog().get();
        let over_limit = store.cart().read().over_limit(&catalog).next().is_some();
        over_limit
    };
    let stock_unknown = move || store.catalog().with(|catalog| !catalog.stock_known());

    let on_pay = move |_| {
        let order: CheckoutOrder = order.get_untracked();
        match serde_json::to_string(&order) {
            Ok(payload) => log::info!("[Checkout] Handing off order: {}", payload),
            Err(e) => log::error!("[Checkout] Could not serialize order: {}", e),
        }
    };

    view! {
        <section class="checkout-page">
            <h1>"Pembayaran"</h1>
            <Show
                when=move || order.with(|o| !o.lines.is_empty())
                fallback=move || view! {
                    <p class="cart-empty">"Keranjang masih kosong"</p>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Products)>
                        "Belanja Sekarang"
                    </button>
                }
            >
                <table class="checkout-table">
                    <thead>
                        <tr>
                            <th>"Produk"</th>
                            <th>"Harga"</th>
                            <th>"Jumlah"</th>
                            <th>"Subtotal"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || order.get().lines
                            key=|line| (line.product_id, line.quantity)
                            children=move |line| {
                                let id = line.product_id;
                                let quantity = line.quantity;
                                view! {
                                    <tr>
                                        <td>{line.title.clone()}</td>
                                        <td>{ctx.format_price(line.price)}</td>
                                        <td>
                                            <input
                                                type="number"
                                                min="1"
                                                class="qty-input"
                                                prop:value=quantity.to_string()
                                                on:change=move |ev| {
                                                    let applied = event_target_value(&ev)
                                                        .parse::<u32>()
                                                        .map(|requested| store_update_quantity(&store, id, requested).is_applied())
                                                        .unwrap_or(false);
                                                    // Rejected: show the held quantity again
                                                    if !applied {
                                                        event_target::<web_sys::HtmlInputElement>(&ev)
                                                            .set_value(&quantity.to_string());
                                                    }
                                                }
                                            />
                                        </td>
                                        <td>{ctx.format_price(line.subtotal())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=has_over_limit>
                    <p class="stock-warning">"Beberapa produk melebihi stok yang tersedia."</p>
                </Show>
                <Show when=stock_unknown>
                    <p class="stock-note">"Stok belum diketahui sampai katalog selesai dimuat."</p>
                </Show>
                <div class="checkout-summary">
                    <span>{move || format!("{} item", order.with(|o| o.total_items))}</span>
                    <span class="checkout-total">{move || ctx.format_price(order.with(|o| o.total_price))}</span>
                </div>
                <button class="primary-btn" disabled=has_over_limit on:click=on_pay>
                    "Bayar Sekarang"
                </button>
            </Show>
        </section>
    }
}

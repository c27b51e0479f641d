//! Admin Dashboard Component
//!
//! Headline figures, estimated monthly revenue and the product table.

use leptos::prelude::*;
use storefront_core::{monthly_revenue, view_page, CatalogViewState, DashboardStats, MonthlyRevenue, PageContext};

use crate::components::{CatalogGate, CatalogToolbar, PageNav};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Bar chart of revenue per month, scaled to the largest bucket
#[component]
fn RevenueBars(revenue: Vec<MonthlyRevenue>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let max = revenue.iter().map(|m| m.revenue).fold(0.0_f64, f64::max);

    view! {
        <div class="revenue-bars">
            {revenue
                .into_iter()
                .map(|month| {
                    let percent = if max > 0.0 { month.revenue / max * 100.0 } else { 0.0 };
                    view! {
                        <div class="revenue-bar" title=ctx.format_price(month.revenue)>
                            <div class="revenue-fill" style=format!("height: {:.1}%;", percent)></div>
                            <span class="revenue-month">{month.month}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let view_state = RwSignal::new(CatalogViewState::default());

    let stats = Memo::new(move |_| {
        store
            .catalog()
            .read()
            .catalog()
            .map(|catalog| DashboardStats::from_products(catalog.products()))
    });
    let revenue = Memo::new(move |_| {
        store
            .catalog()
            .read()
            .catalog()
            .map(|catalog| monthly_revenue(catalog.products()))
            .unwrap_or_default()
    });
    let page = Memo::new(move |_| {
        let state = view_state.get();
        store
            .catalog()
            .read()
            .catalog()
            .map(|catalog| view_page(catalog.products(), &state, PageContext::Admin))
    });
    let total_pages = Signal::derive(move || page.with(|p| p.as_ref().map_or(0, |p| p.total_pages)));

    view! {
        <section class="admin-dashboard">
            <CatalogGate>
                <div class="stat-cards">
                    <div class="stat-card">
                        <h3>"Total Products"</h3>
                        <p>{move || stats.get().map_or(0, |s| s.total_products)}</p>
                    </div>
                    <div class="stat-card">
                        <h3>"Catalog Value"</h3>
                        <p>{move || ctx.format_price(stats.get().map_or(0.0, |s| s.catalog_value))}</p>
                    </div>
                </div>
                <div class="revenue-panel">
                    <h3>"Monthly Revenue"</h3>
                    {move || view! { <RevenueBars revenue=revenue.get() /> }}
                </div>
                <CatalogToolbar context=PageContext::Admin view_state=view_state />
                <table class="product-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Title"</th>
                            <th>"Category"</th>
                            <th>"Price"</th>
                            <th>"Stock"</th>
                            <th>"Reviews"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page.get().map(|p| p.items).unwrap_or_default()
                            key=|product| product.id
                            children=move |product| {
                                view! {
                                    <tr>
                                        <td>{product.id}</td>
                                        <td>{product.title.clone()}</td>
                                        <td>{product.category.clone()}</td>
                                        <td>{ctx.format_price(product.price)}</td>
                                        <td>{product.stock}</td>
                                        <td>{product.review_count()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <PageNav view_state=view_state total_pages=total_pages />
            </CatalogGate>
            <details class="recent-log">
                <summary>"Recent log"</summary>
                <pre>{move || {
                    // refresh after each catalog load
                    let _ = store.catalog().get();
                    rolling_logger::recent().join("\n")
                }}</pre>
            </details>
        </section>
    }
}

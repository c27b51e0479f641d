//! Admin Dashboard Figures
//!
//! Aggregates over a catalog snapshot for the admin dashboard.

use serde::Serialize;

use super::product::Product;

/// Revenue chart buckets; a product lands in bucket `id % 6`
pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    pub revenue: f64,
}

/// Estimated revenue per month: `price * review count` per product
pub fn monthly_revenue(products: &[Product]) -> Vec<MonthlyRevenue> {
    let mut buckets = [0.0_f64; MONTHS.len()];
    for product in products {
        let index = product.id as usize % MONTHS.len();
        buckets[index] += product.price * product.review_count() as f64;
    }
    MONTHS
        .iter()
        .zip(buckets)
        .map(|(&month, revenue)| MonthlyRevenue { month, revenue })
        .collect()
}

/// Headline numbers for the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_products: usize,
    /// Sum of list prices
    pub catalog_value: f64,
}

impl DashboardStats {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            total_products: products.len(),
            catalog_value: products.iter().map(|p| p.price).sum(),
        }
    }
}

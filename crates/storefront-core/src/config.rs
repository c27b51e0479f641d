//! Storefront Configuration
//!
//! Settings shared by every page. Per-page sizes and sort options are
//! constants on [`PageContext`](crate::domain::PageContext).

use serde::{Deserialize, Serialize};

use crate::domain::CurrencyFormat;
use crate::error::ConfigError;
use crate::loader::StockPolicy;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Product list endpoint
    pub catalog_url: String,
    pub stock_policy: StockPolicy,
    pub currency: CurrencyFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            stock_policy: StockPolicy::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

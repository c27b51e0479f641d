//! HTTP Catalog Source
//!
//! One GET against the product API, decoded as a JSON array of records.

use async_trait::async_trait;

use super::traits::CatalogSource;
use crate::domain::ProductRecord;
use crate::error::FetchError;

/// Catalog source backed by the product API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_records(&self) -> Result<Vec<ProductRecord>, FetchError> {
        let response = reqwest::get(&self.url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        decode_records(&body)
    }
}

/// Parse a response body into product records
pub fn decode_records(body: &str) -> Result<Vec<ProductRecord>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

//! Loader Layer - Core Traits
//!
//! Abstract interface to the remote product catalog.
//! Implementations can use HTTP, fixtures, etc.

use async_trait::async_trait;

use crate::domain::ProductRecord;
use crate::error::FetchError;

/// Read-only access to the product catalog service
///
/// Futures are not required to be `Send`: loads run on the browser's
/// single-threaded executor.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch every product record in one request
    async fn fetch_records(&self) -> Result<Vec<ProductRecord>, FetchError>;
}

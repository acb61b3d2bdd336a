//! Remote list fetching.
//!
//! `ListFetcher` is the seam between list views and the network: one call,
//! one page. The production implementation is [`StoreClient`]; tests swap in
//! in-memory fetchers.

mod gate;
mod query;

pub use gate::{FetchGate, FetchPermit};
pub use query::{FilterState, PageQuery, DEFAULT_PER_PAGE};

use async_trait::async_trait;

use crate::api::{RequestError, StoreClient};
use crate::model::{Page, Product};

/// Fetches one page of records for a query.
///
/// No retry, no caching: a failed call surfaces its `RequestError` and the
/// caller decides what to show.
#[async_trait]
pub trait ListFetcher: Send + Sync + 'static {
    type Item: Clone + PartialEq + Send + Sync + 'static;

    async fn fetch(&self, query: &PageQuery) -> Result<Page<Self::Item>, RequestError>;
}

#[async_trait]
impl ListFetcher for StoreClient {
    type Item = Product;

    async fn fetch(&self, query: &PageQuery) -> Result<Page<Product>, RequestError> {
        self.products(query).await
    }
}

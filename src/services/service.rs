use crate::error::TransportFailure;
use crate::query::SearchQuery;
use crate::results::SearchResultPage;
use std::future::Future;
use std::pin::Pin;

/// Future returned by [`ImageService::search`]
pub type SearchFuture =
    Pin<Box<dyn Future<Output = Result<SearchResultPage, TransportFailure>> + Send + 'static>>;

// Define a base trait for image services
#[cfg_attr(test, mockall::automock)]
pub trait ImageService: Send + Sync {
    /// Fetch one page of results for the query.
    ///
    /// The returned future owns everything it needs so it can run on a
    /// spawned task independently of the service handle.
    fn search(&self, query: SearchQuery) -> SearchFuture;
}

use serde::{Deserialize, Serialize};

use crate::error::TransportFailure;

/// One photo returned by the image service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Opaque identifier assigned by the service
    pub id: String,

    /// Rendering-sized asset URL
    pub display_url: String,

    /// URL that downloads the original asset
    pub download_url: String,

    /// Description of the photo (may be empty)
    pub alt_text: String,

    /// Dominant color, usually a hex string
    pub dominant_color: String,

    pub width: u32,
    pub height: u32,
}

/// One page of results, in the order the service returned them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultPage {
    /// Page number this result set answers
    pub page: u32,

    /// Total number of pages available for the query
    pub total_pages: u32,

    /// Images in relevance order
    pub results: Vec<ImageResult>,
}

impl SearchResultPage {
    /// Create a new result page
    pub fn new(page: u32, total_pages: u32, results: Vec<ImageResult>) -> Self {
        Self {
            page,
            total_pages,
            results,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether this page lies beyond the last page of a non-empty result set
    pub fn is_past_end(&self) -> bool {
        self.total_pages > 0 && self.page > self.total_pages
    }

    /// Reject envelopes that cannot describe a real page.
    ///
    /// `total_pages == 0` requires an empty result set. A page past the last
    /// one is valid only when empty; the service answers that way when a
    /// stricter filter shrinks the result set under the current page.
    pub fn check_invariants(&self) -> Result<(), TransportFailure> {
        if self.total_pages == 0 && !self.results.is_empty() {
            return Err(TransportFailure::MalformedPayload(format!(
                "{} results reported with total_pages = 0",
                self.results.len()
            )));
        }
        if self.is_past_end() && !self.results.is_empty() {
            return Err(TransportFailure::MalformedPayload(format!(
                "{} results on page {}, past total_pages = {}",
                self.results.len(),
                self.page,
                self.total_pages
            )));
        }
        Ok(())
    }
}

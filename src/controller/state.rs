use crate::query::{SafeSearch, SearchQuery};
use crate::results::{ImageResult, SearchResultPage};

/// Everything the search view displays.
///
/// Only the controller mutates this; callers get a read-only reference.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub(crate) query: Option<SearchQuery>,
    pub(crate) safe_search: SafeSearch,
    pub(crate) current_page: Option<SearchResultPage>,
    pub(crate) loading: bool,
    pub(crate) last_error: Option<String>,
    pub(crate) keep_results_while_loading: bool,
}

impl ViewState {
    /// The most recently issued query, if any search has been submitted
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// Filter level applied to the next request
    pub fn safe_search(&self) -> SafeSearch {
        self.safe_search
    }

    /// Last successfully received result page
    pub fn current_page(&self) -> Option<&SearchResultPage> {
        self.current_page.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Description of the last failed fetch, cleared by the next success.
    /// Diagnostic only.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Page number of the current query (0 before any search)
    pub fn page(&self) -> u32 {
        self.query.as_ref().map_or(0, |q| q.page())
    }

    /// Total pages reported for the displayed results
    pub fn total_pages(&self) -> u32 {
        self.current_page.as_ref().map_or(0, |p| p.total_pages)
    }

    /// Images to draw right now.
    ///
    /// While a request is in flight the grid shows a loading indicator
    /// instead of the previous results, unless configured to keep them.
    pub fn visible_images(&self) -> &[ImageResult] {
        if self.loading && !self.keep_results_while_loading {
            return &[];
        }
        self.current_page
            .as_ref()
            .map_or(&[][..], |p| p.results.as_slice())
    }

    /// Whether the "previous" control should be shown
    pub fn has_previous(&self) -> bool {
        !self.loading && self.page() > 1
    }

    /// Whether the "next" control should be shown
    pub fn has_next(&self) -> bool {
        !self.loading && self.page() < self.total_pages()
    }
}

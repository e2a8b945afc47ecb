use crate::controller::state::ViewState;
use crate::error::{TransportFailure, ValidationError};
use crate::query::{PageStep, SafeSearch, SearchQuery, validate_query_text};
use crate::results::SearchResultPage;

/// A request the controller wants sent to the image service.
///
/// `generation` identifies the request; only the completion carrying the
/// latest generation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: SearchQuery,
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
    /// Results replaced the displayed page
    Applied,
    /// The fetch failed; previous results are kept
    Failed,
    /// A newer request was issued since; the outcome was dropped
    Stale,
}

/// Options fixed for the lifetime of a controller
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerOptions {
    /// Initial content filter level
    pub safe_search: SafeSearch,

    /// Keep showing the previous results while a request is in flight
    pub keep_results_while_loading: bool,
}

/// State machine behind the search view.
///
/// Operations never perform I/O. Each returns the [`FetchRequest`] to issue,
/// if any, and the caller reports the outcome back through [`complete`].
///
/// [`complete`]: SearchController::complete
#[derive(Debug, Default)]
pub struct SearchController {
    state: ViewState,
    generation: u64,
}

impl SearchController {
    pub fn new(options: ControllerOptions) -> Self {
        Self {
            state: ViewState {
                safe_search: options.safe_search,
                keep_results_while_loading: options.keep_results_while_loading,
                ..ViewState::default()
            },
            generation: 0,
        }
    }

    /// Read-only snapshot of the view
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Generation of the most recently issued request (0 if none)
    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    /// Start a new search from user-entered text.
    ///
    /// Resets to page 1 and keeps the current filter level. Invalid text
    /// leaves the state untouched.
    pub fn submit_query(&mut self, raw_text: &str) -> Result<Option<FetchRequest>, ValidationError> {
        if let Err(e) = validate_query_text(raw_text) {
            ::log::debug!("Rejected search text: {}", e);
            return Err(e);
        }

        let query = SearchQuery::new(raw_text, self.state.safe_search);
        ::log::info!("New search: '{}'", query.text());
        self.state.query = Some(query.clone());
        Ok(self.fetch(query))
    }

    /// Move one page back or forward.
    ///
    /// Steps are bounded by `total_pages` of the displayed results and are
    /// ignored while a request is loading, since the page count of the
    /// pending query is not known yet. After a failed search the bound still
    /// comes from the last results shown. Stepping back from a page past the
    /// end lands on the last page.
    pub fn go_to_page(&mut self, step: PageStep) -> Option<FetchRequest> {
        let query = self.state.query.as_ref()?;

        if self.state.loading {
            ::log::debug!("Ignoring {:?} while a request is loading", step);
            return None;
        }

        let total_pages = i64::from(self.state.total_pages());
        let current = i64::from(query.page());
        let target = match step {
            PageStep::Previous if total_pages > 0 && current > total_pages => total_pages,
            _ => current + step.delta(),
        };
        if target < 1 || target > total_pages {
            ::log::debug!(
                "Ignoring {:?} from page {} of {}",
                step,
                query.page(),
                self.state.total_pages()
            );
            return None;
        }

        let query = query.with_page(target as u32);
        self.state.query = Some(query.clone());
        self.fetch(query)
    }

    /// Switch the content filter.
    ///
    /// The page number is kept. Without a search to repeat only the level
    /// is remembered.
    pub fn set_safe_search(&mut self, enabled: bool) -> Option<FetchRequest> {
        let level = SafeSearch::from_enabled(enabled);
        self.state.safe_search = level;

        let query = self.state.query.as_ref()?.with_safe_search(level);
        self.state.query = Some(query.clone());
        self.fetch(query)
    }

    fn fetch(&mut self, query: SearchQuery) -> Option<FetchRequest> {
        if query.text().is_empty() {
            return None;
        }

        self.generation += 1;
        self.state.loading = true;
        ::log::debug!(
            "Issuing request #{} for '{}' page {} ({})",
            self.generation,
            query.text(),
            query.page(),
            query.safe_search().as_str()
        );

        Some(FetchRequest {
            generation: self.generation,
            query,
        })
    }

    /// Reconcile the outcome of a request.
    ///
    /// Only the latest request may change the view. Failures keep the
    /// previous results and are reported through the log alone.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<SearchResultPage, TransportFailure>,
    ) -> FetchDisposition {
        if generation != self.generation {
            ::log::debug!(
                "Dropping response #{} (latest is #{})",
                generation,
                self.generation
            );
            return FetchDisposition::Stale;
        }

        self.state.loading = false;
        match outcome {
            Ok(page) => {
                ::log::info!(
                    "Showing {} images (page {} of {})",
                    page.len(),
                    page.page,
                    page.total_pages
                );
                self.state.current_page = Some(page);
                self.state.last_error = None;
                FetchDisposition::Applied
            }
            Err(e) => {
                ::log::warn!("Search request #{} failed: {}", generation, e);
                self.state.last_error = Some(e.to_string());
                FetchDisposition::Failed
            }
        }
    }
}

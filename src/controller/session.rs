use crate::controller::machine::{
    ControllerOptions, FetchDisposition, FetchRequest, SearchController,
};
use crate::controller::state::ViewState;
use crate::error::{TransportFailure, ValidationError};
use crate::query::PageStep;
use crate::results::SearchResultPage;
use crate::services::ImageService;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result of one request, tagged with the generation that issued it
#[derive(Debug)]
struct FetchOutcome {
    generation: u64,
    result: Result<SearchResultPage, TransportFailure>,
}

/// Reports the outcome of one request exactly once.
///
/// If the request task ends without sending (the service panicked or the
/// task was cancelled), dropping the guard reports a failure instead, so the
/// in-flight count and the loading flag are always released.
struct OutcomeGuard {
    generation: u64,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    sent: bool,
}

impl OutcomeGuard {
    fn send(mut self, result: Result<SearchResultPage, TransportFailure>) {
        self.sent = true;
        self.deliver(result);
    }

    fn deliver(&self, result: Result<SearchResultPage, TransportFailure>) {
        let generation = self.generation;
        if self.outcome_tx.send(FetchOutcome { generation, result }).is_err() {
            ::log::debug!("Session closed before request #{} finished", generation);
        }
    }
}

impl Drop for OutcomeGuard {
    fn drop(&mut self) {
        if self.sent {
            return;
        }
        ::log::warn!("Request #{} ended without a response", self.generation);
        self.deliver(Err(TransportFailure::Network(
            "request task ended without a response".to_string(),
        )));
    }
}

/// Drives a [`SearchController`] against a live image service.
///
/// Every request runs on its own tokio task and reports back over a channel,
/// so several requests may overlap. Completions are reconciled by generation:
/// whichever request was issued last decides what is displayed, regardless
/// of the order responses arrive in.
pub struct Session<S> {
    controller: SearchController,
    service: Arc<S>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    in_flight: usize,
}

impl<S> Session<S>
where
    S: ImageService + 'static,
{
    /// Create a session over the given service
    pub fn new(service: S, options: ControllerOptions) -> Self {
        Self::with_shared_service(Arc::new(service), options)
    }

    /// Create a session over a service handle shared with other owners
    pub fn with_shared_service(service: Arc<S>, options: ControllerOptions) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            controller: SearchController::new(options),
            service,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
        }
    }

    /// Read-only snapshot of the view
    pub fn view(&self) -> &ViewState {
        self.controller.state()
    }

    /// Number of spawned requests whose outcome has not been processed yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Validate and submit new search text
    pub fn submit_query(&mut self, raw_text: &str) -> Result<(), ValidationError> {
        let request = self.controller.submit_query(raw_text)?;
        self.dispatch(request);
        Ok(())
    }

    /// Move one page back or forward
    pub fn go_to_page(&mut self, step: PageStep) {
        let request = self.controller.go_to_page(step);
        self.dispatch(request);
    }

    /// Toggle the content filter
    pub fn set_safe_search(&mut self, enabled: bool) {
        let request = self.controller.set_safe_search(enabled);
        self.dispatch(request);
    }

    fn dispatch(&mut self, request: Option<FetchRequest>) {
        let Some(FetchRequest { generation, query }) = request else {
            return;
        };

        let service = Arc::clone(&self.service);
        let guard = OutcomeGuard {
            generation,
            outcome_tx: self.outcome_tx.clone(),
            sent: false,
        };
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = service.search(query).await;
            guard.send(result);
        });
    }

    /// Wait for the next request to finish and apply it.
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn next_outcome(&mut self) -> Option<FetchDisposition> {
        if self.in_flight == 0 {
            return None;
        }

        let outcome = self.outcome_rx.recv().await?;
        self.in_flight -= 1;
        Some(self.controller.complete(outcome.generation, outcome.result))
    }

    /// Process completions until no request is in flight
    pub async fn settle(&mut self) {
        while self.next_outcome().await.is_some() {}
    }
}

//! View state holder for server-backed lists.
//!
//! The controller owns a [`ListState`], feeds intents through the pure
//! reducer and decides when the new state needs a fetch. Fetches are handed
//! out as [`FetchTicket`]s so the caller chooses where they run: awaited
//! inline ([`ListController::apply`]) or spawned on the runtime with the
//! outcome sent back as an intent.
//!
//! Rules:
//! - A fetch is issued whenever the query differs from the last one issued,
//!   or on `Refresh`.
//! - At most one fetch is in flight; a request that finds the gate closed is
//!   dropped.
//! - When an outcome arrives and the query has moved on in the meantime, one
//!   follow-up fetch for the latest query is issued.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::fetch::{FetchGate, FetchPermit, ListFetcher, PageQuery};
use crate::ui::list::intent::ListIntent;
use crate::ui::list::reducer::ListReducer;
use crate::ui::list::state::ListState;
use crate::ui::mvi::Reducer;

pub struct ListController<F: ListFetcher> {
    fetcher: Arc<F>,
    gate: FetchGate,
    state: ListState<F::Item>,
    /// Query of the most recent fetch handed out.
    last_issued: Option<PageQuery>,
    /// Label used in error messages ("Failed to load products: ...").
    context: &'static str,
}

impl<F: ListFetcher> ListController<F> {
    pub fn new(fetcher: Arc<F>, per_page: u32, context: &'static str) -> Self {
        Self {
            fetcher,
            gate: FetchGate::new(),
            state: ListState::with_per_page(per_page),
            last_issued: None,
            context,
        }
    }

    pub fn state(&self) -> &ListState<F::Item> {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.gate.is_in_flight()
    }

    /// Initial load.
    pub fn start(&mut self) -> Option<FetchTicket<F>> {
        self.dispatch(ListIntent::Refresh)
    }

    /// Reduces `intent` and returns a fetch to run, if the new state needs one.
    pub fn dispatch(&mut self, intent: ListIntent<F::Item>) -> Option<FetchTicket<F>> {
        let force = matches!(intent, ListIntent::Refresh);
        let applied_success = match &intent {
            ListIntent::FetchSucceeded { query, .. } => *query == self.state.query,
            _ => false,
        };

        self.state = ListReducer::<F::Item>::reduce(std::mem::take(&mut self.state), intent);

        if applied_success {
            // The server may have moved us to another page; that page is what we now hold.
            self.last_issued = Some(self.state.query.clone());
        }

        let stale = self.last_issued.as_ref() != Some(&self.state.query);
        if force || stale {
            self.issue()
        } else {
            None
        }
    }

    /// Dispatches `intent` and runs every resulting fetch to completion.
    pub async fn apply(&mut self, intent: ListIntent<F::Item>) {
        let mut ticket = self.dispatch(intent);
        while let Some(next) = ticket {
            let outcome = next.run().await;
            ticket = self.dispatch(outcome);
        }
    }

    fn issue(&mut self) -> Option<FetchTicket<F>> {
        let Some(permit) = self.gate.try_acquire() else {
            debug!(context = self.context, "fetch already in flight, request dropped");
            return None;
        };

        let query = self.state.query.clone();
        self.last_issued = Some(query.clone());
        self.state = ListReducer::<F::Item>::reduce(
            std::mem::take(&mut self.state),
            ListIntent::FetchStarted,
        );
        debug!(
            context = self.context,
            page = query.page,
            search = %query.search,
            "fetch issued"
        );

        Some(FetchTicket {
            fetcher: Arc::clone(&self.fetcher),
            query,
            permit,
            context: self.context,
        })
    }
}

/// A fetch that holds the view's in-flight permit until it completes.
pub struct FetchTicket<F: ListFetcher> {
    fetcher: Arc<F>,
    query: PageQuery,
    permit: FetchPermit,
    context: &'static str,
}

impl<F: ListFetcher> FetchTicket<F> {
    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    /// Performs the request and turns the result into an intent.
    ///
    /// The permit is released before the outcome is returned, so dispatching
    /// the outcome may issue a follow-up fetch.
    pub async fn run(self) -> ListIntent<F::Item> {
        let FetchTicket {
            fetcher,
            query,
            permit,
            context,
        } = self;

        let result = fetcher.fetch(&query).await;
        drop(permit);

        match result {
            Ok(page) => ListIntent::FetchSucceeded { query, page },
            Err(err) => {
                warn!(context, kind = err.error_type(), error = %err, "fetch failed");
                ListIntent::FetchFailed {
                    query,
                    message: err.user_message(context),
                }
            }
        }
    }
}

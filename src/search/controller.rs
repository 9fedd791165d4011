//! Query controller
//!
//! Owns the query text, the category filter, the debounce timer and the
//! fetch/rank/publish pipeline. Every issued request carries a fresh
//! `RequestToken`; a response is applied only if its token is the one the
//! controller is currently waiting for, so slow responses to superseded
//! queries can never overwrite newer results.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::debouncer::Debouncer;
use super::ranker::rank;
use super::types::{
    Category, RankedResult, RequestToken, SearchKey, SearchRequest, SearchResponse,
};
use crate::config::SearchConfig;
use crate::error::SearchError;

/// What happened to a response handed to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseDisposition {
    /// Results were ranked and published; carries the published count
    Published(usize),
    /// The request failed; results were cleared
    Failed(SearchError),
    /// The response belonged to a superseded request and was dropped
    Stale,
}

/// Query execution state
pub struct QueryController {
    /// Trimmed query text
    query: String,
    category: Category,
    debouncer: Debouncer<SearchKey>,
    /// Last token minted; tokens are strictly increasing
    last_token: u64,
    /// Request whose response is still wanted
    awaiting: Option<SearchRequest>,
    loading: bool,
    results: Vec<RankedResult>,
    /// Whether `results` came from a completed search (vs. never searched)
    has_searched: bool,
    last_error: Option<SearchError>,
    max_results: usize,
    request_tx: Option<UnboundedSender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
    /// Failures for requests that never reached the worker
    undelivered: Vec<SearchResponse>,
}

impl QueryController {
    pub fn new(debounce_ms: u64, max_results: usize) -> Self {
        Self {
            query: String::new(),
            category: Category::default(),
            debouncer: Debouncer::new(debounce_ms),
            last_token: 0,
            awaiting: None,
            loading: false,
            results: Vec::new(),
            has_searched: false,
            last_error: None,
            max_results,
            request_tx: None,
            response_rx: None,
            undelivered: Vec::new(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.debounce_ms, config.max_suggestions)
    }

    /// Set the channel handles for communication with the search worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn results(&self) -> &[RankedResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once a search for the current query has completed
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// How long until `tick` would issue the pending search
    pub fn time_until_search(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Most suggestions a published set can hold
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Token of the request currently awaited, if any
    pub fn awaiting_token(&self) -> Option<RequestToken> {
        self.awaiting.as_ref().map(|r| r.token)
    }

    /// Update the query and restart the quiet period
    ///
    /// A whitespace-only query short-circuits: the pending search is
    /// cancelled, results are cleared and nothing is sent. Returns true if
    /// the results were cleared.
    pub fn set_query(&mut self, text: &str, now: Instant) -> bool {
        self.query = text.trim().to_string();
        self.reschedule(now)
    }

    /// Change the category filter; re-enters the same debounce pipeline
    pub fn set_category(&mut self, category: Category, now: Instant) -> bool {
        self.category = category;
        self.reschedule(now)
    }

    /// Reset the category filter to `all`
    pub fn clear_category(&mut self, now: Instant) -> bool {
        self.set_category(Category::All, now)
    }

    fn reschedule(&mut self, now: Instant) -> bool {
        if self.query.is_empty() {
            self.debouncer.cancel();
            self.clear_results();
            return true;
        }

        let key = SearchKey::new(self.query.clone(), self.category);
        if self.debouncer.schedule(key, now) {
            log::debug!("Debounce restarted for {:?}", self.query);
        }
        false
    }

    /// Issue the pending search if its quiet period has elapsed
    ///
    /// Returns the token minted for the issued request.
    pub fn tick(&mut self, now: Instant) -> Option<RequestToken> {
        let key = self.debouncer.take_due(now)?;
        Some(self.issue(key))
    }

    fn issue(&mut self, key: SearchKey) -> RequestToken {
        self.last_token = self.last_token.wrapping_add(1);
        let token = RequestToken(self.last_token);
        let request = SearchRequest { token, key };
        self.awaiting = Some(request.clone());
        self.loading = true;
        self.last_error = None;

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());

        if sent {
            log::debug!("Issued search {}", token);
        } else {
            self.undelivered.push(SearchResponse {
                token,
                outcome: Err(SearchError::WorkerUnavailable),
            });
        }
        token
    }

    /// Apply a worker response, subject to the stale-response guard
    pub fn handle_response(&mut self, response: SearchResponse) -> ResponseDisposition {
        let request = match self.awaiting.take() {
            Some(request) if request.token == response.token => request,
            other => {
                log::debug!(
                    "Dropping stale response {} (awaiting {:?})",
                    response.token,
                    other.as_ref().map(|r| r.token)
                );
                self.awaiting = other;
                return ResponseDisposition::Stale;
            }
        };

        self.loading = false;

        match response.outcome {
            Ok(candidates) => {
                // Rank against the text the request was issued for
                self.results = rank(candidates, &request.key.query, self.max_results);
                self.has_searched = true;
                self.last_error = None;
                ResponseDisposition::Published(self.results.len())
            }
            Err(error) => {
                log::warn!("Search {} failed: {}", response.token, error);
                self.results.clear();
                self.has_searched = false;
                self.last_error = Some(error.clone());
                ResponseDisposition::Failed(error)
            }
        }
    }

    /// Drain every response the worker has delivered so far
    pub fn poll_responses(&mut self) -> Vec<ResponseDisposition> {
        let mut responses: Vec<SearchResponse> = self.undelivered.drain(..).collect();
        let mut disconnected = false;
        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }
        if disconnected {
            log::warn!("Search worker disconnected");
            self.response_rx = None;
        }

        responses
            .into_iter()
            .map(|r| self.handle_response(r))
            .collect()
    }

    /// Clear results and forget any awaited response
    fn clear_results(&mut self) {
        self.results.clear();
        self.has_searched = false;
        self.loading = false;
        self.awaiting = None;
        self.last_error = None;
    }

    /// Back to the initial empty/idle state; the category filter persists
    pub fn reset(&mut self) {
        self.query.clear();
        self.debouncer.cancel();
        self.clear_results();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;

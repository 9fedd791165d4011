//! Search Worker Thread
//!
//! Runs search requests off the UI thread. A dedicated thread drives a
//! current-thread tokio runtime; each request becomes its own task, so
//! completions may come back in any order. Responses are tagged with the
//! request token and the UI thread decides which ones are still wanted.

use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::types::{RawResult, SearchKey, SearchRequest, SearchResponse, SearchResponseBody};
use crate::error::{SearchError, TripsearchError};

/// Something that can answer a search key with raw candidates
pub trait SearchBackend: Send + Sync + 'static {
    fn search(
        &self,
        key: &SearchKey,
    ) -> impl Future<Output = Result<Vec<RawResult>, SearchError>> + Send;
}

/// HTTP backend for `GET {endpoint}/api/search?q=..&category=..`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    search_url: reqwest::Url,
}

impl HttpBackend {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TripsearchError> {
        let base = endpoint.trim_end_matches('/');
        let search_url = reqwest::Url::parse(&format!("{}/api/search", base))
            .map_err(|e| TripsearchError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        if search_url.scheme() != "http" && search_url.scheme() != "https" {
            return Err(TripsearchError::InvalidEndpoint(format!(
                "unsupported scheme: {} (only http/https allowed)",
                search_url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("tripsearch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| TripsearchError::InvalidEndpoint(e.to_string()))?;

        Ok(Self { client, search_url })
    }

    pub fn search_url(&self) -> &reqwest::Url {
        &self.search_url
    }
}

impl SearchBackend for HttpBackend {
    async fn search(&self, key: &SearchKey) -> Result<Vec<RawResult>, SearchError> {
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[("q", key.query.as_str()), ("category", key.category.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::BadResponse {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        parse_response_body(&body)
    }
}

/// Decode a search response body into its result list
pub fn parse_response_body(body: &[u8]) -> Result<Vec<RawResult>, SearchError> {
    serde_json::from_slice::<SearchResponseBody>(body)
        .map(|b| b.results)
        .map_err(|e| SearchError::Decode(e.to_string()))
}

/// Handle to the background search worker
///
/// Dropping the handle stops the worker. Requests still in flight are not
/// aborted at the transport level; their responses are simply never read.
pub struct SearchWorker {
    cancel: CancellationToken,
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawn the search worker thread
///
/// Returns the worker handle, the channel to send requests on and the
/// channel responses arrive on.
pub fn spawn_worker<B: SearchBackend>(
    backend: B,
) -> (
    SearchWorker,
    UnboundedSender<SearchRequest>,
    Receiver<SearchResponse>,
) {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let cancel = CancellationToken::new();
    let worker_cancel = cancel.clone();

    // Detached; the cancellation token is the only way to stop it
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::warn!("Failed to start search runtime: {}", e);
                return;
            }
        };
        runtime.block_on(worker_loop(
            Arc::new(backend),
            request_rx,
            response_tx,
            worker_cancel,
        ));
    });

    (SearchWorker { cancel }, request_tx, response_rx)
}

/// Main worker loop - dispatches requests until cancelled or the channel closes
async fn worker_loop<B: SearchBackend>(
    backend: Arc<B>,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            request = request_rx.recv() => match request {
                Some(request) => {
                    let backend = Arc::clone(&backend);
                    let response_tx = response_tx.clone();
                    tokio::spawn(async move {
                        handle_request(backend.as_ref(), request, &response_tx).await;
                    });
                }
                None => break,
            },
        }
    }

    log::debug!("Search worker shutting down");
}

async fn handle_request<B: SearchBackend>(
    backend: &B,
    request: SearchRequest,
    response_tx: &Sender<SearchResponse>,
) {
    log::debug!(
        "Searching {} q={:?} category={}",
        request.token,
        request.key.query,
        request.key.category
    );
    let outcome = backend.search(&request.key).await;
    if response_tx
        .send(SearchResponse {
            token: request.token,
            outcome,
        })
        .is_err()
    {
        log::debug!("Dropping response {}: receiver gone", request.token);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

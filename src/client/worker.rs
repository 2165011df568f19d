//! Search worker thread
//!
//! Runs lookups on a background tokio runtime so the UI loop never blocks.
//! Receives requests over a channel, runs each as its own task, and sends
//! outcomes back for the UI to drain. A newer request for the same field
//! cancels the older one through its `CancellationToken`.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::backend::{LookupBackend, run_search};
use crate::error::SuggestError;
use crate::suggest::{GroupedResults, SearchRequest};

/// Messages sent to the worker
#[derive(Debug)]
enum WorkerRequest {
    Search(SearchRequest),
    /// Drop any in-flight search of this field
    Cancel { field_id: String },
}

/// Finished search, routed back to the owning field
#[derive(Debug)]
pub struct SearchOutcome {
    pub field_id: String,
    pub request_id: u64,
    pub result: Result<GroupedResults, SuggestError>,
}

/// Handle to the background search worker
#[derive(Debug)]
pub struct SearchWorker {
    request_tx: UnboundedSender<WorkerRequest>,
    response_rx: Receiver<SearchOutcome>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Queue a search; returns false if the worker has stopped
    pub fn submit(&self, request: SearchRequest) -> bool {
        self.request_tx.send(WorkerRequest::Search(request)).is_ok()
    }

    pub fn cancel(&self, field_id: &str) {
        let _ = self.request_tx.send(WorkerRequest::Cancel {
            field_id: field_id.to_string(),
        });
    }

    /// Next finished search, if any
    pub fn try_recv(&self) -> Option<SearchOutcome> {
        match self.response_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::debug!("search worker disconnected");
                None
            }
        }
    }

    #[cfg(test)]
    fn recv_timeout(&self, timeout: std::time::Duration) -> Option<SearchOutcome> {
        self.response_rx.recv_timeout(timeout).ok()
    }

    /// Stop accepting requests and wait for the thread to exit
    pub fn shutdown(mut self) {
        let (closed_tx, _) = unbounded_channel();
        drop(std::mem::replace(&mut self.request_tx, closed_tx));
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Spawn the search worker thread
pub fn spawn_worker<B: LookupBackend>(backend: B) -> Result<SearchWorker, SuggestError> {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let handle = std::thread::Builder::new()
        .name("search-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(Arc::new(backend), request_rx, response_tx));
        })?;

    Ok(SearchWorker {
        request_tx,
        response_rx,
        handle: Some(handle),
    })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop<B: LookupBackend>(
    backend: Arc<B>,
    mut request_rx: UnboundedReceiver<WorkerRequest>,
    response_tx: Sender<SearchOutcome>,
) {
    let mut in_flight: HashMap<String, CancellationToken> = HashMap::new();

    while let Some(request) = request_rx.recv().await {
        match request {
            WorkerRequest::Search(request) => {
                let token = CancellationToken::new();
                if let Some(previous) = in_flight.insert(request.field_id.clone(), token.clone()) {
                    previous.cancel();
                }
                tokio::spawn(run_request(
                    Arc::clone(&backend),
                    request,
                    token,
                    response_tx.clone(),
                ));
            }
            WorkerRequest::Cancel { field_id } => {
                if let Some(previous) = in_flight.remove(&field_id) {
                    previous.cancel();
                    log::debug!("[{}] cancelled in-flight search", field_id);
                }
            }
        }
    }

    for token in in_flight.values() {
        token.cancel();
    }
    log::debug!("search worker shutting down");
}

async fn run_request<B: LookupBackend>(
    backend: Arc<B>,
    request: SearchRequest,
    cancel_token: CancellationToken,
    response_tx: Sender<SearchOutcome>,
) {
    tokio::select! {
        biased;

        _ = cancel_token.cancelled() => {
            log::debug!(
                "[{}] search #{} superseded before completion",
                request.field_id,
                request.request_id
            );
        }
        result = run_search(backend.as_ref(), &request) => {
            let _ = response_tx.send(SearchOutcome {
                field_id: request.field_id.clone(),
                request_id: request.request_id,
                result,
            });
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

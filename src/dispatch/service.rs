//! Background worker for the dispatch queue
//!
//! One task drains the lane in order. For each search it optionally clears
//! the view, awaits the backend, renders, then settles the ticket, whether or
//! not any of those steps failed. The worker owns the renderer, so nothing
//! else can write to the view.

use futures::FutureExt;
use parking_lot::Mutex;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::errors::DispatchError;
use super::sender::{DispatchSender, LaneGate};
use super::stats::DispatchStats;
use super::types::{
    CompletionCallback, CycleOutcome, CycleReport, DispatchMessage, Ticket, WorkerOptions,
};
use crate::render::{ResultRenderer, View};
use crate::search::{Query, SearchBackend, SearchError, SearchResult};

type CallbackMap = Arc<Mutex<ahash::AHashMap<Ticket, CompletionCallback>>>;

/// Owner of the dispatch worker task
pub struct DispatchQueue {
    sender: mpsc::UnboundedSender<DispatchMessage>,
    gate: Arc<Mutex<LaneGate>>,
    worker: JoinHandle<()>,
    stats: Arc<DispatchStats>,
}

impl DispatchQueue {
    /// Spawn the worker and return the queue plus a sender handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<B, V>(
        backend: B,
        renderer: ResultRenderer<V>,
        options: WorkerOptions,
    ) -> (DispatchQueue, DispatchSender)
    where
        B: SearchBackend,
        V: View,
    {
        let (sender, receiver) = mpsc::unbounded_channel();
        let completion_callbacks: CallbackMap =
            Arc::new(Mutex::new(ahash::AHashMap::with_capacity(16)));
        let stats = Arc::new(DispatchStats::new());
        let gate = Arc::new(Mutex::new(LaneGate::default()));

        let worker_callbacks = completion_callbacks.clone();
        let worker_stats = stats.clone();

        let worker = tokio::spawn(async move {
            Self::worker_loop(
                backend,
                renderer,
                receiver,
                worker_callbacks,
                worker_stats,
                options,
            )
            .await;
        });

        let queue = DispatchQueue {
            sender: sender.clone(),
            gate: gate.clone(),
            worker,
            stats: stats.clone(),
        };

        let sender = DispatchSender {
            sender,
            completion_callbacks,
            gate,
            stats,
        };

        (queue, sender)
    }

    /// Ask the worker to stop once everything already queued has settled.
    ///
    /// Every sender rejects new searches from this point on.
    pub fn shutdown(&self) {
        let mut gate = self.gate.lock();
        if !gate.closed {
            gate.closed = true;
            let _ = self.sender.send(DispatchMessage::Shutdown);
        }
    }

    /// Wait for the worker task to exit.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Worker` if the task panicked or was aborted.
    pub async fn join(self) -> Result<(), DispatchError> {
        self.worker
            .await
            .map_err(|e| DispatchError::Worker(e.to_string()))
    }

    /// Shut down and wait for the worker.
    ///
    /// # Errors
    ///
    /// See [`DispatchQueue::join`].
    pub async fn shutdown_and_join(self) -> Result<(), DispatchError> {
        self.shutdown();
        self.join().await
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.worker.is_finished()
    }

    #[must_use]
    pub fn stats(&self) -> super::stats::DispatchStatsSnapshot {
        self.stats.snapshot()
    }

    async fn worker_loop<B, V>(
        backend: B,
        mut renderer: ResultRenderer<V>,
        mut receiver: mpsc::UnboundedReceiver<DispatchMessage>,
        completion_callbacks: CallbackMap,
        stats: Arc<DispatchStats>,
        options: WorkerOptions,
    ) where
        B: SearchBackend,
        V: View,
    {
        info!("Dispatch worker started");

        while let Some(message) = receiver.recv().await {
            match message {
                DispatchMessage::Search { query, ticket } => {
                    let report = Self::run_cycle(&backend, &mut renderer, query, ticket, options).await;
                    Self::settle(report, &completion_callbacks, &stats);
                }
                DispatchMessage::Flush { done } => {
                    let _ = done.send(());
                }
                DispatchMessage::Shutdown => break,
            }
        }

        // The gate keeps searches from queueing behind Shutdown. Anything
        // found here anyway still settles, as a failure.
        receiver.close();
        while let Ok(message) = receiver.try_recv() {
            if let DispatchMessage::Search { query, ticket } = message {
                warn!(ticket, query = %query, "Search arrived after shutdown");
                let report = CycleReport {
                    ticket,
                    query,
                    outcome: CycleOutcome::Failed(SearchError::Other(
                        "dispatch queue shut down".to_string(),
                    )),
                    elapsed: std::time::Duration::ZERO,
                };
                Self::settle(report, &completion_callbacks, &stats);
            }
        }

        info!("Dispatch worker stopped");
    }

    async fn run_cycle<B, V>(
        backend: &B,
        renderer: &mut ResultRenderer<V>,
        query: Query,
        ticket: Ticket,
        options: WorkerOptions,
    ) -> CycleReport
    where
        B: SearchBackend,
        V: View,
    {
        let started = Instant::now();
        debug!(ticket, query = %query, "Search cycle started");

        let cycle = AssertUnwindSafe(Self::search_and_render(backend, renderer, &query, options))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| {
                Err(SearchError::Other(format!(
                    "search cycle panicked: {}",
                    panic_message(payload.as_ref())
                )))
            });

        let outcome = match cycle {
            Ok(rows) => {
                debug!(
                    ticket,
                    rows,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Search cycle rendered"
                );
                CycleOutcome::Rendered { rows }
            }
            Err(error) => {
                warn!(
                    ticket,
                    query = %query,
                    kind = error.kind(),
                    error = %error,
                    "Search cycle failed"
                );
                match renderer.render_error(&error) {
                    Ok(true) => {}
                    // A render that broke off part way would leave a partial
                    // row set behind.
                    Ok(false) => {
                        if matches!(error, SearchError::Render(_) | SearchError::Other(_))
                            && let Err(clear_error) = renderer.clear()
                        {
                            warn!(ticket, error = %clear_error, "Failed to clear view");
                        }
                    }
                    Err(render_error) => {
                        warn!(ticket, error = %render_error, "Failed to surface search error");
                    }
                }
                CycleOutcome::Failed(error)
            }
        };

        CycleReport {
            ticket,
            query,
            outcome,
            elapsed: started.elapsed(),
        }
    }

    async fn search_and_render<B, V>(
        backend: &B,
        renderer: &mut ResultRenderer<V>,
        query: &Query,
        options: WorkerOptions,
    ) -> SearchResult<usize>
    where
        B: SearchBackend,
        V: View,
    {
        if options.clear_on_dispatch {
            renderer.clear()?;
        }
        let results = backend.search(query).await?;
        renderer.render(&results)?;
        Ok(results.len())
    }

    fn settle(report: CycleReport, completion_callbacks: &CallbackMap, stats: &DispatchStats) {
        stats.record_settled(report.ticket, report.is_success());

        // Take the callback out before calling it so the lock is not held
        let ticket = report.ticket;
        let callback = completion_callbacks.lock().remove(&ticket);
        if let Some(callback) = callback
            && let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| callback(report)))
        {
            warn!(
                ticket,
                panic = panic_message(payload.as_ref()),
                "Completion callback panicked"
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

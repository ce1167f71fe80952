//! Public API for enqueueing searches
//!
//! `DispatchSender` is cheap to clone. Enqueueing never blocks or awaits: it
//! appends to the lane and returns the ticket immediately.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::sync::{mpsc, oneshot};

use super::errors::DispatchError;
use super::stats::{DispatchStats, DispatchStatsSnapshot};
use super::types::{CompletionCallback, CycleReport, DispatchMessage, Ticket};
use crate::search::Query;

/// Entry point of the lane, shared by every sender clone and the queue.
///
/// Holding the lock while a ticket is issued and its message sent keeps
/// ticket order equal to lane order, and keeps searches from landing behind
/// a `Shutdown` message.
#[derive(Debug, Default)]
pub(super) struct LaneGate {
    pub(super) closed: bool,
    pub(super) last_ticket: Ticket,
}

/// Handle for appending searches to the dispatch lane
#[derive(Clone)]
pub struct DispatchSender {
    pub(super) sender: mpsc::UnboundedSender<DispatchMessage>,
    pub(super) completion_callbacks: Arc<Mutex<ahash::AHashMap<Ticket, CompletionCallback>>>,
    pub(super) gate: Arc<Mutex<LaneGate>>,
    pub(super) stats: Arc<DispatchStats>,
}

impl std::fmt::Debug for DispatchSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchSender")
            .field("pending", &self.stats.pending_count.load(Ordering::Relaxed))
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl DispatchSender {
    /// Append a search for `query` to the lane.
    ///
    /// The cycle runs after every previously enqueued cycle has settled.
    /// Identical queries are not merged.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Closed` once shutdown has been requested.
    #[inline]
    pub fn enqueue(&self, query: impl Into<Query>) -> Result<Ticket, DispatchError> {
        self.push(query.into(), None)
    }

    /// Append a search and run `callback` once its cycle settles.
    ///
    /// The callback runs on the worker task, success or failure.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Closed` once shutdown has been requested; the
    /// callback is dropped without being called.
    #[inline]
    pub fn enqueue_with_callback<F>(
        &self,
        query: impl Into<Query>,
        callback: F,
    ) -> Result<Ticket, DispatchError>
    where
        F: FnOnce(CycleReport) + Send + 'static,
    {
        self.push(query.into(), Some(Box::new(callback)))
    }

    fn push(
        &self,
        query: Query,
        callback: Option<CompletionCallback>,
    ) -> Result<Ticket, DispatchError> {
        let mut gate = self.gate.lock();
        if gate.closed || self.sender.is_closed() {
            return Err(DispatchError::Closed);
        }

        gate.last_ticket += 1;
        let ticket = gate.last_ticket;

        // Registered before sending so the worker always finds it
        if let Some(callback) = callback {
            self.completion_callbacks.lock().insert(ticket, callback);
        }

        // Counted before sending so the worker can never settle it first
        self.stats.record_enqueued();
        if self
            .sender
            .send(DispatchMessage::Search { query, ticket })
            .is_ok()
        {
            Ok(ticket)
        } else {
            self.stats.record_rejected();
            self.completion_callbacks.lock().remove(&ticket);
            Err(DispatchError::Closed)
        }
    }

    /// Wait until every search enqueued before this call has settled.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Closed` if the worker is gone, or
    /// `DispatchError::FlushDropped` if it stops before reaching the barrier.
    pub async fn flush(&self) -> Result<(), DispatchError> {
        let (done, rx) = oneshot::channel();
        {
            let gate = self.gate.lock();
            if gate.closed {
                return Err(DispatchError::Closed);
            }
            self.sender
                .send(DispatchMessage::Flush { done })
                .map_err(|_| DispatchError::Closed)?;
        }
        rx.await.map_err(|_| DispatchError::FlushDropped)
    }

    /// Get current dispatch statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> DispatchStatsSnapshot {
        self.stats.snapshot()
    }

    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.gate.lock().closed || self.sender.is_closed()
    }
}

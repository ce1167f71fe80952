//! Message types for the dispatch queue
//!
//! The queue is a single FIFO lane. Every message is handled to completion
//! before the next one is received.

use std::time::Duration;
use tokio::sync::oneshot;

use crate::search::{Query, SearchError};

/// Sequence number handed out by `enqueue`, starting at 1.
///
/// Tickets are issued in lane order, across every sender clone, so cycles
/// settle in ticket order.
pub type Ticket = u64;

/// Callback invoked once the cycle for its ticket has settled
pub type CompletionCallback = Box<dyn FnOnce(CycleReport) + Send + 'static>;

/// Work travelling down the dispatch lane
#[derive(Debug)]
pub enum DispatchMessage {
    /// Run one search-and-render cycle
    Search { query: Query, ticket: Ticket },
    /// Barrier: answered once everything queued ahead of it has settled
    Flush { done: oneshot::Sender<()> },
    /// Stop the worker after everything queued ahead of it
    Shutdown,
}

/// How a settled cycle ended
#[derive(Debug)]
pub enum CycleOutcome {
    /// Results were rendered; the view now holds `rows` rows
    Rendered { rows: usize },
    /// The cycle failed; the queue moved on regardless
    Failed(SearchError),
}

/// Record of one settled cycle
#[derive(Debug)]
pub struct CycleReport {
    pub ticket: Ticket,
    pub query: Query,
    pub outcome: CycleOutcome,
    pub elapsed: Duration,
}

impl CycleReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, CycleOutcome::Rendered { .. })
    }

    /// Rendered row count, if the cycle succeeded
    #[must_use]
    pub fn rows(&self) -> Option<usize> {
        match self.outcome {
            CycleOutcome::Rendered { rows } => Some(rows),
            CycleOutcome::Failed(_) => None,
        }
    }
}

/// Per-worker behaviour switches
#[derive(Debug, Clone, Copy)]
pub struct WorkerOptions {
    /// Wipe the view when a cycle starts, before the request goes out
    pub clear_on_dispatch: bool,
}

impl Default for WorkerOptions {
    fn default() -> Self {
        Self {
            clear_on_dispatch: true,
        }
    }
}

impl From<&crate::config::ClientConfig> for WorkerOptions {
    fn from(config: &crate::config::ClientConfig) -> Self {
        Self {
            clear_on_dispatch: config.clear_on_dispatch(),
        }
    }
}

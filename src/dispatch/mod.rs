//! Sequential search dispatch
//!
//! Searches triggered in quick succession run strictly one after another, in
//! the order they were enqueued. A cycle (request, response, render) must
//! settle before the next one starts, so a slow early response can never
//! overwrite the results of a later query.
//!
//! - `types` - lane messages, tickets and cycle reports
//! - `stats` - lock-free counters
//! - `sender` - `DispatchSender`, the non-blocking enqueue handle
//! - `service` - `DispatchQueue`, the single worker that owns the renderer
//!
//! # Example
//!
//! ```ignore
//! let config = ClientConfig::builder().endpoint(endpoint).build()?;
//! let backend = HttpSearchBackend::new(&config)?;
//! let renderer = ResultRenderer::with_config(TerminalView::stdout(true), &config);
//! let (queue, sender) = DispatchQueue::start(backend, renderer, (&config).into());
//!
//! sender.enqueue("cat")?;
//! sender.enqueue("dog")?; // runs only after "cat" has rendered
//! sender.flush().await?;
//! queue.shutdown_and_join().await?;
//! ```

mod errors;
mod sender;
mod service;
mod stats;
mod types;

pub use errors::DispatchError;
pub use sender::DispatchSender;
pub use service::DispatchQueue;
pub use stats::{DispatchStats, DispatchStatsSnapshot};
pub use types::{
    CompletionCallback, CycleOutcome, CycleReport, DispatchMessage, Ticket, WorkerOptions,
};

pub mod config;
pub mod dispatch;
pub mod render;
pub mod search;
pub mod trigger;
pub mod utils;

pub use config::ClientConfig;
pub use dispatch::{
    CycleOutcome, CycleReport, DispatchError, DispatchQueue, DispatchSender, DispatchStatsSnapshot,
    Ticket, WorkerOptions,
};
pub use render::{MemoryView, ResultRenderer, TerminalView, View};
pub use search::{
    HttpSearchBackend, Query, ResultList, ResultRow, SearchBackend, SearchError, SearchResult,
};
pub use trigger::{TriggerError, pump_lines};

/// Start a dispatch queue wired to the HTTP backend and `view`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn start_http_client<V: View>(
    config: &ClientConfig,
    view: V,
) -> Result<(DispatchQueue, DispatchSender), SearchError> {
    let backend = HttpSearchBackend::new(config)?;
    let renderer = ResultRenderer::with_config(view, config);
    Ok(DispatchQueue::start(backend, renderer, config.into()))
}

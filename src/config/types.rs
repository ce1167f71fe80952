//! Core configuration type for the search client

use serde::{Deserialize, Serialize};

/// Settings shared by the backend, the renderer and the dispatch worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Search endpoint.
    ///
    /// **INVARIANT:** Always a parsed, absolute `http`/`https` URL
    /// (validated in builder).
    pub(crate) endpoint: String,
    pub(crate) user_agent: String,

    /// Per-request timeout in seconds.
    ///
    /// `None` waits indefinitely, and a hung request then holds up every
    /// query queued behind it.
    ///
    /// Default: None
    pub(crate) request_timeout_secs: Option<u64>,

    /// Clear the view as soon as a cycle starts, before the request is sent.
    ///
    /// Default: true
    pub(crate) clear_on_dispatch: bool,

    /// Replace the view with a single error row when a cycle fails.
    ///
    /// Default: false (failures are only logged)
    pub(crate) surface_errors: bool,

    /// Emit ANSI clear-screen sequences from the terminal view.
    ///
    /// Default: true
    pub(crate) ansi: bool,
}

//! Shared configuration constants for seqsearch
//!
//! Default values used by the config builder and the CLI so the two never
//! drift apart.

/// Default search endpoint
///
/// The reference search server listens on port 6969 and answers ranked
/// queries on `/api/search`.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:6969/api/search";

/// User agent sent with every search request
pub const DEFAULT_USER_AGENT: &str = concat!("seqsearch/", env!("CARGO_PKG_VERSION"));

/// Prefix of the single row shown when failures are surfaced on the view
pub const ERROR_ROW_PREFIX: &str = "error: ";

/// ANSI sequence that clears the screen and homes the cursor
pub const ANSI_CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

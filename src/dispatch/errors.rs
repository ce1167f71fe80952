//! Error types for dispatch queue operations

/// Error types for dispatch queue operations
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The worker has shut down; nothing more can be enqueued
    #[error("Dispatch queue is closed")]
    Closed,

    /// The worker exited before answering a flush barrier
    #[error("Dispatch worker stopped before the flush completed")]
    FlushDropped,

    /// The worker task panicked or was aborted
    #[error("Dispatch worker terminated abnormally: {0}")]
    Worker(String),
}

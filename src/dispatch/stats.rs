//! Lock-free statistics tracking for the dispatch queue

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use super::types::Ticket;

/// Lock-free dispatch statistics
#[derive(Debug, Default)]
pub struct DispatchStats {
    pub total_enqueued: AtomicUsize,
    pub total_completed: AtomicUsize,
    pub total_failed: AtomicUsize,
    pub pending_count: AtomicUsize,
    pub last_settled_ticket: AtomicU64,
}

impl DispatchStats {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_enqueued(&self) {
        self.total_enqueued.fetch_add(1, Ordering::Relaxed);
        self.pending_count.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_settled(&self, ticket: Ticket, success: bool) {
        if success {
            self.total_completed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.total_failed.fetch_add(1, Ordering::Relaxed);
        }
        self.pending_count.fetch_sub(1, Ordering::Relaxed);
        self.last_settled_ticket.store(ticket, Ordering::Release);
    }

    pub(crate) fn record_rejected(&self) {
        self.total_enqueued.fetch_sub(1, Ordering::Relaxed);
        self.pending_count.fetch_sub(1, Ordering::Relaxed);
    }

    /// Get snapshot of current statistics
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> DispatchStatsSnapshot {
        DispatchStatsSnapshot {
            total_enqueued: self.total_enqueued.load(Ordering::Relaxed),
            total_completed: self.total_completed.load(Ordering::Relaxed),
            total_failed: self.total_failed.load(Ordering::Relaxed),
            pending_count: self.pending_count.load(Ordering::Relaxed),
            last_settled_ticket: self.last_settled_ticket.load(Ordering::Acquire),
        }
    }
}

/// Immutable snapshot of dispatch statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStatsSnapshot {
    pub total_enqueued: usize,
    pub total_completed: usize,
    pub total_failed: usize,
    pub pending_count: usize,
    /// 0 until the first cycle settles
    pub last_settled_ticket: Ticket,
}

impl DispatchStatsSnapshot {
    #[must_use]
    pub fn total_settled(&self) -> usize {
        self.total_completed + self.total_failed
    }
}

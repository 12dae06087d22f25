//! Lazy rewrite flush tracking.
//!
//! Writes to the assignment option mark routing dirty; the next
//! administrative request that sees the flag rebuilds the rewrite table and
//! completes the flush. The flag counts writes rather than holding a bool so
//! that a write landing while a rebuild is in flight keeps the flag dirty:
//! rebuilds happen at least once per change, never zero times.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Observable state of the routing flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingState {
    Clean,
    Dirty,
}

/// Proof that a flush started at a given write generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a flush ticket must be completed once the rebuild succeeded"]
pub struct FlushTicket {
    generation: u64,
}

/// Dirty flag shared between the assignment store and the host.
#[derive(Debug)]
pub struct RoutingFlag {
    written: AtomicU64,
    flushed: AtomicU64,
}

impl RoutingFlag {
    /// Creates a dirty flag: no rules have been built yet.
    pub fn new() -> Self {
        Self {
            written: AtomicU64::new(1),
            flushed: AtomicU64::new(0),
        }
    }

    /// Creates a clean flag, for hosts that restored their rules elsewhere.
    pub fn clean() -> Self {
        Self {
            written: AtomicU64::new(0),
            flushed: AtomicU64::new(0),
        }
    }

    /// Records a routing-affecting write.
    pub fn mark_dirty(&self) {
        self.written.fetch_add(1, Ordering::AcqRel);
    }

    pub fn state(&self) -> RoutingState {
        if self.flushed.load(Ordering::Acquire) < self.written.load(Ordering::Acquire) {
            RoutingState::Dirty
        } else {
            RoutingState::Clean
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state() == RoutingState::Dirty
    }

    /// Starts a flush if the flag is dirty.
    pub fn begin_flush(&self) -> Option<FlushTicket> {
        let written = self.written.load(Ordering::Acquire);
        if self.flushed.load(Ordering::Acquire) >= written {
            return None;
        }
        Some(FlushTicket {
            generation: written,
        })
    }

    /// Completes a flush. Writes recorded after the ticket was taken keep the
    /// flag dirty.
    pub fn complete(&self, ticket: FlushTicket) {
        self.flushed.fetch_max(ticket.generation, Ordering::AcqRel);
    }
}

impl Default for RoutingFlag {
    fn default() -> Self {
        Self::new()
    }
}

/*!
 * Scheduler Entry Types
 * Per-run working records wrapping the immutable input processes
 */

use crate::core::types::{Pid, Priority, Process, Time};

/// Mutable working copy of one process, alive for a single run
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    pub priority: Priority,
    pub remaining: Time,
    pub first_dispatch: Option<Time>,
    pub completion: Option<Time>,
    /// Current effective priority (aging only)
    pub dynamic_priority: Priority,
}

impl Entry {
    pub fn new(process: &Process) -> Self {
        Self {
            pid: process.pid,
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            remaining: process.burst,
            first_dispatch: None,
            completion: None,
            dynamic_priority: process.priority,
        }
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.completion.is_some()
    }

    /// Arrived by `now` and still has work left
    #[inline(always)]
    pub fn is_ready(&self, now: Time) -> bool {
        self.arrival <= now && !self.is_done()
    }

    /// Universal tie-break suffix: earlier arrival, then lower pid
    #[inline(always)]
    pub fn arrival_key(&self) -> (Time, Pid) {
        (self.arrival, self.pid)
    }
}

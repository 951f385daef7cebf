/*!
 * Core Types
 * Input records and output shapes shared by every simulator
 */

use serde::{Deserialize, Serialize};

/// Process identifier type
pub type Pid = u32;

/// Simulated time, in abstract integer ticks
pub type Time = u64;

/// Static priority (lower value is more urgent)
pub type Priority = i64;

/// Immutable input record for one compute job
///
/// Simulators never mutate these; each run builds its own working entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    #[serde(default)]
    pub priority: Priority,
}

impl Process {
    #[inline]
    #[must_use]
    pub const fn new(pid: Pid, arrival: Time, burst: Time) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

impl From<(Pid, Time, Time)> for Process {
    fn from((pid, arrival, burst): (Pid, Time, Time)) -> Self {
        Self::new(pid, arrival, burst)
    }
}

impl From<(Pid, Time, Time, Priority)> for Process {
    fn from((pid, arrival, burst, priority): (Pid, Time, Time, Priority)) -> Self {
        Self::new(pid, arrival, burst).with_priority(priority)
    }
}

/// What the CPU is doing during a timeline segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Occupant {
    Idle,
    Process { pid: Pid },
}

impl Occupant {
    #[inline(always)]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline(always)]
    pub const fn pid(&self) -> Option<Pid> {
        match self {
            Self::Idle => None,
            Self::Process { pid } => Some(*pid),
        }
    }
}

/// One half-open interval `[start, end)` of the execution timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub occupant: Occupant,
    pub start: Time,
    pub end: Time,
}

impl Segment {
    #[inline(always)]
    pub const fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// One scheduling decision: `pid` held the CPU over `[start, end)`
///
/// `level` is the ready-queue level the process was dispatched from, for the
/// multi-level feedback policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    pub pid: Pid,
    pub start: Time,
    pub end: Time,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
}

/// Per-process result, produced exactly once per input process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    pub priority: Priority,
    pub completion: Time,
    pub turnaround: Time,
    pub waiting: Time,
    pub response: Time,
}

/// Arithmetic means over a result set (all zero for an empty set)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Averages {
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
}

/// Whole-timeline figures derived from a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStats {
    pub makespan: Time,
    pub busy_time: Time,
    pub idle_time: Time,
    pub cpu_utilization: f64,
    pub throughput: f64,
    pub context_switches: usize,
}

/// Complete output of one simulator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub timeline: Vec<Segment>,
    pub results: Vec<ProcessStats>,
    pub averages: Averages,
    pub stats: TimelineStats,
    pub dispatches: Vec<Dispatch>,
}

impl Simulation {
    /// Look up the result for `pid`
    pub fn result(&self, pid: Pid) -> Option<&ProcessStats> {
        self.results.iter().find(|r| r.pid == pid)
    }

    /// Pids in the order they finished
    pub fn completion_order(&self) -> Vec<Pid> {
        let mut finished: Vec<&ProcessStats> = self.results.iter().collect();
        finished.sort_by_key(|r| (r.completion, r.pid));
        finished.into_iter().map(|r| r.pid).collect()
    }
}

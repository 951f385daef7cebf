/*!
 * CPU Scheduling Simulator
 * Deterministic single-CPU simulation of classical scheduling policies
 */

pub mod core;
pub mod monitoring;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{SimError, SimResult};
pub use crate::core::types::{
    Averages, Dispatch, Occupant, Pid, Priority, Process, ProcessStats, Segment, Simulation, Time,
    TimelineStats,
};
pub use crate::core::CompareConfig;
pub use monitoring::init_tracing;
pub use scheduler::{
    compare, compare_with, lookup, run, Comparison, Metric, Policy, PolicyInfo, PolicyRun,
    SimOptions, REGISTRY,
};

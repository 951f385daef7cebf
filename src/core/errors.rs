/*!
 * Error Types
 * Simulation error taxonomy with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for every engine operation
pub type SimResult<T> = Result<T, SimError>;

/// Simulation errors with serialization support
///
/// Returned as values to the immediate caller; `compare` records them per
/// policy instead of aborting.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "errorType", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Unknown scheduling policy '{key}'")]
    #[diagnostic(
        code(scheduler::unknown_policy),
        help("Valid policies: fcfs, sjf, srt, rr, hrrn, priority, feedback, feedback_variable, aging, mlfq")
    )]
    UnknownPolicy { key: String },

    #[error("No processes to schedule")]
    #[diagnostic(
        code(scheduler::empty_input),
        help("Supply at least one process as (pid, arrival, burst[, priority]).")
    )]
    EmptyInput,

    #[error("Policy '{policy}' requires a time quantum")]
    #[diagnostic(
        code(scheduler::missing_quantum),
        help("Pass a positive integer quantum, e.g. quantum = 2.")
    )]
    MissingQuantum { policy: String },

    #[error("Invalid time quantum {value} for policy '{policy}'")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The quantum must be a positive integer (1 or greater).")
    )]
    InvalidQuantum { policy: String, value: i64 },

    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process),
        help("Every process needs a burst time of at least 1.")
    )]
    InvalidProcess { pid: Pid, reason: String },

    #[error("Simulation fault: {0}")]
    #[diagnostic(
        code(scheduler::simulation_fault),
        help("An engine invariant was violated. This is a defect; please report the input that triggered it.")
    )]
    SimulationFault(String),
}

impl SimError {
    pub(crate) fn fault(message: impl Into<String>) -> Self {
        Self::SimulationFault(message.into())
    }

    /// Stable machine-readable kind, matching the serialized tag
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownPolicy { .. } => "unknown_policy",
            Self::EmptyInput => "empty_input",
            Self::MissingQuantum { .. } => "missing_quantum",
            Self::InvalidQuantum { .. } => "invalid_quantum",
            Self::InvalidProcess { .. } => "invalid_process",
            Self::SimulationFault(_) => "simulation_fault",
        }
    }
}

/*!
 * Policy Simulators
 * One discrete-event state machine per scheduling policy
 */

pub mod aging;
pub mod fcfs;
pub mod feedback;
pub mod feedback_variable;
pub mod hrrn;
pub mod mlfq;
pub mod priority;
pub mod rr;
pub mod sjf;
pub mod srt;

mod multilevel;
mod nonpreemptive;

use crate::core::errors::SimResult;
use crate::core::types::{Process, Simulation};
use crate::scheduler::types::SimOptions;

/// Uniform simulator signature used by the registry's dispatch table
pub type SimulateFn = fn(&[Process], &SimOptions) -> SimResult<Simulation>;

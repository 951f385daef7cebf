/*!
 * Feedback with Variable Quantum
 * Five demote-only queues, slice doubles per level (1, 2, 4, 8, 16)
 */

use super::multilevel::run_multilevel;
use crate::core::errors::SimResult;
use crate::core::limits::FEEDBACK_LEVELS;
use crate::core::types::{Process, Simulation, Time};
use crate::scheduler::types::SimOptions;

pub fn simulate(processes: &[Process], _options: &SimOptions) -> SimResult<Simulation> {
    run_multilevel(processes, FEEDBACK_LEVELS, |level| Some(level_quantum(level)))
}

/// Slice length granted at `level`: 2^level
pub const fn level_quantum(level: usize) -> Time {
    1 << level
}

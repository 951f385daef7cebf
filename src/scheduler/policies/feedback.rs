/*!
 * Feedback
 * Five demote-only queues, one-tick slice at every level
 */

use super::multilevel::run_multilevel;
use crate::core::errors::SimResult;
use crate::core::limits::{FEEDBACK_LEVELS, FEEDBACK_QUANTUM};
use crate::core::types::{Process, Simulation};
use crate::scheduler::types::SimOptions;

pub fn simulate(processes: &[Process], _options: &SimOptions) -> SimResult<Simulation> {
    run_multilevel(processes, FEEDBACK_LEVELS, |_| Some(FEEDBACK_QUANTUM))
}

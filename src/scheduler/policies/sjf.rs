/*!
 * Shortest Job First
 * Non-preemptive, shortest burst among arrived processes
 */

use super::nonpreemptive::run_to_completion;
use crate::core::errors::SimResult;
use crate::core::types::{Process, Simulation};
use crate::scheduler::types::SimOptions;

pub fn simulate(processes: &[Process], _options: &SimOptions) -> SimResult<Simulation> {
    run_to_completion(processes, |state| state.pick_min_by(|e| e.burst))
}

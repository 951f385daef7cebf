/*!
 * First-Come-First-Served
 * Non-preemptive, ordered by arrival time then pid
 */

use super::nonpreemptive::run_to_completion;
use crate::core::errors::SimResult;
use crate::core::types::{Process, Simulation};
use crate::scheduler::types::SimOptions;

pub fn simulate(processes: &[Process], _options: &SimOptions) -> SimResult<Simulation> {
    run_to_completion(processes, |state| state.pick_min_by(|_| ()))
}

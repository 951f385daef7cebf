/*!
 * Three-level Feedback Queue
 * Level 0: RR q=2, level 1: RR q=4, level 2: FCFS; demotion only
 */

use super::multilevel::run_multilevel;
use crate::core::errors::SimResult;
use crate::core::limits::MLFQ_QUANTA;
use crate::core::types::{Process, Simulation};
use crate::scheduler::types::SimOptions;

pub fn simulate(processes: &[Process], _options: &SimOptions) -> SimResult<Simulation> {
    run_multilevel(processes, MLFQ_QUANTA.len(), |level| MLFQ_QUANTA[level])
}

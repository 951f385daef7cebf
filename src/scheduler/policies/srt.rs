/*!
 * Shortest Remaining Time
 * Preemptive SJF, re-evaluated every tick
 */

use crate::core::errors::SimResult;
use crate::core::types::{Process, Simulation};
use crate::scheduler::engine::RunState;
use crate::scheduler::types::SimOptions;

pub fn simulate(processes: &[Process], _options: &SimOptions) -> SimResult<Simulation> {
    let mut state = RunState::new(processes)?;

    while !state.all_done() {
        match state.pick_min_by(|e| e.remaining) {
            Some(idx) => {
                state.continue_or_dispatch(idx, 1)?;
            }
            None => state.idle_until_next_arrival()?,
        }
    }

    state.finish()
}

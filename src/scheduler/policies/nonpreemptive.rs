/*!
 * Non-preemptive Driver
 * Pick one ready process, run it to completion, repeat
 */

use crate::core::errors::SimResult;
use crate::core::types::{Process, Simulation};
use crate::scheduler::engine::RunState;

/// Drive a single-pick policy; `select` sees only the current state and
/// returns `None` when nothing has arrived yet
pub(super) fn run_to_completion(
    processes: &[Process],
    select: impl Fn(&RunState) -> Option<usize>,
) -> SimResult<Simulation> {
    let mut state = RunState::new(processes)?;

    while !state.all_done() {
        match select(&state) {
            Some(idx) => {
                let burst = state.entry(idx).remaining;
                state.dispatch(idx, burst, None)?;
            }
            None => state.idle_until_next_arrival()?,
        }
    }

    state.finish()
}

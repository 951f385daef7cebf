/*!
 * Priority with Aging
 * Preemptive priority where waiting processes grow more urgent every tick
 *
 * The effective priority of every ready process that is passed over for a tick
 * drops by `aging_rate` (default 1, never zero). A process taking the CPU after someone
 * else held it is reset to its static priority first.
 */

use crate::core::errors::SimResult;
use crate::core::types::{Priority, Process, Simulation};
use crate::scheduler::engine::RunState;
use crate::scheduler::types::SimOptions;

pub fn simulate(processes: &[Process], options: &SimOptions) -> SimResult<Simulation> {
    let rate = Priority::try_from(options.aging_rate()).unwrap_or(Priority::MAX);

    let mut state = RunState::new(processes)?;
    let mut running: Option<usize> = None;

    while !state.all_done() {
        let Some(idx) = state.pick_min_by(|e| e.dynamic_priority) else {
            running = None;
            state.idle_until_next_arrival()?;
            continue;
        };

        if running != Some(idx) {
            let entry = state.entry_mut(idx);
            entry.dynamic_priority = entry.priority;
        }

        let passed_over: Vec<usize> = state.ready().filter(|&other| other != idx).collect();
        state.continue_or_dispatch(idx, 1)?;

        for other in passed_over {
            let entry = state.entry_mut(other);
            entry.dynamic_priority = entry.dynamic_priority.saturating_sub(rate);
        }

        running = (!state.entry(idx).is_done()).then_some(idx);
    }

    state.finish()
}

/*!
 * Round Robin
 * Single arrival-ordered ready queue with a fixed time quantum
 */

use crate::core::errors::SimResult;
use crate::core::types::{Process, Simulation};
use crate::scheduler::engine::{Arrivals, RunState};
use crate::scheduler::types::{Policy, SimOptions};
use std::collections::VecDeque;

/// Requires `options.quantum`; missing or non-positive values are rejected
/// before any simulation work starts.
pub fn simulate(processes: &[Process], options: &SimOptions) -> SimResult<Simulation> {
    let quantum = options.require_quantum(Policy::RoundRobin)?;

    let mut state = RunState::new(processes)?;
    let mut arrivals = Arrivals::new(&state);
    let mut queue = VecDeque::with_capacity(state.len());
    arrivals.admit(&state, &mut queue);

    while !state.all_done() {
        let Some(idx) = queue.pop_front() else {
            state.idle_until_next_arrival()?;
            arrivals.admit(&state, &mut queue);
            continue;
        };

        state.dispatch(idx, quantum.ticks(), None)?;

        // Arrivals during the slice queue up ahead of the preempted process
        arrivals.admit(&state, &mut queue);
        if !state.entry(idx).is_done() {
            queue.push_back(idx);
        }
    }

    state.finish()
}

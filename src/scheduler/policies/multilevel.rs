/*!
 * Multi-level Feedback Queues
 * Shared queue machinery for Feedback, Feedback-Variable and MLFQ
 */

use crate::core::errors::{SimError, SimResult};
use crate::core::types::{Process, Simulation, Time};
use crate::scheduler::engine::{Arrivals, RunState};
use std::collections::VecDeque;
use tracing::trace;

/// Run a demote-only multi-level queue
///
/// New arrivals always enter level 0. The head of the highest non-empty level
/// runs for `slice(level)` ticks (`None` = until done); a process with work
/// left is demoted one level, saturating at the bottom.
pub(super) fn run_multilevel(
    processes: &[Process],
    levels: usize,
    slice: impl Fn(usize) -> Option<Time>,
) -> SimResult<Simulation> {
    if levels == 0 {
        return Err(SimError::fault("multi-level queue configured with zero levels"));
    }

    let mut state = RunState::new(processes)?;
    let mut arrivals = Arrivals::new(&state);
    let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); levels];
    arrivals.admit(&state, &mut queues[0]);

    while !state.all_done() {
        let next = queues
            .iter_mut()
            .enumerate()
            .find_map(|(level, queue)| queue.pop_front().map(|idx| (level, idx)));

        let Some((level, idx)) = next else {
            state.idle_until_next_arrival()?;
            arrivals.admit(&state, &mut queues[0]);
            continue;
        };

        let ticks = slice(level).unwrap_or(state.entry(idx).remaining);
        state.dispatch(idx, ticks, Some(level))?;
        arrivals.admit(&state, &mut queues[0]);

        if !state.entry(idx).is_done() {
            let requeue = match demoted(level, levels) {
                Some(lower) => {
                    trace!(pid = state.entry(idx).pid, from = level, to = lower, "demote");
                    lower
                }
                None => level,
            };
            queues[requeue].push_back(idx);
        }
    }

    state.finish()
}

/// Next level down, or `None` when `level` is already the bottom queue
fn demoted(level: usize, levels: usize) -> Option<usize> {
    let lower = level + 1;
    (lower < levels).then_some(lower)
}

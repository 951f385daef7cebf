/*!
 * Highest Response Ratio Next
 * Non-preemptive, maximising (waiting + burst) / burst at each decision point
 */

use super::nonpreemptive::run_to_completion;
use crate::core::errors::SimResult;
use crate::core::types::{Process, Simulation, Time};
use crate::scheduler::engine::{Entry, RunState};
use crate::scheduler::types::SimOptions;
use std::cmp::Ordering;

pub fn simulate(processes: &[Process], _options: &SimOptions) -> SimResult<Simulation> {
    run_to_completion(processes, select)
}

/// Response ratio of a process that arrived at `arrival` evaluated at `now`
///
/// Always at least 1 once the process has arrived, and grows every tick it waits.
pub fn response_ratio(now: Time, arrival: Time, burst: Time) -> f64 {
    let waited = now.saturating_sub(arrival) as f64;
    let burst = burst.max(1) as f64;
    (waited + burst) / burst
}

fn select(state: &RunState) -> Option<usize> {
    let now = state.now();
    state.ready().min_by(|&a, &b| {
        let (a, b) = (state.entry(a), state.entry(b));
        // Higher ratio sorts first
        compare_ratio(now, b, a).then_with(|| a.arrival_key().cmp(&b.arrival_key()))
    })
}

/// Exact comparison of two response ratios by cross-multiplication
fn compare_ratio(now: Time, a: &Entry, b: &Entry) -> Ordering {
    let numerator = |e: &Entry| u128::from(now - e.arrival) + u128::from(e.burst);
    (numerator(a) * u128::from(b.burst)).cmp(&(numerator(b) * u128::from(a.burst)))
}

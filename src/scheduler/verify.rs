/*!
 * Outcome Verification
 * Checks the structural invariants every simulator output must satisfy
 */

use crate::core::errors::{SimError, SimResult};
use crate::core::types::{Process, Simulation};

/// Validate `sim` against the input it was produced from
///
/// Any violation is an engine defect and comes back as `SimulationFault`.
pub fn verify(processes: &[Process], sim: &Simulation) -> SimResult<()> {
    check_coverage(processes, sim)?;
    check_timeline(sim)?;
    check_results(sim)?;
    check_conservation(processes, sim)
}

fn check_coverage(processes: &[Process], sim: &Simulation) -> SimResult<()> {
    if sim.results.len() != processes.len() {
        return Err(SimError::fault(format!(
            "{} results for {} processes",
            sim.results.len(),
            processes.len()
        )));
    }

    if let Some(pair) = sim.results.windows(2).find(|w| w[0].pid > w[1].pid) {
        return Err(SimError::fault(format!(
            "results not sorted by pid: {} before {}",
            pair[0].pid, pair[1].pid
        )));
    }

    let mut expected: Vec<_> = processes.iter().map(|p| p.pid).collect();
    expected.sort_unstable();
    if sim.results.iter().map(|r| r.pid).ne(expected) {
        return Err(SimError::fault("result pids differ from input pids"));
    }
    Ok(())
}

fn check_timeline(sim: &Simulation) -> SimResult<()> {
    if let Some(first) = sim.timeline.first() {
        if first.start != 0 {
            return Err(SimError::fault(format!("timeline starts at t={}", first.start)));
        }
    }

    if let Some(seg) = sim.timeline.iter().find(|s| s.start >= s.end) {
        return Err(SimError::fault(format!(
            "empty or inverted segment [{}, {})",
            seg.start, seg.end
        )));
    }

    if let Some(pair) = sim.timeline.windows(2).find(|w| w[0].end != w[1].start) {
        return Err(SimError::fault(format!(
            "timeline gap or overlap between t={} and t={}",
            pair[0].end, pair[1].start
        )));
    }
    Ok(())
}

fn check_results(sim: &Simulation) -> SimResult<()> {
    for r in &sim.results {
        let consistent = r.completion >= r.arrival.saturating_add(r.burst)
            && r.turnaround == r.completion - r.arrival
            && r.waiting == r.turnaround - r.burst
            && r.response <= r.waiting;
        if !consistent {
            return Err(SimError::fault(format!("inconsistent metrics for process {}: {r:?}", r.pid)));
        }
    }
    Ok(())
}

fn check_conservation(processes: &[Process], sim: &Simulation) -> SimResult<()> {
    let demanded: u128 = processes.iter().map(|p| u128::from(p.burst)).sum();
    let served: u128 = sim
        .timeline
        .iter()
        .filter(|s| !s.occupant.is_idle())
        .map(|s| u128::from(s.duration()))
        .sum();

    if demanded != served {
        return Err(SimError::fault(format!(
            "timeline serves {served} ticks but processes demand {demanded}"
        )));
    }
    Ok(())
}

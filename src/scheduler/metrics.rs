/*!
 * Metrics Aggregator
 * Policy-agnostic averages and timeline figures
 */

use crate::core::types::{Averages, Dispatch, ProcessStats, Segment, TimelineStats};

/// Mean turnaround, waiting and response time over `results`
///
/// An empty set yields all-zero averages.
pub fn averages(results: &[ProcessStats]) -> Averages {
    if results.is_empty() {
        return Averages::default();
    }

    let (turnaround, waiting, response) =
        results
            .iter()
            .fold((0u128, 0u128, 0u128), |(t, w, r), stats| {
                (
                    t + u128::from(stats.turnaround),
                    w + u128::from(stats.waiting),
                    r + u128::from(stats.response),
                )
            });

    let count = results.len() as f64;
    Averages {
        avg_turnaround: turnaround as f64 / count,
        avg_waiting: waiting as f64 / count,
        avg_response: response as f64 / count,
    }
}

/// Utilisation, throughput and switch count for a finished run
pub fn timeline_stats(timeline: &[Segment], dispatches: &[Dispatch], completed: usize) -> TimelineStats {
    let makespan = timeline.last().map_or(0, |s| s.end);
    let busy_time: u64 = timeline
        .iter()
        .filter(|s| !s.occupant.is_idle())
        .map(Segment::duration)
        .sum();
    let idle_time = makespan.saturating_sub(busy_time);

    let context_switches = dispatches
        .windows(2)
        .filter(|pair| pair[0].pid != pair[1].pid)
        .count();

    let (cpu_utilization, throughput) = if makespan == 0 {
        (0.0, 0.0)
    } else {
        (
            busy_time as f64 / makespan as f64,
            completed as f64 / makespan as f64,
        )
    };

    TimelineStats {
        makespan,
        busy_time,
        idle_time,
        cpu_utilization,
        throughput,
        context_switches,
    }
}

/*!
 * Simulation Property Tests
 * Invariants every policy must hold on arbitrary workloads
 */

use cpu_sched_sim::scheduler::response_ratio;
use cpu_sched_sim::{
    Occupant, Policy, PolicyRun, Process, SimError, SimOptions, Time, REGISTRY,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Workloads with unique pids `1..=n`, arbitrary arrivals, bursts >= 1
fn workload() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u64..25, 1u64..9, -3i64..6), 1..10).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Process::new(i as u32 + 1, arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn run_all(processes: &[Process], quantum: i64) -> Vec<PolicyRun> {
    let options = SimOptions::new().with_quantum(quantum);
    REGISTRY
        .iter()
        .map(|info| {
            info.run(processes, &options)
                .unwrap_or_else(|err| panic!("{} failed: {err}", info.policy))
        })
        .collect()
}

fn busy_time(run: &PolicyRun, pid: u32) -> Time {
    run.simulation
        .timeline
        .iter()
        .filter(|s| s.occupant == Occupant::Process { pid })
        .map(|s| s.duration())
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_work_is_conserved(processes in workload(), quantum in 1i64..5) {
        for run in run_all(&processes, quantum) {
            for p in &processes {
                prop_assert_eq!(busy_time(&run, p.pid), p.burst, "{} pid {}", run.policy, p.pid);
            }
        }
    }

    #[test]
    fn prop_results_cover_input_in_pid_order(processes in workload(), quantum in 1i64..5) {
        let expected: Vec<u32> = processes.iter().map(|p| p.pid).collect();
        for run in run_all(&processes, quantum) {
            let pids: Vec<u32> = run.simulation.results.iter().map(|r| r.pid).collect();
            prop_assert_eq!(&pids, &expected, "{}", run.policy);
        }
    }

    #[test]
    fn prop_metric_ordering(processes in workload(), quantum in 1i64..5) {
        for run in run_all(&processes, quantum) {
            for r in &run.simulation.results {
                prop_assert!(r.arrival <= r.completion);
                prop_assert!(r.completion >= r.arrival + r.burst);
                prop_assert_eq!(r.turnaround, r.completion - r.arrival);
                prop_assert_eq!(r.waiting, r.turnaround - r.burst);
                prop_assert!(r.response <= r.waiting, "{} pid {}", run.policy, r.pid);
            }
        }
    }

    #[test]
    fn prop_timeline_is_gapless(processes in workload(), quantum in 1i64..5) {
        let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
        for run in run_all(&processes, quantum) {
            let timeline = &run.simulation.timeline;
            prop_assert_eq!(timeline[0].start, 0);
            prop_assert!(timeline.iter().all(|s| s.start < s.end));
            prop_assert!(timeline.windows(2).all(|w| w[0].end == w[1].start));

            let makespan = run.simulation.results.iter().map(|r| r.completion).max().unwrap_or(0);
            prop_assert_eq!(timeline[timeline.len() - 1].end, makespan);
            prop_assert!(makespan > latest_arrival);
        }
    }

    #[test]
    fn prop_runs_are_idempotent(processes in workload(), quantum in 1i64..5) {
        prop_assert_eq!(run_all(&processes, quantum), run_all(&processes, quantum));
    }

    #[test]
    fn prop_mlfq_levels_never_rise(processes in workload()) {
        let run = Policy::Mlfq.info().run(&processes, &SimOptions::new()).unwrap();
        for p in &processes {
            let levels: Vec<usize> = run
                .simulation
                .dispatches
                .iter()
                .filter(|d| d.pid == p.pid)
                .filter_map(|d| d.level)
                .collect();
            prop_assert!(!levels.is_empty());
            prop_assert!(levels.windows(2).all(|w| w[0] <= w[1]), "pid {} levels {:?}", p.pid, levels);
            prop_assert!(levels.iter().all(|&l| l < 3));
        }
    }

    #[test]
    fn prop_round_robin_rejects_non_positive_quantum(processes in workload(), quantum in -50i64..=0) {
        let err = Policy::RoundRobin
            .info()
            .run(&processes, &SimOptions::new().with_quantum(quantum))
            .unwrap_err();
        prop_assert_eq!(err, SimError::InvalidQuantum { policy: "rr".into(), value: quantum });
    }

    #[test]
    fn prop_hrrn_selects_every_process(processes in workload()) {
        let run = Policy::Hrrn.info().run(&processes, &SimOptions::new()).unwrap();
        let dispatched: BTreeSet<u32> = run.simulation.dispatches.iter().map(|d| d.pid).collect();
        let expected: BTreeSet<u32> = processes.iter().map(|p| p.pid).collect();
        prop_assert_eq!(dispatched, expected);
        prop_assert_eq!(run.simulation.dispatches.len(), processes.len());
    }

    #[test]
    fn prop_aging_waits_only_behind_other_work(processes in workload()) {
        let run = Policy::Aging.info().run(&processes, &SimOptions::new()).unwrap();
        let total: Time = processes.iter().map(|p| p.burst).sum();
        for r in &run.simulation.results {
            prop_assert!(r.response <= total - r.burst, "pid {} response {}", r.pid, r.response);
        }
    }

    #[test]
    fn prop_aging_overtakes_within_priority_gap(
        first in (0u64..10, 1u64..12, -3i64..6),
        second in (0u64..10, 1u64..12, -3i64..6),
        rate in 1u64..4,
    ) {
        let input = vec![
            Process::new(1, first.0, first.1).with_priority(first.2),
            Process::new(2, second.0, second.1).with_priority(second.2),
        ];
        let run = Policy::Aging
            .info()
            .run(&input, &SimOptions::new().with_aging_rate(rate))
            .unwrap();

        // A waiting process gains `rate` per tick on the fixed priority of the running one
        for (me, other) in [(&input[0], &input[1]), (&input[1], &input[0])] {
            let gap = u64::try_from((me.priority - other.priority).max(0)).unwrap();
            let response = run.simulation.result(me.pid).unwrap().response;
            prop_assert!(response <= gap / rate + 1, "pid {} response {} gap {}", me.pid, response, gap);
        }
    }

    #[test]
    fn prop_response_ratio_at_least_one(arrival in 0u64..100, wait in 0u64..100, burst in 1u64..50) {
        prop_assert!(response_ratio(arrival + wait, arrival, burst) >= 1.0);
    }
}

/*!
 * Comparison Tests
 * All-policy runs, parallel fan-out, and ranking
 */

use cpu_sched_sim::{compare, compare_with, CompareConfig, Metric, Policy, Process, SimError};
use pretty_assertions::assert_eq;

fn textbook() -> Vec<Process> {
    vec![
        Process::new(1, 0, 3),
        Process::new(2, 2, 6),
        Process::new(3, 4, 4),
        Process::new(4, 6, 5),
        Process::new(5, 8, 2),
    ]
}

#[test]
fn test_compare_covers_every_policy() {
    let comparison = compare(&textbook());

    assert!(comparison.failures.is_empty());
    assert_eq!(
        comparison.runs.keys().copied().collect::<Vec<_>>(),
        Policy::ALL.to_vec()
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = compare_with(&textbook(), &CompareConfig::default().parallel(false));
    let parallel = compare_with(&textbook(), &CompareConfig::default().parallel(true));

    assert_eq!(sequential, parallel);
}

#[test]
fn test_ranking_by_waiting() {
    let comparison = compare(&textbook());
    let ranked = comparison.ranked(Metric::Waiting);

    assert_eq!(ranked.len(), 10);
    assert_eq!(ranked[0].0, Policy::Srt);
    assert!((ranked[0].1 - 3.2).abs() < 1e-9);
    assert!(ranked.windows(2).all(|w| w[0].1 <= w[1].1));
    assert_eq!(comparison.best(Metric::Waiting), Some(Policy::Srt));
}

#[test]
fn test_sjf_waits_no_longer_than_fcfs() {
    let comparison = compare(&textbook());
    let fcfs = comparison.get(Policy::Fcfs).unwrap();
    let sjf = comparison.get(Policy::Sjf).unwrap();

    assert!(
        Metric::Waiting.of(&sjf.simulation.averages)
            <= Metric::Waiting.of(&fcfs.simulation.averages)
    );
}

#[test]
fn test_quantum_from_config_reaches_round_robin() {
    let comparison = compare_with(&textbook(), &CompareConfig::with_quantum(1));
    let rr = comparison.get(Policy::RoundRobin).unwrap();

    let completions: Vec<_> = rr.simulation.results.iter().map(|r| r.completion).collect();
    assert_eq!(completions, vec![4, 18, 17, 20, 15]);
}

#[test]
fn test_empty_input_fails_everywhere() {
    let comparison = compare(&[]);

    assert!(comparison.runs.is_empty());
    assert_eq!(comparison.failures.len(), 10);
    assert!(comparison
        .failures
        .values()
        .all(|err| *err == SimError::EmptyInput));
    assert_eq!(comparison.best(Metric::Turnaround), None);
}

/*!
 * Policy Comparison
 * Run every registered policy on the same workload and rank the outcomes
 */

use super::registry::{PolicyInfo, PolicyRun, REGISTRY};
use super::types::{Policy, SimOptions};
use crate::core::config::CompareConfig;
use crate::core::errors::{SimError, SimResult};
use crate::core::types::{Averages, Process};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::thread;
use tracing::{info, warn};

/// Average used to rank policies (lower is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Turnaround,
    Waiting,
    Response,
}

impl Metric {
    #[inline(always)]
    pub fn of(&self, averages: &Averages) -> f64 {
        match self {
            Self::Turnaround => averages.avg_turnaround,
            Self::Waiting => averages.avg_waiting,
            Self::Response => averages.avg_response,
        }
    }
}

/// Outcome of running all policies on one workload
///
/// Policies that failed are left out of `runs` and kept in `failures`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Comparison {
    pub runs: BTreeMap<Policy, PolicyRun>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub failures: BTreeMap<Policy, SimError>,
}

impl Comparison {
    pub fn get(&self, policy: Policy) -> Option<&PolicyRun> {
        self.runs.get(&policy)
    }

    /// Successful policies ordered by `metric`, ties in registry order
    pub fn ranked(&self, metric: Metric) -> Vec<(Policy, f64)> {
        let mut ranked: Vec<(Policy, f64)> = self
            .runs
            .iter()
            .map(|(policy, run)| (*policy, metric.of(&run.simulation.averages)))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }

    /// Policy with the lowest `metric`, if any run succeeded
    pub fn best(&self, metric: Metric) -> Option<Policy> {
        self.ranked(metric).first().map(|(policy, _)| *policy)
    }

    fn insert(&mut self, policy: Policy, outcome: SimResult<PolicyRun>) {
        match outcome {
            Ok(run) => {
                self.runs.insert(policy, run);
            }
            Err(e) => {
                warn!(policy = %policy, error = %e, "policy skipped in comparison");
                self.failures.insert(policy, e);
            }
        }
    }
}

/// Run every policy with default parameters
pub fn compare(processes: &[Process]) -> Comparison {
    compare_with(processes, &CompareConfig::default())
}

/// Run every policy using `config` for quantum, aging rate, and parallelism
pub fn compare_with(processes: &[Process], config: &CompareConfig) -> Comparison {
    let options = SimOptions::new()
        .with_quantum(i64::try_from(config.quantum).unwrap_or(i64::MAX))
        .with_aging_rate(config.aging_rate);

    info!(
        processes = processes.len(),
        quantum = config.quantum,
        parallel = config.parallel,
        "comparing all policies"
    );

    let outcomes = if config.parallel {
        run_parallel(processes, &options)
    } else {
        REGISTRY
            .iter()
            .map(|info| (info.policy, info.run(processes, &options)))
            .collect()
    };

    let mut comparison = Comparison::default();
    for (policy, outcome) in outcomes {
        comparison.insert(policy, outcome);
    }
    comparison
}

/// One scoped worker per policy, results collected over a channel
fn run_parallel(processes: &[Process], options: &SimOptions) -> Vec<(Policy, SimResult<PolicyRun>)> {
    let (tx, rx) = flume::bounded(REGISTRY.len());

    thread::scope(|scope| {
        for info in REGISTRY.iter() {
            let tx = tx.clone();
            scope.spawn(move || run_one(info, processes, options, &tx));
        }
    });
    drop(tx);

    rx.drain().collect()
}

fn run_one(
    info: &PolicyInfo,
    processes: &[Process],
    options: &SimOptions,
    tx: &flume::Sender<(Policy, SimResult<PolicyRun>)>,
) {
    // Receiver outlives the scope, so a send can only fail if it was dropped
    if tx.send((info.policy, info.run(processes, options))).is_err() {
        warn!(policy = %info.policy, "comparison receiver dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::policies::fixtures::textbook;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compare_runs_every_policy() {
        let comparison = compare(&textbook());
        assert_eq!(comparison.runs.len(), 10);
        assert!(comparison.failures.is_empty());
        assert_eq!(comparison.runs.keys().copied().collect::<Vec<_>>(), Policy::ALL.to_vec());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = compare_with(&textbook(), &CompareConfig::default());
        let parallel = compare_with(&textbook(), &CompareConfig::default().parallel(true));
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_failures_are_skipped_not_fatal() {
        let comparison = compare(&[]);
        assert!(comparison.runs.is_empty());
        assert_eq!(comparison.failures.len(), 10);
        assert!(comparison
            .failures
            .values()
            .all(|e| matches!(e, SimError::EmptyInput)));
    }

    #[test]
    fn test_ranking() {
        let comparison = compare(&textbook());
        let ranked = comparison.ranked(Metric::Waiting);
        assert_eq!(ranked.len(), 10);
        assert!(ranked.windows(2).all(|w| w[0].1 <= w[1].1));
        // SRT minimises average waiting on this workload
        assert_eq!(comparison.best(Metric::Waiting), Some(Policy::Srt));
    }
}

/*!
 * Policy Registry
 * Dispatch table mapping each policy to its metadata and simulator
 */

use super::engine::safety_horizon;
use super::policies::{
    aging, fcfs, feedback, feedback_variable, hrrn, mlfq, priority, rr, sjf, srt, SimulateFn,
};
use super::types::{Policy, SimOptions};
use super::verify::verify;
use crate::core::errors::{SimError, SimResult};
use crate::core::types::{Process, Simulation};
use crate::monitoring::SimulationSpan;
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

/// Display metadata, parameter requirements, and simulator for one policy
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInfo {
    pub policy: Policy,
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub preemptive: bool,
    pub requires_quantum: bool,
    pub priority_aware: bool,
    #[serde(skip)]
    simulate: SimulateFn,
}

/// Every policy, in `Policy` declaration order
pub static REGISTRY: [PolicyInfo; 10] = [
    PolicyInfo {
        policy: Policy::Fcfs,
        name: "First Come First Served",
        abbreviation: "FCFS",
        preemptive: false,
        requires_quantum: false,
        priority_aware: false,
        simulate: fcfs::simulate,
    },
    PolicyInfo {
        policy: Policy::Sjf,
        name: "Shortest Job First",
        abbreviation: "SJF",
        preemptive: false,
        requires_quantum: false,
        priority_aware: false,
        simulate: sjf::simulate,
    },
    PolicyInfo {
        policy: Policy::Srt,
        name: "Shortest Remaining Time",
        abbreviation: "SRT",
        preemptive: true,
        requires_quantum: false,
        priority_aware: false,
        simulate: srt::simulate,
    },
    PolicyInfo {
        policy: Policy::RoundRobin,
        name: "Round Robin",
        abbreviation: "RR",
        preemptive: true,
        requires_quantum: true,
        priority_aware: false,
        simulate: rr::simulate,
    },
    PolicyInfo {
        policy: Policy::Hrrn,
        name: "Highest Response Ratio Next",
        abbreviation: "HRRN",
        preemptive: false,
        requires_quantum: false,
        priority_aware: false,
        simulate: hrrn::simulate,
    },
    PolicyInfo {
        policy: Policy::Priority,
        name: "Priority",
        abbreviation: "PRI",
        preemptive: false,
        requires_quantum: false,
        priority_aware: true,
        simulate: priority::simulate,
    },
    PolicyInfo {
        policy: Policy::Feedback,
        name: "Feedback",
        abbreviation: "FB",
        preemptive: true,
        requires_quantum: false,
        priority_aware: false,
        simulate: feedback::simulate,
    },
    PolicyInfo {
        policy: Policy::FeedbackVariable,
        name: "Feedback (Variable Quantum)",
        abbreviation: "FBV",
        preemptive: true,
        requires_quantum: false,
        priority_aware: false,
        simulate: feedback_variable::simulate,
    },
    PolicyInfo {
        policy: Policy::Aging,
        name: "Priority with Aging",
        abbreviation: "AGE",
        preemptive: true,
        requires_quantum: false,
        priority_aware: true,
        simulate: aging::simulate,
    },
    PolicyInfo {
        policy: Policy::Mlfq,
        name: "Multi-Level Feedback Queue",
        abbreviation: "MLFQ",
        preemptive: true,
        requires_quantum: false,
        priority_aware: false,
        simulate: mlfq::simulate,
    },
];

impl Policy {
    /// Registry entry for this policy
    #[inline(always)]
    pub fn info(&self) -> &'static PolicyInfo {
        &REGISTRY[*self as usize]
    }
}

/// Look up a policy by registry key or alias
pub fn lookup(key: &str) -> SimResult<&'static PolicyInfo> {
    Policy::from_key(key).map(|policy| policy.info())
}

/// Run the policy registered under `key`
pub fn run(key: &str, processes: &[Process], options: &SimOptions) -> SimResult<PolicyRun> {
    lookup(key)?.run(processes, options)
}

/// Simulator output tagged with the policy's display metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRun {
    pub policy: Policy,
    #[serde(rename = "policyDisplayName")]
    pub display_name: &'static str,
    #[serde(rename = "policyAbbreviation")]
    pub abbreviation: &'static str,
    #[serde(flatten)]
    pub simulation: Simulation,
}

impl PolicyInfo {
    /// Validate inputs, simulate, and check the outcome's invariants
    pub fn run(&self, processes: &[Process], options: &SimOptions) -> SimResult<PolicyRun> {
        let span = SimulationSpan::new(self.policy, processes.len());
        let _entered = span.enter();

        let outcome = self.run_checked(processes, options);
        span.record_outcome(&outcome);
        outcome
    }

    /// Call the simulator directly, without input checks or verification
    pub fn simulate(&self, processes: &[Process], options: &SimOptions) -> SimResult<Simulation> {
        (self.simulate)(processes, options)
    }

    fn run_checked(&self, processes: &[Process], options: &SimOptions) -> SimResult<PolicyRun> {
        validate_processes(processes)?;
        if self.requires_quantum {
            options.require_quantum(self.policy)?;
        }

        let simulation = self.simulate(processes, options)?;
        verify(processes, &simulation)?;

        Ok(PolicyRun {
            policy: self.policy,
            display_name: self.name,
            abbreviation: self.abbreviation,
            simulation,
        })
    }
}

/// Semantic input checks shared by every policy
pub fn validate_processes(processes: &[Process]) -> SimResult<()> {
    if processes.is_empty() {
        return Err(SimError::EmptyInput);
    }

    if let Some(p) = processes.iter().find(|p| p.burst == 0) {
        return Err(SimError::InvalidProcess {
            pid: p.pid,
            reason: "burst time must be positive".to_string(),
        });
    }
    safety_horizon(processes)?;

    let mut seen = HashSet::with_capacity(processes.len());
    if let Some(p) = processes.iter().find(|p| !seen.insert(p.pid)) {
        warn!(pid = p.pid, "duplicate pid in input; results will contain it more than once");
    }

    Ok(())
}

/*!
 * Scheduler Types
 * Policy enumeration, run options, and quantum validation
 */

use crate::core::errors::{SimError, SimResult};
use crate::core::limits::DEFAULT_AGING_RATE;
use crate::core::types::Time;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// The closed set of scheduling policies
///
/// Declaration order is registry order; `compare` reports in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    /// First-come-first-served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Shortest remaining time (preemptive SJF)
    Srt,
    /// Round robin with a caller-supplied quantum
    RoundRobin,
    /// Highest response ratio next
    Hrrn,
    /// Strict non-preemptive priority
    Priority,
    /// Five-level feedback, quantum 1 everywhere
    Feedback,
    /// Five-level feedback, quantum 2^level
    FeedbackVariable,
    /// Preemptive priority with aging
    Aging,
    /// Fixed three-level feedback queue (2, 4, run to completion)
    Mlfq,
}

impl Policy {
    pub const ALL: [Policy; 10] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srt,
        Self::RoundRobin,
        Self::Hrrn,
        Self::Priority,
        Self::Feedback,
        Self::FeedbackVariable,
        Self::Aging,
        Self::Mlfq,
    ];

    /// Parse from a registry key or one of its aliases
    pub fn from_key(s: &str) -> SimResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "spn" => Ok(Self::Sjf),
            "srt" | "srtf" => Ok(Self::Srt),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "hrrn" => Ok(Self::Hrrn),
            "priority" | "prio" => Ok(Self::Priority),
            "feedback" | "fb" => Ok(Self::Feedback),
            "feedback_variable" | "feedback-variable" | "fbv" => Ok(Self::FeedbackVariable),
            "aging" => Ok(Self::Aging),
            "mlfq" => Ok(Self::Mlfq),
            _ => Err(SimError::UnknownPolicy { key: s.to_string() }),
        }
    }

    /// Canonical registry key
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srt => "srt",
            Self::RoundRobin => "rr",
            Self::Hrrn => "hrrn",
            Self::Priority => "priority",
            Self::Feedback => "feedback",
            Self::FeedbackVariable => "feedback_variable",
            Self::Aging => "aging",
            Self::Mlfq => "mlfq",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_key(&s).map_err(serde::de::Error::custom)
    }
}

/// Validated time quantum (always at least 1 tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quantum(Time);

impl Quantum {
    /// Validate a raw caller-supplied quantum for `policy`
    pub fn new(policy: Policy, raw: i64) -> SimResult<Self> {
        if raw <= 0 {
            return Err(SimError::InvalidQuantum {
                policy: policy.as_str().to_string(),
                value: raw,
            });
        }
        Ok(Self(raw as Time))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Time {
        self.0
    }
}

/// Options recognised by the simulators
///
/// `quantum` is only read by quantum-based policies and ignored otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimOptions {
    #[serde(default)]
    pub quantum: Option<i64>,
    #[serde(default)]
    pub aging_rate: Option<u64>,
}

impl SimOptions {
    pub const fn new() -> Self {
        Self {
            quantum: None,
            aging_rate: None,
        }
    }

    pub const fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    pub const fn with_aging_rate(mut self, rate: u64) -> Self {
        self.aging_rate = Some(rate);
        self
    }

    /// Resolve the quantum for a policy that cannot run without one
    pub fn require_quantum(&self, policy: Policy) -> SimResult<Quantum> {
        match self.quantum {
            None => Err(SimError::MissingQuantum {
                policy: policy.as_str().to_string(),
            }),
            Some(raw) => Quantum::new(policy, raw),
        }
    }

    /// Aging decrement per waiting tick; a zero rate would never age, so it
    /// falls back to the default
    pub fn aging_rate(&self) -> u64 {
        match self.aging_rate {
            None => DEFAULT_AGING_RATE,
            Some(0) => {
                warn!(default = DEFAULT_AGING_RATE, "aging rate must be positive, using default");
                DEFAULT_AGING_RATE
            }
            Some(rate) => rate,
        }
    }
}

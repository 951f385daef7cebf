/*!
 * Comparison Configuration
 *
 * Runtime configuration for `compare_with`, loadable from the environment
 */

use super::limits::{DEFAULT_AGING_RATE, DEFAULT_COMPARE_QUANTUM};
use crate::core::types::Time;
use std::str::FromStr;
use tracing::warn;

/// Environment variable overriding the comparison quantum
pub const ENV_QUANTUM: &str = "SCHEDSIM_QUANTUM";
/// Environment variable overriding the aging rate
pub const ENV_AGING_RATE: &str = "SCHEDSIM_AGING_RATE";
/// Environment variable enabling the parallel comparison path
pub const ENV_PARALLEL: &str = "SCHEDSIM_PARALLEL";

/// Comparison configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareConfig {
    /// Quantum handed to every quantum-based policy
    pub quantum: Time,
    /// Aging decrement per waiting tick
    pub aging_rate: u64,
    /// Run each policy on its own worker thread
    pub parallel: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_COMPARE_QUANTUM,
            aging_rate: DEFAULT_AGING_RATE,
            parallel: false,
        }
    }
}

impl CompareConfig {
    /// Sequential comparison with a custom quantum
    pub const fn with_quantum(quantum: Time) -> Self {
        Self {
            quantum,
            aging_rate: DEFAULT_AGING_RATE,
            parallel: false,
        }
    }

    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load overrides from the environment, keeping defaults for anything
    /// missing or malformed
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let quantum = parse_or(&lookup, ENV_QUANTUM, defaults.quantum);
        let quantum = if quantum == 0 {
            warn!(var = ENV_QUANTUM, "quantum must be positive, using default");
            defaults.quantum
        } else {
            quantum
        };

        let aging_rate = parse_or(&lookup, ENV_AGING_RATE, defaults.aging_rate);
        let aging_rate = if aging_rate == 0 {
            warn!(var = ENV_AGING_RATE, "aging rate must be positive, using default");
            defaults.aging_rate
        } else {
            aging_rate
        };

        Self {
            quantum,
            aging_rate,
            parallel: lookup(ENV_PARALLEL)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.parallel),
        }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(var = key, value = %raw, "ignoring malformed value");
            default
        }),
    }
}

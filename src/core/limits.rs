/*!
 * Simulation Limits and Constants
 *
 * Centralized location for the fixed parameters of the scheduling policies.
 * Organized by policy family.
 */

use crate::core::types::Time;
use std::time::Duration;

// =============================================================================
// COMPARISON DEFAULTS
// =============================================================================

/// Quantum handed to quantum-based policies by `compare`
pub const DEFAULT_COMPARE_QUANTUM: Time = 2;

// =============================================================================
// MULTI-LEVEL FEEDBACK
// =============================================================================

/// Number of ready queues for Feedback and Feedback-Variable
pub const FEEDBACK_LEVELS: usize = 5;

/// Slice length at every Feedback level
pub const FEEDBACK_QUANTUM: Time = 1;

/// Fixed three-level MLFQ: level 0 and 1 are round robin, level 2 runs to completion
pub const MLFQ_QUANTA: [Option<Time>; 3] = [Some(2), Some(4), None];

// =============================================================================
// AGING
// =============================================================================

/// Priority improvement applied to each waiting process per tick
pub const DEFAULT_AGING_RATE: u64 = 1;

// =============================================================================
// OBSERVABILITY
// =============================================================================

/// Runs slower than this are logged at warn level
pub const SLOW_RUN_THRESHOLD: Duration = Duration::from_millis(10);

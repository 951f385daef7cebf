/*!
 * Scheduler Module
 * Policy simulators, metrics, and the registry that exposes them uniformly
 */

pub mod compare;
pub mod metrics;
pub mod policies;
pub mod registry;
pub mod timeline;
pub mod types;
pub mod verify;

mod engine;

// Re-export public API
pub use compare::{compare, compare_with, Comparison, Metric};
pub use policies::hrrn::response_ratio;
pub use registry::{lookup, run, validate_processes, PolicyInfo, PolicyRun, REGISTRY};
pub use timeline::normalize_timeline;
pub use types::{Policy, Quantum, SimOptions};
pub use verify::verify;

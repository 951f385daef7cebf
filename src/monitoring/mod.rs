/*!
 * Monitoring Module
 * Structured logging for simulation runs
 */

pub mod tracer;

pub use tracer::{generate_trace_id, init_tracing, SimulationSpan};

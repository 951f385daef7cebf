/*!
 * Simulation Engine
 * Working state shared by every policy simulator
 */

mod arrivals;
mod entry;
mod state;

pub(crate) use arrivals::Arrivals;
pub(crate) use entry::Entry;
pub(crate) use state::{safety_horizon, RunState};

/*!
 * Core Module
 * Fundamental simulation types, error handling, and configuration
 */

pub mod config;
pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use config::CompareConfig;
pub use errors::*;
pub use types::*;

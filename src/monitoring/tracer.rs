/*!
 * Structured Tracing
 * Subscriber setup and per-run spans using the tracing crate
 *
 * Features:
 * - Correlation ID per simulation run
 * - JSON-formatted logs for structured parsing
 * - Slow-run warnings with elapsed time
 */

use crate::core::errors::SimResult;
use crate::core::limits::SLOW_RUN_THRESHOLD;
use crate::scheduler::Policy;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level, Span};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Environment variable switching the subscriber to JSON output
pub const ENV_TRACE_JSON: &str = "SCHEDSIM_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHEDSIM_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so stdout stays clean JSON output
    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique trace ID for run correlation
pub fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one policy run, with structured fields
pub struct SimulationSpan {
    span: Span,
    start: Instant,
    policy: Policy,
    trace_id: String,
}

impl SimulationSpan {
    pub fn new(policy: Policy, processes: usize) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::DEBUG,
            "simulation",
            trace_id = %trace_id,
            policy = policy.as_str(),
            processes = processes,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            policy,
            trace_id,
        }
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record whether the run succeeded
    pub fn record_outcome<T>(&self, outcome: &SimResult<T>) {
        match outcome {
            Ok(_) => {
                self.span.record("result", "success");
            }
            Err(e) => {
                self.span.record("result", "error");
                self.span.record("error", e.kind());
            }
        }
    }
}

impl Drop for SimulationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration > SLOW_RUN_THRESHOLD {
            warn!(
                trace_id = %self.trace_id,
                policy = %self.policy,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow simulation run"
            );
        } else {
            debug!(
                trace_id = %self.trace_id,
                policy = %self.policy,
                duration_us = duration.as_micros() as u64,
                "simulation completed"
            );
        }
    }
}

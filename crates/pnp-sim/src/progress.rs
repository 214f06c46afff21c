//! Step-progress events for long runs.
//!
//! Purely observational: callbacks receive a copy of the counters and
//! cannot influence the computed results.

use pnp_core::Real;

/// Emitted after each completed step when a progress callback is
/// installed on the run.
#[derive(Debug, Clone)]
pub struct StepProgress {
    /// 1-based index of the step that just completed.
    pub step: usize,
    /// Total steps requested for this run.
    pub total_steps: usize,
    /// Simulated time after this step.
    pub sim_time: Real,
    /// `step / total_steps`, in `[0, 1]`.
    pub fraction_complete: f64,
    /// Whether this step produced a snapshot (compression).
    pub recorded: bool,
}

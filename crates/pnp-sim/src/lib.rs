//! Fixed-step simulation engine for population dynamics models.
//!
//! Provides:
//! - Pluggable fixed-step integrators (forward Euler, Ralston's
//!   2nd-order Runge-Kutta, discrete map iteration)
//! - A run loop that records a time series of state snapshots with
//!   optional output compression
//! - Observational step-progress events for long runs
//!
//! A run is single-threaded and synchronous: it clones the model's
//! initial state, advances it step by step, and returns the completed
//! [`TimeSeries`]. Rate-function failures abort the run with no partial
//! result; non-finite values propagate into the series unchecked.

pub mod error;
pub mod integrator;
pub mod progress;
pub mod series;
pub mod sim;

pub use error::{SimError, SimResult};
pub use integrator::{DiscreteMap, ForwardEuler, Integrator, Ralston2, integrator_for};
pub use progress::StepProgress;
pub use series::{Snapshot, TimeSeries};
pub use sim::{SimOptions, run_sim, run_sim_with_progress};

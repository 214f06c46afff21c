//! Model definitions for population dynamics simulations.
//!
//! A model is an immutable description of a dynamical system: a named set
//! of state variables with initial values, a named set of constants, one
//! rate function per variable, and a choice of dynamics (continuous with
//! an integration method, or a discrete map).
//!
//! Models are built once via [`ModelBuilder`] and reused across runs; the
//! engine in `pnp-sim` clones the initial state for each run.

pub mod catalog;
pub mod error;
pub mod model;
pub mod rate;
pub mod state;

pub use error::{ModelError, ModelResult};
pub use model::{Dynamics, Method, ModelBuilder, ModelSpec};
pub use rate::RateFn;
pub use state::{Constants, State};

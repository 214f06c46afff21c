//! Per-variable rate capability.

use pnp_core::Real;

use crate::error::ModelResult;
use crate::state::{Constants, State};

/// Computes one variable's rate from the full current state and constants.
///
/// For continuous models this is the instantaneous derivative; for
/// discrete models it is the variable's next value directly.
///
/// Implementations must be pure: no side effects, and no assumptions
/// about the order in which other variables are evaluated. The engine
/// always passes the pre-step state, so a rate reading a coupled
/// variable never observes a partially updated step.
pub trait RateFn {
    fn rate(&self, state: &State, constants: &Constants) -> ModelResult<Real>;
}

impl<F> RateFn for F
where
    F: Fn(&State, &Constants) -> ModelResult<Real>,
{
    fn rate(&self, state: &State, constants: &Constants) -> ModelResult<Real> {
        self(state, constants)
    }
}

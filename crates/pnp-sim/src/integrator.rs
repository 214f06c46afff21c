//! Fixed-step integrators.
//!
//! Every stepper evaluates all rate functions against the same pre-step
//! state before writing anything back, so a rate reading a coupled
//! variable never observes a partially updated step.

use pnp_core::Real;
use pnp_model::{Dynamics, Method, ModelSpec, State};

use crate::error::SimResult;

/// Trait for steppers that advance a model's state by one step.
pub trait Integrator {
    /// Produce the next state from `state` with step size `dt`.
    fn step(&self, model: &ModelSpec, state: &State, dt: Real) -> SimResult<State>;
}

/// Select the stepper for a model's dynamics.
///
/// Resolution happens once, before the run loop; method-name strings
/// have already been parsed (and rejected) by `Method::parse` at this
/// point, so there is no per-step dispatch on names.
pub fn integrator_for(dynamics: Dynamics) -> Box<dyn Integrator> {
    match dynamics {
        Dynamics::Continuous(Method::Euler) => Box::new(ForwardEuler),
        Dynamics::Continuous(Method::Ralston) => Box::new(Ralston2),
        Dynamics::Discrete => Box::new(DiscreteMap),
    }
}

/// Evaluate every rate function against `state`, in variable order.
fn eval_rates(model: &ModelSpec, state: &State) -> SimResult<Vec<Real>> {
    let mut out = Vec::with_capacity(state.len());
    for (_, rate) in model.rates() {
        out.push(rate.rate(state, model.constants())?);
    }
    Ok(out)
}

/// Forward Euler (explicit, 1st order, one rate call per variable per step).
#[derive(Clone, Copy, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step(&self, model: &ModelSpec, state: &State, dt: Real) -> SimResult<State> {
        let derivs = eval_rates(model, state)?;

        let mut next = state.clone();
        for ((var, _), d) in model.rates().zip(&derivs) {
            next.set(var, state.var(var)? + d * dt)?;
        }
        Ok(next)
    }
}

/// Ralston's 2nd-order Runge-Kutta.
///
/// Two-stage tableau with c2 = 2/3 and combination weights 1/4, 3/4
/// (the minimum-truncation-error choice for second order).
#[derive(Clone, Copy, Debug)]
pub struct Ralston2;

const RALSTON_C2: Real = 2.0 / 3.0;

impl Integrator for Ralston2 {
    fn step(&self, model: &ModelSpec, state: &State, dt: Real) -> SimResult<State> {
        // Stage 1: k1 = f(x)
        let k1 = eval_rates(model, state)?;

        // Stage 2 point: x + (2/3) * dt * k1
        let mut mid = state.clone();
        for ((var, _), k) in model.rates().zip(&k1) {
            mid.set(var, state.var(var)? + RALSTON_C2 * dt * k)?;
        }

        // Stage 2: k2 = f(x + (2/3) dt k1)
        let k2 = eval_rates(model, &mid)?;

        // x_next = x + dt * (k1/4 + 3*k2/4)
        let mut next = state.clone();
        for (((var, _), k1v), k2v) in model.rates().zip(&k1).zip(&k2) {
            next.set(var, state.var(var)? + dt * (k1v / 4.0 + 3.0 * k2v / 4.0))?;
        }
        Ok(next)
    }
}

/// Discrete map stepper: x_{n+1} = f(x_n), per variable.
///
/// Rate functions return next values directly; `dt` only scales the
/// recorded time axis. The new state replaces the old atomically at the
/// step boundary.
#[derive(Clone, Copy, Debug)]
pub struct DiscreteMap;

impl Integrator for DiscreteMap {
    fn step(&self, model: &ModelSpec, state: &State, _dt: Real) -> SimResult<State> {
        let values = eval_rates(model, state)?;

        let mut next = state.clone();
        for ((var, _), v) in model.rates().zip(&values) {
            next.set(var, *v)?;
        }
        Ok(next)
    }
}

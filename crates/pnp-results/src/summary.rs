//! Parameter and run-configuration summary for presentation.

use std::fmt;

use pnp_core::Real;
use pnp_model::ModelSpec;
use pnp_sim::SimOptions;

/// Structured summary of a model and the run parameters applied to it.
///
/// Purely presentational: built from the model definition and options,
/// never from simulation results.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub name: String,
    pub dynamics: String,
    pub variables: Vec<(String, Real)>,
    pub constants: Vec<(String, Real)>,
    pub steps: usize,
    pub dt: Real,
    pub record_every: usize,
}

/// Collect a model's parameters and the run options into a summary.
pub fn summarize(model: &ModelSpec, opts: &SimOptions) -> ModelSummary {
    ModelSummary {
        name: model.name().to_string(),
        dynamics: model.dynamics().to_string(),
        variables: model
            .initial_state()
            .iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        constants: model
            .constants()
            .iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        steps: opts.steps,
        dt: opts.dt,
        record_every: opts.record_every,
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {} ({})", self.name, self.dynamics)?;

        writeln!(f, "\nInitial populations:")?;
        for (name, value) in &self.variables {
            writeln!(f, "  {:<24} {}", name, value)?;
        }

        if !self.constants.is_empty() {
            writeln!(f, "\nConstants:")?;
            for (name, value) in &self.constants {
                writeln!(f, "  {:<24} {}", name, value)?;
            }
        }

        writeln!(f, "\nRun parameters:")?;
        writeln!(f, "  {:<24} {}", "steps", self.steps)?;
        writeln!(f, "  {:<24} {}", "step size", self.dt)?;
        write!(f, "  {:<24} {}", "record every", self.record_every)
    }
}

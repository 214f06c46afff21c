//! Reference ecosystems.
//!
//! Each function builds one example configuration; none of them is part
//! of the reusable engine. Callers (the CLI, tests) pick models
//! explicitly; there is no ambient registry.

use crate::error::{ModelError, ModelResult};
use crate::model::{Dynamics, Method, ModelSpec};
use crate::state::{Constants, State};

/// Names accepted by [`by_name`], in presentation order.
pub const NAMES: &[&str] = &[
    "lotka_volterra",
    "limited_growth",
    "grass_chain",
    "host_parasitoid",
];

/// Look up a catalog model by name.
pub fn by_name(name: &str) -> ModelResult<ModelSpec> {
    match name {
        "lotka_volterra" => lotka_volterra(),
        "limited_growth" => limited_growth(),
        "grass_chain" => grass_chain(),
        "host_parasitoid" => host_parasitoid(),
        _ => Err(ModelError::UnknownModel {
            name: name.to_string(),
        }),
    }
}

/// Two-species Lotka-Volterra style model: rabbits grow linearly and
/// are hunted by wolves; wolves grow with prey intake and starve at a
/// fixed rate.
pub fn lotka_volterra() -> ModelResult<ModelSpec> {
    ModelSpec::builder("lotka_volterra")
        .variable("rabbit", 1.0)
        .variable("wolf", 1.0)
        .constant("rabbit_growth", 1.0)
        .constant("wolf_hunt", 1.0)
        .constant("rabbit_value", 1.0)
        .constant("wolf_hunger", 1.0)
        .rate("rabbit", |s: &State, c: &Constants| {
            Ok(s.var("rabbit")? * (c.value("rabbit_growth")? - c.value("wolf_hunt")? * s.var("wolf")?))
        })
        .rate("wolf", |s: &State, c: &Constants| {
            Ok(s.var("wolf")? * (c.value("rabbit_value")? * s.var("rabbit")? - c.value("wolf_hunger")?))
        })
        .dynamics(Dynamics::Continuous(Method::Euler))
        .build()
}

/// Lotka-Volterra variant where each species' per-capita growth is
/// capped by a `min` against a fixed ceiling, preventing unbounded
/// exponential growth.
pub fn limited_growth() -> ModelResult<ModelSpec> {
    ModelSpec::builder("limited_growth")
        .variable("rabbit", 1.0)
        .variable("wolf", 1.0)
        .constant("rabbit_growth", 1.0)
        .constant("max_rabbit_growth", 0.001)
        .constant("wolf_hunt", 1.0)
        .constant("max_wolf_growth", 0.001)
        .constant("rabbit_value", 1.0)
        .constant("wolf_hunger", 1.0)
        .rate("rabbit", |s: &State, c: &Constants| {
            let per_capita = c.value("rabbit_growth")? - c.value("wolf_hunt")? * s.var("wolf")?;
            Ok(s.var("rabbit")? * per_capita.min(c.value("max_rabbit_growth")?))
        })
        .rate("wolf", |s: &State, c: &Constants| {
            let per_capita = c.value("rabbit_value")? * s.var("rabbit")? - c.value("wolf_hunger")?;
            Ok(s.var("wolf")? * per_capita.min(c.value("max_wolf_growth")?))
        })
        .dynamics(Dynamics::Continuous(Method::Euler))
        .build()
}

/// Three-level food chain: grass feeds rabbits, rabbits feed wolves.
/// Each level's growth is gated by the one below and depleted by the
/// one above.
pub fn grass_chain() -> ModelResult<ModelSpec> {
    ModelSpec::builder("grass_chain")
        .variable("grass", 1.0)
        .variable("rabbit", 1.0)
        .variable("wolf", 1.0)
        .constant("grass_growth", 1.0)
        .constant("rabbit_hunt", 1.0)
        .constant("grass_value", 1.0)
        .constant("rabbit_hunger", 0.5)
        .constant("wolf_hunt", 0.5)
        .constant("rabbit_value", 1.0)
        .constant("wolf_hunger", 1.0)
        .rate("grass", |s: &State, c: &Constants| {
            Ok(s.var("grass")? * (c.value("grass_growth")? - c.value("rabbit_hunt")? * s.var("rabbit")?))
        })
        .rate("rabbit", |s: &State, c: &Constants| {
            Ok(s.var("rabbit")?
                * (c.value("grass_value")? * s.var("grass")?
                    - c.value("rabbit_hunger")?
                    - c.value("wolf_hunt")? * s.var("wolf")?))
        })
        .rate("wolf", |s: &State, c: &Constants| {
            Ok(s.var("wolf")? * (c.value("rabbit_value")? * s.var("rabbit")? - c.value("wolf_hunger")?))
        })
        .dynamics(Dynamics::Continuous(Method::Euler))
        .build()
}

/// Discrete host-parasitoid map (Nicholson-Bailey form).
///
/// Rates compute next-step values directly: hosts that escape
/// parasitism (probability `exp(-search * parasitoid)`) reproduce;
/// parasitized hosts become next season's parasitoids.
pub fn host_parasitoid() -> ModelResult<ModelSpec> {
    ModelSpec::builder("host_parasitoid")
        .variable("host", 10.0)
        .variable("parasitoid", 1.0)
        .constant("host_growth", 2.0)
        .constant("search_efficiency", 0.5)
        .constant("conversion", 1.0)
        .rate("host", |s: &State, c: &Constants| {
            let escape = (-c.value("search_efficiency")? * s.var("parasitoid")?).exp();
            Ok(c.value("host_growth")? * s.var("host")? * escape)
        })
        .rate("parasitoid", |s: &State, c: &Constants| {
            let escape = (-c.value("search_efficiency")? * s.var("parasitoid")?).exp();
            Ok(c.value("conversion")? * s.var("host")? * (1.0 - escape))
        })
        .dynamics(Dynamics::Discrete)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_models_build() {
        for name in NAMES {
            let model = by_name(name).unwrap();
            assert_eq!(model.name(), *name);
            assert!(!model.initial_state().is_empty());
            // Every variable has its rate, in declaration order.
            let vars: Vec<&str> = model.initial_state().names().collect();
            let rate_vars: Vec<&str> = model.rates().map(|(v, _)| v).collect();
            assert_eq!(vars, rate_vars);
        }
    }

    #[test]
    fn by_name_rejects_unknown() {
        assert!(matches!(
            by_name("dodo"),
            Err(ModelError::UnknownModel { .. })
        ));
    }

    #[test]
    fn lotka_volterra_rates_couple() {
        let model = lotka_volterra().unwrap();
        let state = model.initial_state();
        let constants = model.constants();

        // At the initial point (all ones) the rabbit derivative is
        // 1 * (1 - 1*1) = 0 and so is the wolf derivative.
        let rabbit = model.rate("rabbit").unwrap();
        assert_eq!(rabbit.rate(state, constants).unwrap(), 0.0);
        let wolf = model.rate("wolf").unwrap();
        assert_eq!(wolf.rate(state, constants).unwrap(), 0.0);
    }

    #[test]
    fn host_parasitoid_is_discrete() {
        let model = host_parasitoid().unwrap();
        assert!(model.dynamics().is_discrete());

        // With no parasitoids the host line doubles.
        let mut state = model.initial_state().clone();
        state.set("parasitoid", 0.0).unwrap();
        let next_host = model
            .rate("host")
            .unwrap()
            .rate(&state, model.constants())
            .unwrap();
        assert_eq!(next_host, 20.0);
    }
}

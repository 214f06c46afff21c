//! Immutable model specification and its builder.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use pnp_core::Real;

use crate::error::{ModelError, ModelResult};
use crate::rate::RateFn;
use crate::state::{Constants, State};

/// Integration method for continuous models.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// Forward Euler (1st order, one rate evaluation per variable per step).
    #[default]
    Euler,
    /// Ralston's 2nd-order Runge-Kutta (minimum truncation error:
    /// c2 = 2/3, combination weights 1/4 and 3/4).
    Ralston,
}

impl Method {
    /// Resolve a method by name. Unknown names fail here, before any
    /// simulation state is touched.
    pub fn parse(name: &str) -> ModelResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "ralston" => Ok(Method::Ralston),
            _ => Err(ModelError::UnknownMethod {
                name: name.to_string(),
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Ralston => "ralston",
        }
    }
}

impl FromStr for Method {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        Method::parse(s)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a model evolves by integrating derivatives or by iterating
/// a discrete map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dynamics {
    Continuous(Method),
    Discrete,
}

impl Dynamics {
    pub fn is_discrete(&self) -> bool {
        matches!(self, Dynamics::Discrete)
    }
}

impl fmt::Display for Dynamics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamics::Continuous(method) => write!(f, "continuous ({method})"),
            Dynamics::Discrete => f.write_str("discrete map"),
        }
    }
}

/// Immutable description of a dynamical system.
///
/// Holds the initial state, the constants, one rate function per state
/// variable (stored in variable declaration order), and the dynamics.
/// A run never mutates any of this; the engine clones what it needs.
pub struct ModelSpec {
    name: String,
    initial: State,
    constants: Constants,
    rates: IndexMap<String, Box<dyn RateFn>>,
    dynamics: Dynamics,
}

impl ModelSpec {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn dynamics(&self) -> Dynamics {
        self.dynamics
    }

    /// Replace the dynamics selection, keeping everything else.
    /// Lets callers override a continuous model's method per run.
    pub fn with_dynamics(mut self, dynamics: Dynamics) -> Self {
        self.dynamics = dynamics;
        self
    }

    /// The rate function owned by `var`.
    pub fn rate(&self, var: &str) -> ModelResult<&dyn RateFn> {
        self.rates
            .get(var)
            .map(Box::as_ref)
            .ok_or_else(|| ModelError::MissingRateFn {
                var: var.to_string(),
            })
    }

    /// `(variable, rate)` pairs in variable declaration order.
    pub fn rates(&self) -> impl Iterator<Item = (&str, &dyn RateFn)> {
        self.rates.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

impl fmt::Debug for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSpec")
            .field("name", &self.name)
            .field("initial", &self.initial)
            .field("constants", &self.constants)
            .field("dynamics", &self.dynamics)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ModelSpec`].
///
/// Declare variables, constants, and rate functions in any order, then
/// call [`ModelBuilder::build`] to validate: every variable must have
/// exactly one rate function, every rate function must target a declared
/// variable, and names must be unique.
pub struct ModelBuilder {
    name: String,
    initial: State,
    constants: Constants,
    rates: IndexMap<String, Box<dyn RateFn>>,
    dynamics: Dynamics,
    duplicate: Option<String>,
}

impl ModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: State::new(),
            constants: Constants::new(),
            rates: IndexMap::new(),
            dynamics: Dynamics::Continuous(Method::default()),
            duplicate: None,
        }
    }

    /// Declare a state variable with its initial value.
    pub fn variable(mut self, name: impl Into<String>, initial: Real) -> Self {
        let name = name.into();
        if self.initial.contains(&name) {
            self.note_duplicate(&name);
        }
        self.initial.insert(name, initial);
        self
    }

    /// Declare a named constant.
    pub fn constant(mut self, name: impl Into<String>, value: Real) -> Self {
        let name = name.into();
        if self.constants.contains(&name) {
            self.note_duplicate(&name);
        }
        self.constants.insert(name, value);
        self
    }

    /// Attach the rate function for one state variable.
    pub fn rate<F>(mut self, var: impl Into<String>, f: F) -> Self
    where
        F: RateFn + 'static,
    {
        let var = var.into();
        if self.rates.contains_key(&var) {
            self.note_duplicate(&var);
        }
        self.rates.insert(var, Box::new(f));
        self
    }

    pub fn dynamics(mut self, dynamics: Dynamics) -> Self {
        self.dynamics = dynamics;
        self
    }

    fn note_duplicate(&mut self, name: &str) {
        if self.duplicate.is_none() {
            self.duplicate = Some(name.to_string());
        }
    }

    /// Validate and freeze into an immutable [`ModelSpec`].
    pub fn build(self) -> ModelResult<ModelSpec> {
        if let Some(name) = self.duplicate {
            return Err(ModelError::Duplicate { name });
        }
        for var in self.rates.keys() {
            if !self.initial.contains(var) {
                return Err(ModelError::UnknownRateTarget { var: var.clone() });
            }
        }

        // Reorder the rate table to variable declaration order so the
        // engine and the projections iterate identically.
        let mut rates = self.rates;
        let mut ordered = IndexMap::with_capacity(rates.len());
        for var in self.initial.names() {
            match rates.shift_remove_entry(var) {
                Some((key, rate)) => {
                    ordered.insert(key, rate);
                }
                None => {
                    return Err(ModelError::MissingRateFn {
                        var: var.to_string(),
                    });
                }
            }
        }

        Ok(ModelSpec {
            name: self.name,
            initial: self.initial,
            constants: self.constants,
            rates: ordered,
            dynamics: self.dynamics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Constants, State};

    fn constant_rate(value: Real) -> impl RateFn {
        move |_s: &State, _c: &Constants| Ok(value)
    }

    #[test]
    fn builder_basic() {
        let model = ModelSpec::builder("test")
            .variable("x", 2.0)
            .variable("y", 0.5)
            .rate("x", constant_rate(3.0))
            .rate("y", |s: &State, _c: &Constants| s.var("x"))
            .dynamics(Dynamics::Continuous(Method::Ralston))
            .build()
            .unwrap();

        assert_eq!(model.name(), "test");
        assert_eq!(model.initial_state().get("x"), Some(2.0));
        assert_eq!(model.dynamics(), Dynamics::Continuous(Method::Ralston));

        let vars: Vec<&str> = model.rates().map(|(v, _)| v).collect();
        assert_eq!(vars, vec!["x", "y"]);
    }

    #[test]
    fn build_rejects_missing_rate() {
        let err = ModelSpec::builder("test")
            .variable("x", 1.0)
            .variable("y", 1.0)
            .rate("x", constant_rate(0.0))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ModelError::MissingRateFn {
                var: "y".to_string()
            }
        );
    }

    #[test]
    fn build_rejects_unknown_rate_target() {
        let err = ModelSpec::builder("test")
            .variable("x", 1.0)
            .rate("x", constant_rate(0.0))
            .rate("ghost", constant_rate(0.0))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ModelError::UnknownRateTarget {
                var: "ghost".to_string()
            }
        );
    }

    #[test]
    fn build_rejects_duplicate_declarations() {
        let err = ModelSpec::builder("test")
            .variable("x", 1.0)
            .variable("x", 2.0)
            .rate("x", constant_rate(0.0))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ModelError::Duplicate {
                name: "x".to_string()
            }
        );
    }

    #[test]
    fn rate_table_follows_variable_order() {
        // Rates declared in reverse; the built model still iterates in
        // variable declaration order.
        let model = ModelSpec::builder("test")
            .variable("a", 0.0)
            .variable("b", 0.0)
            .variable("c", 0.0)
            .rate("c", constant_rate(3.0))
            .rate("a", constant_rate(1.0))
            .rate("b", constant_rate(2.0))
            .build()
            .unwrap();

        let vars: Vec<&str> = model.rates().map(|(v, _)| v).collect();
        assert_eq!(vars, vec!["a", "b", "c"]);
    }

    #[test]
    fn unknown_method_name_fails() {
        let err = Method::parse("RK4").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownMethod {
                name: "RK4".to_string()
            }
        );

        assert_eq!(Method::parse("Ralston").unwrap(), Method::Ralston);
        assert_eq!("euler".parse::<Method>().unwrap(), Method::Euler);
    }
}

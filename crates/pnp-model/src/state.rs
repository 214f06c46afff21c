//! Named population state and read-only model constants.
//!
//! Both are insertion-ordered maps: the order variables are declared in
//! is the order they appear in snapshots, tables, and summaries.

use indexmap::IndexMap;
use pnp_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Ordered mapping from variable name to population count.
///
/// Values are plain reals: fractional and negative populations are
/// allowed and never clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    vars: IndexMap<String, Real>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable, appending it to the declaration order.
    /// Re-inserting an existing name overwrites its value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Real) {
        self.vars.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<Real> {
        self.vars.get(name).copied()
    }

    /// Like [`State::get`], but a missing variable is an evaluation error.
    /// Rate functions use this to read coupled variables.
    pub fn var(&self, name: &str) -> ModelResult<Real> {
        self.get(name).ok_or_else(|| ModelError::UnknownVariable {
            name: name.to_string(),
        })
    }

    /// Overwrite an existing variable's value.
    pub fn set(&mut self, name: &str, value: Real) -> ModelResult<()> {
        match self.vars.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ModelError::UnknownVariable {
                name: name.to_string(),
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Variable names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Ordered mapping from constant name to a fixed value, read-only for
/// the duration of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constants {
    vals: IndexMap<String, Real>,
}

impl Constants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Real) {
        self.vals.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<Real> {
        self.vals.get(name).copied()
    }

    /// Like [`Constants::get`], but a missing constant is an evaluation error.
    pub fn value(&self, name: &str) -> ModelResult<Real> {
        self.get(name).ok_or_else(|| ModelError::UnknownConstant {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vals.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> {
        self.vals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }
}

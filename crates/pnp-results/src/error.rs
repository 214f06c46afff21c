//! Error types for result projections.

use pnp_core::Real;
use thiserror::Error;

/// Errors from table projection or downsampling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResultsError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Time series has no snapshots")]
    EmptySeries,

    /// Downsampling needs at least two snapshots with distinct times
    /// to establish the sample spacing.
    #[error("Too few samples to downsample: have {found}, need two with distinct times")]
    TooFewSamples { found: usize },

    #[error("Snapshot at t={time} is missing variable '{name}'")]
    MissingVariable { name: String, time: Real },
}

pub type ResultsResult<T> = Result<T, ResultsError>;

//! Error types for simulation runs.

use pnp_model::ModelError;
use thiserror::Error;

/// Errors encountered while validating run parameters or advancing a run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Configuration or rate-evaluation failure from the model layer.
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;

//! Model configuration and evaluation errors.

use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building a model or evaluating its rate functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown integration method: {name}")]
    UnknownMethod { name: String },

    #[error("State variable '{var}' has no rate function")]
    MissingRateFn { var: String },

    #[error("Rate function targets unknown state variable '{var}'")]
    UnknownRateTarget { var: String },

    #[error("Duplicate declaration of '{name}'")]
    Duplicate { name: String },

    #[error("Unknown state variable '{name}'")]
    UnknownVariable { name: String },

    #[error("Unknown constant '{name}'")]
    UnknownConstant { name: String },

    #[error("Unknown catalog model: {name}")]
    UnknownModel { name: String },

    #[error("Rate evaluation failed: {message}")]
    Eval { message: String },
}

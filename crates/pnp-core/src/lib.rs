//! pnp-core: numeric foundation for the pnp workspace.
//!
//! Contains the `Real` scalar alias, comparison tolerances, and the
//! float helpers shared by the engine, the results crates, and tests.

pub mod numeric;

pub use numeric::*;

//! Output projections for simulation runs.
//!
//! Consumes the time series produced by `pnp-sim` and exposes:
//! - wide and long tabular projections (plus CSV rendering)
//! - post-hoc downsampling keyed to the series' own sample spacing
//! - a parameter/run summary for presentation

pub mod downsample;
pub mod error;
pub mod summary;
pub mod table;

pub use downsample::downsample;
pub use error::{ResultsError, ResultsResult};
pub use summary::{ModelSummary, summarize};
pub use table::{LongRow, WideTable, long_table, long_to_csv, wide_table};

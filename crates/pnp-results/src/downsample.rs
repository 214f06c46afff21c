//! Post-hoc time-series downsampling.

use pnp_core::{Tolerances, whole_multiple};
use pnp_sim::TimeSeries;

use crate::error::{ResultsError, ResultsResult};

/// Keep only snapshots whose time is a `factor`-multiple of the series'
/// own sample spacing.
///
/// The spacing is taken from the first two snapshots; a snapshot
/// survives when `time / spacing` is a whole multiple of `factor`.
/// The `t = 0` snapshot always survives (zero divides everything).
/// This is independent of any in-run compression: it filters an
/// already-produced series.
pub fn downsample(series: &TimeSeries, factor: usize) -> ResultsResult<TimeSeries> {
    if factor == 0 {
        return Err(ResultsError::InvalidArg {
            what: "downsample factor must be positive",
        });
    }
    let factor = i64::try_from(factor).map_err(|_| ResultsError::InvalidArg {
        what: "downsample factor is too large",
    })?;

    let snaps = series.snapshots();
    if snaps.len() < 2 {
        return Err(ResultsError::TooFewSamples { found: snaps.len() });
    }
    let spacing = snaps[1].time - snaps[0].time;
    if spacing == 0.0 {
        return Err(ResultsError::TooFewSamples { found: snaps.len() });
    }

    let tol = Tolerances::default();
    let kept = snaps
        .iter()
        .filter(|snap| {
            whole_multiple(snap.time, spacing, tol).is_some_and(|k| k % factor == 0)
        })
        .cloned()
        .collect();

    Ok(TimeSeries::from_snapshots(kept))
}

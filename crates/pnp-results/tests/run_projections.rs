//! Integration: run a catalog model and project/downsample the output.

use pnp_model::catalog;
use pnp_results::{downsample, long_table, wide_table};
use pnp_sim::{SimOptions, run_sim};

#[test]
fn run_then_project_wide_and_long() {
    let model = catalog::host_parasitoid().unwrap();
    let opts = SimOptions {
        steps: 10,
        dt: 1.0,
        record_every: 1,
        verbose: false,
    };
    let series = run_sim(&model, &opts).unwrap();

    let wide = wide_table(&series).unwrap();
    assert_eq!(wide.columns, vec!["time", "host", "parasitoid"]);
    assert_eq!(wide.rows.len(), 11);
    assert_eq!(wide.rows[0][0], 0.0);
    assert_eq!(wide.rows[0][1], 10.0);

    let long = long_table(&series);
    assert_eq!(long.len(), 11 * 2);

    // Every wide cell appears as a long observation.
    for (row, snap) in wide.rows.iter().zip(series.snapshots()) {
        for (col, value) in wide.columns.iter().skip(1).zip(row.iter().skip(1)) {
            assert!(
                long.iter()
                    .any(|r| r.time == snap.time && &r.variable == col && r.value == *value)
            );
        }
    }
}

#[test]
fn downsample_composes_with_in_run_compression() {
    let model = catalog::grass_chain().unwrap();
    let opts = SimOptions {
        steps: 100,
        dt: 0.01,
        record_every: 5,
        verbose: false,
    };
    let series = run_sim(&model, &opts).unwrap();
    assert_eq!(series.len(), 21);

    // Recorded spacing is 5 * dt; keeping every 4th sample leaves
    // t = 0, 0.2, 0.4, ..., 1.0.
    let filtered = downsample(&series, 4).unwrap();
    assert_eq!(filtered.len(), 6);
    assert_eq!(filtered.first().unwrap().time, 0.0);

    // Downsampling is a pure filter: surviving snapshots are the same
    // objects the run recorded.
    for snap in filtered.snapshots() {
        assert!(series.snapshots().contains(snap));
    }
}

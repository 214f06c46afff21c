//! Simulation runner and snapshot recording.

use pnp_core::Real;
use pnp_model::ModelSpec;
use tracing::{debug, info, trace};

use crate::error::{SimError, SimResult};
use crate::integrator::integrator_for;
use crate::progress::StepProgress;
use crate::series::{Snapshot, TimeSeries};

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Number of steps to execute. Zero is legal and yields only the
    /// initial snapshot.
    pub steps: usize,
    /// Fixed step size (time per step).
    pub dt: Real,
    /// Record every N-th step (output compression). The `t = 0`
    /// snapshot is always recorded.
    pub record_every: usize,
    /// Emit tracing events while the run advances.
    pub verbose: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            steps: 1000,
            dt: 1e-3,
            record_every: 1,
            verbose: false,
        }
    }
}

impl SimOptions {
    fn validate(&self) -> SimResult<()> {
        if !(self.dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if self.record_every == 0 {
            return Err(SimError::InvalidArg {
                what: "record_every must be positive",
            });
        }
        Ok(())
    }
}

/// Run a simulation to completion and return its time series.
pub fn run_sim(model: &ModelSpec, opts: &SimOptions) -> SimResult<TimeSeries> {
    run_sim_with_progress(model, opts, None)
}

/// Like [`run_sim`], with an optional per-step progress callback.
///
/// The run clones the model's initial state, records `(0, initial)`
/// unconditionally, then advances `steps` times with the stepper
/// selected from the model's dynamics. Steps whose index is a multiple
/// of `record_every` append a snapshot at `time = step * dt`. A rate
/// failure aborts the run; no partial series is returned.
pub fn run_sim_with_progress(
    model: &ModelSpec,
    opts: &SimOptions,
    mut progress: Option<&mut dyn FnMut(&StepProgress)>,
) -> SimResult<TimeSeries> {
    opts.validate()?;

    let integrator = integrator_for(model.dynamics());
    let mut state = model.initial_state().clone();

    let mut series = TimeSeries::new();
    series.push(Snapshot {
        time: 0.0,
        state: state.clone(),
    });

    if opts.verbose {
        info!(
            model = model.name(),
            dynamics = %model.dynamics(),
            steps = opts.steps,
            dt = opts.dt,
            record_every = opts.record_every,
            "starting run"
        );
    }

    for step in 1..=opts.steps {
        state = integrator.step(model, &state, opts.dt)?;

        let time = step as Real * opts.dt;
        let recorded = step % opts.record_every == 0;
        if recorded {
            series.push(Snapshot {
                time,
                state: state.clone(),
            });
        }

        if opts.verbose {
            trace!(step, time, recorded, "step complete");
        }
        if let Some(callback) = progress.as_deref_mut() {
            callback(&StepProgress {
                step,
                total_steps: opts.steps,
                sim_time: time,
                fraction_complete: step as f64 / opts.steps as f64,
                recorded,
            });
        }
    }

    if opts.verbose {
        debug!(snapshots = series.len(), "run complete");
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnp_model::{Constants, Dynamics, State};

    fn growth_model() -> ModelSpec {
        ModelSpec::builder("growth")
            .variable("x", 1.0)
            .rate("x", |s: &State, _c: &Constants| s.var("x"))
            .build()
            .unwrap()
    }

    #[test]
    fn zero_step_run_yields_only_the_initial_snapshot() {
        let model = growth_model();
        let opts = SimOptions {
            steps: 0,
            dt: 0.1,
            ..SimOptions::default()
        };

        let series = run_sim(&model, &opts).unwrap();
        assert_eq!(series.len(), 1);
        let first = series.first().unwrap();
        assert_eq!(first.time, 0.0);
        assert_eq!(&first.state, model.initial_state());
    }

    #[test]
    fn discrete_doubling_sequence() {
        let model = ModelSpec::builder("doubling")
            .variable("x", 1.0)
            .rate("x", |s: &State, _c: &Constants| Ok(2.0 * s.var("x")?))
            .dynamics(Dynamics::Discrete)
            .build()
            .unwrap();

        let opts = SimOptions {
            steps: 3,
            dt: 1.0,
            record_every: 1,
            verbose: false,
        };
        let series = run_sim(&model, &opts).unwrap();

        let values: Vec<f64> = series
            .snapshots()
            .iter()
            .map(|s| s.state.get("x").unwrap())
            .collect();
        assert_eq!(values, vec![1.0, 2.0, 4.0, 8.0]);
    }

    #[test]
    fn compression_records_every_nth_step() {
        let model = growth_model();
        let opts = SimOptions {
            steps: 10,
            dt: 0.25,
            record_every: 5,
            verbose: false,
        };

        let series = run_sim(&model, &opts).unwrap();
        let times: Vec<f64> = series.snapshots().iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0.0, 5.0 * 0.25, 10.0 * 0.25]);

        // Skipped steps still execute: the final value reflects all
        // ten Euler steps, not two.
        let expected = 1.25_f64.powi(10);
        let last = series.last().unwrap().state.get("x").unwrap();
        assert!((last - expected).abs() < 1e-12);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let model = growth_model();

        let err = run_sim(
            &model,
            &SimOptions {
                dt: 0.0,
                ..SimOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));

        let err = run_sim(
            &model,
            &SimOptions {
                record_every: 0,
                ..SimOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
    }

    #[test]
    fn snapshot_times_are_step_index_times_dt() {
        let model = growth_model();
        let opts = SimOptions {
            steps: 7,
            dt: 0.3,
            record_every: 2,
            verbose: false,
        };

        let series = run_sim(&model, &opts).unwrap();
        let times: Vec<f64> = series.snapshots().iter().map(|s| s.time).collect();
        // Steps 2, 4, 6 are recorded; 7 is not a multiple of 2.
        assert_eq!(times, vec![0.0, 2.0 * 0.3, 4.0 * 0.3, 6.0 * 0.3]);
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn progress_callback_observes_every_step() {
        let model = growth_model();
        let opts = SimOptions {
            steps: 4,
            dt: 0.5,
            record_every: 2,
            verbose: false,
        };

        let mut seen = Vec::new();
        run_sim_with_progress(
            &model,
            &opts,
            Some(&mut |event: &StepProgress| {
                seen.push((event.step, event.recorded, event.fraction_complete));
            }),
        )
        .unwrap();

        assert_eq!(
            seen,
            vec![
                (1, false, 0.25),
                (2, true, 0.5),
                (3, false, 0.75),
                (4, true, 1.0)
            ]
        );
    }

    #[test]
    fn rate_failure_returns_no_partial_series() {
        // The rate blows up once x exceeds a threshold mid-run.
        let model = ModelSpec::builder("fragile")
            .variable("x", 1.0)
            .rate("x", |s: &State, _c: &Constants| {
                let x = s.var("x")?;
                if x > 4.0 {
                    Err(pnp_model::ModelError::Eval {
                        message: "population exceeded threshold".to_string(),
                    })
                } else {
                    Ok(2.0 * x)
                }
            })
            .dynamics(Dynamics::Discrete)
            .build()
            .unwrap();

        let opts = SimOptions {
            steps: 10,
            dt: 1.0,
            record_every: 1,
            verbose: false,
        };
        let err = run_sim(&model, &opts).unwrap_err();
        assert!(matches!(err, SimError::Model(_)));
    }
}

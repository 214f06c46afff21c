use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use pnp_model::{Dynamics, Method, catalog};
use pnp_results::{downsample, long_table, long_to_csv, summarize, wide_table};
use pnp_sim::{SimOptions, StepProgress, run_sim_with_progress};

#[derive(Parser)]
#[command(name = "pnp-cli")]
#[command(about = "pnp - predator-prey population dynamics simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog models
    Models,
    /// Show a model's parameters and the default run configuration
    Describe {
        /// Catalog model name
        model: String,
    },
    /// Run a simulation and print or export its time series
    Run {
        /// Catalog model name
        model: String,
        /// Number of steps to execute
        #[arg(long, default_value_t = 1000)]
        steps: usize,
        /// Step size (time per step)
        #[arg(long, default_value_t = 1e-3)]
        dt: f64,
        /// Record every N-th step
        #[arg(long, default_value_t = 1)]
        record_every: usize,
        /// Override the integration method (euler, ralston)
        #[arg(long)]
        method: Option<String>,
        /// Keep only every N-th recorded sample, post-run
        #[arg(long)]
        downsample: Option<usize>,
        /// Export the long (time, variable, value) projection instead
        /// of the wide table
        #[arg(long)]
        long: bool,
        /// Output CSV file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit engine tracing while the run advances
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Describe { model } => cmd_describe(&model),
        Commands::Run {
            model,
            steps,
            dt,
            record_every,
            method,
            downsample,
            long,
            output,
            verbose,
        } => {
            let opts = SimOptions {
                steps,
                dt,
                record_every,
                verbose,
            };
            cmd_run(
                &model,
                &opts,
                method.as_deref(),
                downsample,
                long,
                output.as_deref(),
            )
        }
    }
}

fn cmd_models() -> Result<(), Box<dyn Error>> {
    println!("Catalog models:");
    for name in catalog::NAMES {
        let model = catalog::by_name(name)?;
        println!(
            "  {:<18} {} variables, {}",
            name,
            model.initial_state().len(),
            model.dynamics()
        );
    }
    Ok(())
}

fn cmd_describe(name: &str) -> Result<(), Box<dyn Error>> {
    let model = catalog::by_name(name)?;
    println!("{}", summarize(&model, &SimOptions::default()));
    Ok(())
}

fn cmd_run(
    name: &str,
    opts: &SimOptions,
    method: Option<&str>,
    downsample_factor: Option<usize>,
    long: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let mut model = catalog::by_name(name)?;

    // Method overrides are resolved (and rejected) before the run starts.
    if let Some(method) = method {
        let method = Method::parse(method)?;
        if model.dynamics().is_discrete() {
            return Err("--method does not apply to discrete-map models".into());
        }
        model = model.with_dynamics(Dynamics::Continuous(method));
    }

    println!("Running {} for {} steps (dt = {})", name, opts.steps, opts.dt);

    let mut last_emit = Instant::now();
    let mut last_fraction = -1.0f64;
    let series = run_sim_with_progress(
        &model,
        opts,
        Some(&mut |event: &StepProgress| {
            let emit_now = (event.fraction_complete - last_fraction).abs() >= 0.005
                || last_emit.elapsed().as_millis() >= 100;
            if emit_now {
                render_progress(event);
                last_fraction = event.fraction_complete;
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    println!("✓ Run completed: {} snapshots recorded", series.len());

    let series = match downsample_factor {
        Some(factor) => downsample(&series, factor)?,
        None => series,
    };

    let csv = if long {
        long_to_csv(&long_table(&series))
    } else {
        wide_table(&series)?.to_csv()
    };

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} snapshots to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(80));
    let _ = io::stdout().flush();
}

fn render_progress(event: &StepProgress) {
    let width = 28usize;
    let filled = ((event.fraction_complete * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    print!(
        "\r[{}] {:>6.2}%  step={}/{}  t={:.3}",
        bar,
        event.fraction_complete * 100.0,
        event.step,
        event.total_steps,
        event.sim_time
    );
    let _ = io::stdout().flush();
}

//! Command-line runner for strided slice checks.
//!
//! `slice-check run` compares the CPU candidate against the reference on the
//! built-in scenario table (or a JSON file of cases) and exits non-zero on
//! any mismatch. `slice-check show` prints how one request resolves.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sl_check::{builtin_cases, load_cases, run_cases, CheckConfig, HostEventRecorder};
use sl_tensor::{resolve_all, Shape, SliceRequest, SlicePlan};

#[derive(Parser)]
#[command(name = "slice-check")]
#[command(about = "Check strided slicing against a reference evaluator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run scenarios and compare candidate vs reference
    Run {
        /// JSON file with an array of cases (defaults to the built-in table)
        #[arg(long)]
        cases: Option<PathBuf>,

        /// Seed for random inputs
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Compare within this tolerance instead of bit-exactly
        #[arg(long)]
        tolerance: Option<f32>,

        /// Record and print timing events
        #[arg(long)]
        profile: bool,
    },

    /// Show resolved ranges and the output shape for one request
    Show {
        /// Input shape, e.g. 10,12
        #[arg(long, value_delimiter = ',', required = true)]
        shape: Vec<usize>,

        #[arg(long, value_delimiter = ',', required = true)]
        axes: Vec<usize>,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        starts: Vec<i64>,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        ends: Vec<i64>,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        strides: Vec<i64>,

        /// Axes to remove after slicing
        #[arg(long, value_delimiter = ',')]
        decrease: Vec<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Run {
            cases,
            seed,
            tolerance,
            profile,
        } => run(cases, seed, tolerance, profile),
        Commands::Show {
            shape,
            axes,
            starts,
            ends,
            strides,
            decrease,
        } => {
            let request = SliceRequest::from_arrays(&axes, &starts, &ends, &strides)?.decrease(decrease);
            show(Shape::new(shape), &request)
        }
    }
}

fn run(cases: Option<PathBuf>, seed: u64, tolerance: Option<f32>, profile: bool) -> Result<()> {
    let cases = match cases {
        Some(path) => load_cases(&path).with_context(|| format!("loading {}", path.display()))?,
        None => builtin_cases(),
    };
    let defaults = CheckConfig::default();
    let config = CheckConfig {
        seed,
        all_equal: tolerance.is_none(),
        tolerance: tolerance.unwrap_or(defaults.tolerance),
        profile,
    };

    println!("=== Strided slice check ({} cases, seed {}) ===\n", cases.len(), seed);

    let results = run_cases(&cases, &config);
    let mut failed = 0;
    for (name, result) in &results {
        match result {
            Ok(report) => println!("PASS  {:<20} -> {}", name, Shape::new(report.dims.clone())),
            Err(err) => {
                failed += 1;
                println!("FAIL  {:<20} {}", name, err);
            }
        }
    }

    if profile {
        println!("\nTiming events:");
        for event in HostEventRecorder::instance().take() {
            println!("  {:<28} {:>10.4} ms", event.name, event.millis);
        }
    }

    println!();
    if failed == 0 {
        println!("PASS: {} of {} cases agree", results.len(), results.len());
        Ok(())
    } else {
        println!("FAIL: {} of {} cases disagree", failed, results.len());
        std::process::exit(1);
    }
}

fn show(shape: Shape, request: &SliceRequest) -> Result<()> {
    let ranges = resolve_all(&shape, request)?;
    println!("Input shape: {}", shape);
    for (axis, range) in ranges.iter().enumerate() {
        let indices: Vec<usize> = range.indices().collect();
        println!(
            "  axis {}: begin={} end={} stride={} count={} -> {:?}",
            axis, range.begin, range.end, range.stride, range.count, indices
        );
    }

    let plan = SlicePlan::new(&shape, request)?;
    println!("Sliced shape: {}", plan.sliced_shape);
    println!("Output shape: {}", plan.output_shape);
    Ok(())
}

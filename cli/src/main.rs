//! ucircle - explore the circle group x² + y² = 1 over a prime field
//!
//! Commands:
//! - report: points, generator and powers for one prime
//! - points: list the circle points
//! - order: order of a single point
//! - plot: ASCII scatter plot of the circle and the generator's powers

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use unit_circle::{
    compute, order_of, CircleError, CircleGroup, PointSet, PrimalityCheck, PrimeField, Request,
    TrialDivision,
};

mod logging;
mod render;
mod types;

use render::{Plot, TextReport};
use types::{OrderOutput, PointsOutput};

/// Upper bound on the number of powers, as on the original slider
const MAX_COUNT: u64 = 50;

/// Upper bound on the modulus; enumeration and the generator scan are
/// brute force
const MAX_PRIME: u32 = 97;

#[derive(Parser)]
#[command(name = "ucircle")]
#[command(about = "The circle group x² + y² = 1 over a prime field", long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Points, generator and the generator's first n powers
    Report {
        /// Odd prime modulus
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(3..=MAX_PRIME as i64))]
        prime: u32,

        /// Number of powers to list
        #[arg(short = 'n', long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(1..=MAX_COUNT))]
        count: u64,

        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },

    /// List every point on the circle
    Points {
        /// Odd prime modulus
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(3..=MAX_PRIME as i64))]
        prime: u32,

        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },

    /// Order of one point under complex multiplication
    Order {
        /// Odd prime modulus
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(3..=MAX_PRIME as i64))]
        prime: u32,

        #[arg(short)]
        x: u64,

        #[arg(short)]
        y: u64,

        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },

    /// Scatter plot of the circle with the powers annotated
    Plot {
        /// Odd prime modulus
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(3..=MAX_PRIME as i64))]
        prime: u32,

        /// Number of powers to annotate
        #[arg(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=MAX_COUNT))]
        count: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CircleError>() {
            Some(circle_err) if circle_err.is_fatal() => {
                error!("{:#}", err);
                eprintln!("❌ {:#}", err);
                ExitCode::from(2)
            }
            _ => {
                eprintln!("⚠️  {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Report { prime, count, format } => cmd_report(prime, count, format),
        Commands::Points { prime, format } => cmd_points(prime, format),
        Commands::Order { prime, x, y, format } => cmd_order(prime, x, y, format),
        Commands::Plot { prime, count } => cmd_plot(prime, count),
    }
}

fn cmd_report(prime: u32, count: u64, format: Format) -> Result<()> {
    let report = compute(Request::new(prime, count), &TrialDivision)?;
    info!(prime, generator = %report.generator, "computed report");

    match format {
        Format::Text => print!("{}", TextReport(&report)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report).context("serializing report")?),
    }
    Ok(())
}

fn cmd_points(prime: u32, format: Format) -> Result<()> {
    let group = circle_group(prime)?;
    let points = PointSet::enumerate(group)?;

    let output = PointsOutput {
        prime,
        cardinality: points.cardinality(),
        points: points.into_vec(),
    };
    emit(&output, format)
}

fn cmd_order(prime: u32, x: u64, y: u64, format: Format) -> Result<()> {
    let group = circle_group(prime)?;
    let point = group
        .point(x, y)
        .ok_or(CircleError::NotOnCircle { p: prime, x, y })?;
    let cardinality = PointSet::enumerate(group)?.cardinality();
    let order = order_of(group, point);

    let output = OrderOutput {
        prime,
        point,
        order,
        cardinality,
        is_generator: order == Some(cardinality),
    };
    emit(&output, format)
}

fn cmd_plot(prime: u32, count: u64) -> Result<()> {
    let report = compute(Request::new(prime, count), &TrialDivision)?;
    print!("{}", Plot(&report));
    Ok(())
}

/// Validate `prime` and build its circle group
fn circle_group(prime: u32) -> Result<CircleGroup, CircleError> {
    if !TrialDivision.is_prime(prime) {
        return Err(CircleError::InvalidPrime { p: prime });
    }
    Ok(CircleGroup::new(PrimeField::new(prime)?))
}

fn emit<T: serde::Serialize + std::fmt::Display>(output: &T, format: Format) -> Result<()> {
    match format {
        Format::Text => print!("{}", output),
        Format::Json => println!("{}", serde_json::to_string_pretty(output).context("serializing output")?),
    }
    Ok(())
}

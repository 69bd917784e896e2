use anyhow::{Context, Result};
use carbonforge_core::model::{EmissionsModel, OccupancyPolicy};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

mod config;
mod plotting;
mod report;

/// Personal carbon footprint calculator.
#[derive(Debug, Parser)]
#[command(name = "carbonforge", version, about)]
struct Cli {
    /// Activity inputs and what-if changes (YAML).
    #[arg(long, default_value = "carbonforge-app/request.yaml")]
    request: PathBuf,

    /// Emission factor table (YAML). Uses the built-in India table when omitted.
    #[arg(long)]
    factors: Option<PathBuf>,

    /// Directory that receives one timestamped folder per run.
    #[arg(long, default_value = "./data/runs")]
    output_dir: PathBuf,

    /// How car occupancy enters the transport calculation.
    #[arg(long, value_enum, default_value_t = OccupancyArg::Recorded)]
    occupancy_policy: OccupancyArg,

    /// Skip chart rendering.
    #[arg(long)]
    no_plots: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OccupancyArg {
    /// Record occupancy without applying it.
    Recorded,
    /// Divide car km by occupancy before applying the passenger-km factor.
    DivideVehicleKm,
}

impl From<OccupancyArg> for OccupancyPolicy {
    fn from(arg: OccupancyArg) -> Self {
        match arg {
            OccupancyArg::Recorded => OccupancyPolicy::Recorded,
            OccupancyArg::DivideVehicleKm => OccupancyPolicy::DivideVehicleKm,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- Carbonforge Footprint Calculator ---");

    let request = config::load_request(&cli.request)?;
    let factors = config::FactorSource::load(cli.factors.as_deref())?;

    let model = EmissionsModel::builder()
        .with_factor_table(factors.table)
        .with_occupancy_policy(cli.occupancy_policy.into())
        .build()
        .with_context(|| format!("Invalid emission factor table from {}", factors.origin))?;

    let run_dir = cli
        .output_dir
        .join(format!("footprint_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S")));
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", run_dir))?;

    // Copy the request file to the output directory for traceability
    fs::copy(&cli.request, run_dir.join("request.yaml"))?;

    let outcome = report::run_calculation(&model, &request)?;
    report::write_exports(&run_dir, &model, &request.activity, &outcome)?;

    if cli.no_plots {
        println!("[Plotting] Skipped.");
    } else {
        plotting::generate_all_plots(&run_dir, &outcome.scenario)?;
    }

    report::print_summary_report(&outcome, &factors.origin, model.occupancy_policy());

    println!("\nCalculation complete. Results are in '{}'", run_dir.display());
    Ok(())
}

use anyhow::{Context, Result};
use carbonforge_core::{
    benchmark::{self, BenchmarkComparison},
    export,
    model::{EmissionsModel, OccupancyPolicy},
    scenario::{self, ScenarioReport},
};
use carbonforge_schemas::{activity::ActivityInput, file_formats::CalculationRequestFile, results::CategoryResult};
use std::{fs, path::Path};

/// Everything produced by one calculator run.
#[derive(Debug, Clone)]
pub struct CalculationOutcome {
    pub scenario: ScenarioReport,
    pub benchmark: BenchmarkComparison,
}

/// Computes the baseline footprint, its benchmark comparison, and the what-if scenario.
pub fn run_calculation(model: &EmissionsModel, request: &CalculationRequestFile) -> Result<CalculationOutcome> {
    println!("\n--- [Calculator] Computing baseline and scenario ---");

    let scenario = scenario::evaluate_scenario(model, &request.activity, &request.scenario)
        .context("Failed to evaluate the footprint scenario")?;
    let benchmark = benchmark::compare_to_benchmark(&scenario.baseline, request.activity.country, model.factor_table())
        .context("Failed to compare against the per-capita benchmark")?;

    Ok(CalculationOutcome { scenario, benchmark })
}

/// Writes the CSV and JSON exports plus the calculation details into `run_dir`.
pub fn write_exports(
    run_dir: &Path,
    model: &EmissionsModel,
    input: &ActivityInput,
    outcome: &CalculationOutcome,
) -> Result<()> {
    println!("\n--- [Export] Writing results ---");
    let result = &outcome.scenario.baseline;

    let csv_path = run_dir.join(export::RESULTS_CSV_FILE);
    export::write_results_csv(&csv_path.to_string_lossy(), result)?;
    println!("[Export] {}", csv_path.display());

    let json_path = run_dir.join(export::RESULTS_JSON_FILE);
    export::write_results_json(&json_path.to_string_lossy(), &export::export_payload(input, result))?;
    println!("[Export] {}", json_path.display());

    let details = export::calculation_details(input, result, model.factor_table())?;
    let details_path = run_dir.join("calculation_details.json");
    fs::write(&details_path, serde_json::to_string_pretty(&details)?)
        .with_context(|| format!("Failed to write {:?}", details_path))?;
    println!("[Export] {}", details_path.display());

    Ok(())
}

fn print_categories(result: &CategoryResult) {
    for (category, tonnes) in result.iter() {
        println!("  - {:<16} {:>8.3} tCO₂e/yr", format!("{}:", category), tonnes);
    }
    println!("  --------------------------------------");
    println!("  - {:<16} {:>8.3} tCO₂e/yr", "Total:", result.total);
}

pub fn print_summary_report(outcome: &CalculationOutcome, factor_origin: &str, policy: OccupancyPolicy) {
    let scenario = &outcome.scenario;
    let bench = &outcome.benchmark;
    let input = &scenario.baseline_input;

    println!("\n\n--- [Final Summary Report] ---");
    println!("========================================");
    println!("Context:");
    println!("  - Country: {}", input.country);
    println!("  - Emission factors: {}", factor_origin);
    println!(
        "  - Car occupancy: {}",
        match policy {
            OccupancyPolicy::Recorded => "recorded only",
            OccupancyPolicy::DivideVehicleKm => "divides vehicle-km",
        }
    );
    println!("----------------------------------------");

    println!("\nBy Category (tCO₂e/year):");
    print_categories(&scenario.baseline);
    println!(
        "\nBenchmark: {} per-capita ≈ {:.1} tCO₂/yr ({:+.3} t {})",
        bench.country,
        bench.benchmark_t,
        bench.delta_t,
        if bench.is_above_benchmark() { "above" } else { "at or below" }
    );

    println!("\nWhat-if Scenario:");
    let alt = &scenario.alternate_input;
    println!(
        "  - Commute: {} -> {} | Electricity: {:.1} -> {:.1} kWh/month",
        input.commute.mode, alt.commute.mode, input.electricity.monthly_kwh, alt.electricity.monthly_kwh
    );
    println!(
        "  - Diet: {} -> {} | Segregation: {}% -> {}%",
        input.diet.pattern, alt.diet.pattern, input.waste.segregation_percent, alt.waste.segregation_percent
    );
    print_categories(&scenario.alternate);
    println!(
        "  - New total: {:.3} tCO₂e/yr ({:+.3} vs current)",
        scenario.delta.alternate_total, scenario.delta.delta
    );
    println!("  - Potential reduction: {:.3} tCO₂e/yr", scenario.delta.reduction);

    println!("\nQuick wins:");
    for rec in &scenario.recommendations {
        println!("  • {}", rec);
    }
    println!("========================================");
}

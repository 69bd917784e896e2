//! This module renders the footprint charts for a calculator run.

use anyhow::Result;
use carbonforge_core::scenario::ScenarioReport;
use carbonforge_schemas::results::{Category, CategoryResult};
use plotters::prelude::*;
use std::path::Path;

const CATEGORY_COLORS: [RGBColor; 4] = [
    RGBColor(70, 130, 180),
    RGBColor(255, 165, 0),
    RGBColor(60, 179, 113),
    RGBColor(160, 82, 45),
];

/// The main function to generate and save all charts for a run.
pub fn generate_all_plots(output_dir: &Path, scenario: &ScenarioReport) -> Result<()> {
    println!("[Plotting] Generating charts...");

    plot_category_breakdown(output_dir, &scenario.baseline)?;
    plot_scenario_comparison(output_dir, &scenario.baseline, &scenario.alternate)?;

    println!("[Plotting] Charts have been saved to '{}'.", output_dir.display());
    Ok(())
}

/// Slice sizes for the breakdown pie. An all-zero footprint is drawn as equal
/// epsilon slices so the chart never divides by zero.
fn pie_slices(result: &CategoryResult) -> Vec<f64> {
    let sizes: Vec<f64> = result.iter().map(|(_, tonnes)| tonnes).collect();
    if sizes.iter().sum::<f64>() <= 0.0 {
        println!("[Plotting] Warning: Footprint is zero; drawing equal slices.");
        return vec![1e-6; sizes.len()];
    }
    sizes
}

/// Generates a pie chart of the footprint by category.
fn plot_category_breakdown(output_dir: &Path, result: &CategoryResult) -> Result<()> {
    let path = output_dir.join("1_footprint_breakdown.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Your footprint breakdown", ("sans-serif", 40))?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let sizes = pie_slices(result);
    let labels: Vec<String> = result
        .iter()
        .map(|(category, tonnes)| format!("{} ({:.3} t)", category, tonnes))
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &CATEGORY_COLORS, &labels);
    pie.label_style(("sans-serif", 20).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 18).into_font().color(&WHITE));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}

/// Generates a grouped bar chart of baseline vs. scenario emissions per category.
fn plot_scenario_comparison(output_dir: &Path, baseline: &CategoryResult, alternate: &CategoryResult) -> Result<()> {
    let path = output_dir.join("2_scenario_comparison.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tonnes = baseline
        .iter()
        .chain(alternate.iter())
        .map(|(_, tonnes)| tonnes)
        .fold(0.0, f64::max)
        .max(0.1);
    let category_count = Category::ALL.len() as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption("Current vs. What-if (tCO₂e/yr)", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..category_count, 0f64..max_tonnes * 1.2)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(Category::ALL.len() * 2 + 1)
        .x_label_formatter(&|x| {
            let index = (x - 0.5).round();
            if (x - 0.5 - index).abs() < 1e-6 && index >= 0.0 && (index as usize) < Category::ALL.len() {
                Category::ALL[index as usize].to_string()
            } else {
                String::new()
            }
        })
        .y_desc("tCO₂e / year")
        .draw()?;

    let series = [
        ("Current", baseline, RGBColor(178, 34, 34), 0.1),
        ("What-if", alternate, RGBColor(34, 139, 34), 0.5),
    ];
    for (name, result, color, offset) in series {
        chart
            .draw_series(result.iter().enumerate().map(|(i, (_, tonnes))| {
                let x0 = i as f64 + offset;
                Rectangle::new([(x0, 0.0), (x0 + 0.4, tonnes)], color.filled())
            }))?
            .label(name)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_footprint_gets_equal_slices() {
        let sizes = pie_slices(&CategoryResult::default());
        assert_eq!(sizes, vec![1e-6; 4]);
    }

    #[test]
    fn nonzero_footprint_keeps_values() {
        let result = CategoryResult {
            transportation: 0.612,
            electricity: 2.148,
            diet: 2.055,
            waste: 0.075,
            total: 4.89,
        };
        assert_eq!(pie_slices(&result), vec![0.612, 2.148, 2.055, 0.075]);
    }
}

use crate::{
    error::FootprintError,
    model::{self, round_tonnes, EmissionsModel},
    recommend::{self, Recommendation},
};
use carbonforge_schemas::{
    activity::ActivityInput,
    factors::EmissionFactorTable,
    results::{CategoryResult, ScenarioDelta},
    scenario::ScenarioChanges,
};

/// Baseline and alternate results for one what-if evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub baseline_input: ActivityInput,
    pub alternate_input: ActivityInput,
    pub baseline: CategoryResult,
    pub alternate: CategoryResult,
    pub delta: ScenarioDelta,
    pub recommendations: Vec<Recommendation>,
}

/// Builds the alternate input from a baseline and a set of proposed changes.
///
/// The baseline is only read; the returned input is an independent copy.
pub fn apply_changes(baseline: &ActivityInput, changes: &ScenarioChanges) -> Result<ActivityInput, FootprintError> {
    let mut alternate = baseline.clone();

    if let Some(mode) = changes.commute_mode {
        alternate.commute.mode = mode;
    }
    if let Some(occupancy) = changes.car_occupancy {
        alternate.commute.car_occupancy = occupancy;
    }
    if let Some(cut) = changes.electricity_cut_percent {
        if cut > 100 {
            return Err(FootprintError::invalid(
                "scenario.electricity_cut_percent",
                format!("{} is outside 0..=100", cut),
            ));
        }
        alternate.electricity.monthly_kwh = baseline.electricity.monthly_kwh * (1.0 - cut as f64 / 100.0);
    }
    if let Some(pattern) = changes.diet_pattern {
        alternate.diet.pattern = pattern;
    }
    if let Some(extra) = changes.extra_segregation_percent {
        alternate.waste.segregation_percent = baseline.waste.segregation_percent.saturating_add(extra).min(100);
    }

    Ok(alternate)
}

/// Derives the delta between two already computed results.
pub fn scenario_delta(baseline: &CategoryResult, alternate: &CategoryResult) -> ScenarioDelta {
    let delta = round_tonnes(alternate.total - baseline.total);
    ScenarioDelta {
        baseline_total: baseline.total,
        alternate_total: alternate.total,
        delta,
        reduction: if delta < 0.0 { -delta } else { 0.0 },
    }
}

/// Computes both inputs independently against `table` and returns the change
/// in total emissions.
pub fn compare(
    baseline: &ActivityInput,
    alternate: &ActivityInput,
    table: &EmissionFactorTable,
) -> Result<ScenarioDelta, FootprintError> {
    let baseline_result = model::compute(baseline, table)?;
    let alternate_result = model::compute(alternate, table)?;
    Ok(scenario_delta(&baseline_result, &alternate_result))
}

/// Applies `changes` to `baseline`, computes both sides with `model`, and
/// collects the matching recommendations.
pub fn evaluate_scenario(
    model: &EmissionsModel,
    baseline: &ActivityInput,
    changes: &ScenarioChanges,
) -> Result<ScenarioReport, FootprintError> {
    let alternate_input = apply_changes(baseline, changes)?;
    let baseline_result = model.compute(baseline)?;
    let alternate_result = model.compute(&alternate_input)?;
    let recommendations = recommend::recommend(baseline, &alternate_input, changes, model.factor_table())?;

    Ok(ScenarioReport {
        delta: scenario_delta(&baseline_result, &alternate_result),
        baseline_input: baseline.clone(),
        alternate_input,
        baseline: baseline_result,
        alternate: alternate_result,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbonforge_schemas::factors::{DietPattern, TransportMode};

    #[test]
    fn unspecified_dimensions_carry_over() {
        let baseline = ActivityInput::default();
        let alternate = apply_changes(&baseline, &ScenarioChanges::default()).unwrap();
        assert_eq!(alternate, baseline);
    }

    #[test]
    fn overrides_each_dimension() {
        let baseline = ActivityInput::default();
        let changes = ScenarioChanges {
            commute_mode: Some(TransportMode::Rail),
            car_occupancy: Some(2.0),
            electricity_cut_percent: Some(20),
            diet_pattern: Some(DietPattern::Vegan),
            extra_segregation_percent: Some(30),
        };
        let alternate = apply_changes(&baseline, &changes).unwrap();
        assert_eq!(alternate.commute.mode, TransportMode::Rail);
        assert_eq!(alternate.commute.car_occupancy, 2.0);
        assert!((alternate.electricity.monthly_kwh - 200.0).abs() < 1e-9);
        assert_eq!(alternate.diet.pattern, DietPattern::Vegan);
        assert_eq!(alternate.waste.segregation_percent, 50);
        assert_eq!(baseline, ActivityInput::default());
    }

    #[test]
    fn segregation_is_capped_at_100() {
        let baseline = ActivityInput::default();
        let changes = ScenarioChanges {
            extra_segregation_percent: Some(95),
            ..Default::default()
        };
        assert_eq!(apply_changes(&baseline, &changes).unwrap().waste.segregation_percent, 100);

        let changes = ScenarioChanges {
            extra_segregation_percent: Some(u32::MAX),
            ..Default::default()
        };
        assert_eq!(apply_changes(&baseline, &changes).unwrap().waste.segregation_percent, 100);
    }

    #[test]
    fn electricity_cut_above_100_is_rejected() {
        let changes = ScenarioChanges {
            electricity_cut_percent: Some(120),
            ..Default::default()
        };
        assert!(matches!(
            apply_changes(&ActivityInput::default(), &changes),
            Err(FootprintError::InvalidInput { .. })
        ));
    }

    #[test]
    fn delta_and_reduction() {
        let baseline = CategoryResult {
            total: 4.89,
            ..Default::default()
        };
        let lower = CategoryResult {
            total: 2.5,
            ..Default::default()
        };
        let delta = scenario_delta(&baseline, &lower);
        assert!((delta.delta + 2.39).abs() < 1e-9);
        assert!((delta.reduction - 2.39).abs() < 1e-9);

        let higher = scenario_delta(&lower, &baseline);
        assert!(higher.delta > 0.0);
        assert_eq!(higher.reduction, 0.0);

        let same = scenario_delta(&baseline, &baseline);
        assert_eq!(same.delta, 0.0);
        assert_eq!(same.reduction, 0.0);
    }

    #[test]
    fn evaluate_reports_both_sides() {
        let model = EmissionsModel::builder().build().unwrap();
        let changes = ScenarioChanges {
            commute_mode: Some(TransportMode::Bus),
            ..Default::default()
        };
        let report = evaluate_scenario(&model, &ActivityInput::default(), &changes).unwrap();
        assert!((report.baseline.transportation - 0.612).abs() < 1e-9);
        assert!((report.alternate.transportation - 0.349).abs() < 1e-9);
        assert!((report.delta.reduction - 0.263).abs() < 1e-9);
        assert_eq!(report.recommendations.len(), 1);
    }
}

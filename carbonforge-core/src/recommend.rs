//! Advisory messages derived from a baseline and its what-if alternate.

use crate::{error::FootprintError, factors};
use carbonforge_schemas::{
    activity::ActivityInput,
    factors::{DietPattern, EmissionFactorTable, TransportMode},
    scenario::ScenarioChanges,
};
use std::fmt;

const ELECTRICITY_CUT_THRESHOLD_PERCENT: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    ShiftToPublicTransit,
    ReduceElectricity,
    ImproveDiet(DietPattern),
    ImproveSegregation,
    AlreadyOptimized,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::ShiftToPublicTransit => write!(f, "Shift more commute days to bus/rail."),
            Recommendation::ReduceElectricity => write!(
                f,
                "Adopt efficient appliances, LED lighting, and AC setpoint 24-26°C."
            ),
            Recommendation::ImproveDiet(pattern) => write!(
                f,
                "Move toward {} patterns (batch cooking, legumes, millets).",
                pattern.label().to_lowercase()
            ),
            Recommendation::ImproveSegregation => write!(
                f,
                "Improve segregation at source; compost wet waste; keep recyclables clean/dry."
            ),
            Recommendation::AlreadyOptimized => write!(f, "Your scenario already looks optimized!"),
        }
    }
}

/// Evaluates each rule independently, in a fixed order. When none applies the
/// result is a single `AlreadyOptimized`.
pub fn recommend(
    baseline: &ActivityInput,
    alternate: &ActivityInput,
    changes: &ScenarioChanges,
    table: &EmissionFactorTable,
) -> Result<Vec<Recommendation>, FootprintError> {
    let mut recs = Vec::new();

    if alternate.commute.mode.is_public_transit() && baseline.commute.mode == TransportMode::Car {
        recs.push(Recommendation::ShiftToPublicTransit);
    }
    if changes.electricity_cut_percent.unwrap_or(0) >= ELECTRICITY_CUT_THRESHOLD_PERCENT {
        recs.push(Recommendation::ReduceElectricity);
    }
    let baseline_diet = factors::diet_daily_factor(table, baseline.diet.pattern)?;
    let alternate_diet = factors::diet_daily_factor(table, alternate.diet.pattern)?;
    if alternate_diet < baseline_diet {
        recs.push(Recommendation::ImproveDiet(alternate.diet.pattern));
    }
    if alternate.waste.segregation_percent > baseline.waste.segregation_percent {
        recs.push(Recommendation::ImproveSegregation);
    }

    if recs.is_empty() {
        recs.push(Recommendation::AlreadyOptimized);
    }
    Ok(recs)
}

use crate::factors::{Country, DietPattern, TransportMode, TreatmentPathway};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuteInput {
    pub mode: TransportMode,
    pub daily_distance_km: f64,
    pub annual_days_commuted: u32,
    /// People per car. Only meaningful when `mode` is `Car`.
    #[serde(default = "default_car_occupancy")]
    pub car_occupancy: f64,
}

fn default_car_occupancy() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityInput {
    pub monthly_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietInput {
    pub pattern: DietPattern,
    /// Cosmetic; diet factors are already daily totals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteInput {
    pub weekly_residual_kg: f64,
    pub segregation_percent: u32,
    pub treatment_pathway: TreatmentPathway,
}

/// The household activity data for a single calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityInput {
    pub country: Country,
    pub commute: CommuteInput,
    pub electricity: ElectricityInput,
    pub diet: DietInput,
    pub waste: WasteInput,
}

impl Default for ActivityInput {
    /// The calculator's starting values.
    fn default() -> Self {
        Self {
            country: Country::India,
            commute: CommuteInput {
                mode: TransportMode::Car,
                daily_distance_km: 15.0,
                annual_days_commuted: 240,
                car_occupancy: 1.0,
            },
            electricity: ElectricityInput { monthly_kwh: 250.0 },
            diet: DietInput {
                pattern: DietPattern::MediumMeat,
                meals_per_day: None,
            },
            waste: WasteInput {
                weekly_residual_kg: 4.0,
                segregation_percent: 20,
                treatment_pathway: TreatmentPathway::Landfill,
            },
        }
    }
}

use crate::factors::{DietPattern, TransportMode};
use serde::{Deserialize, Serialize};

/// Proposed changes to a baseline `ActivityInput`.
///
/// Every dimension is optional; anything left as `None` carries over from the
/// baseline unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioChanges {
    pub commute_mode: Option<TransportMode>,
    pub car_occupancy: Option<f64>,
    /// Percentage reduction of monthly kWh, 0-100.
    pub electricity_cut_percent: Option<u32>,
    pub diet_pattern: Option<DietPattern>,
    /// Percentage points added to the baseline segregation rate (capped at 100).
    pub extra_segregation_percent: Option<u32>,
}

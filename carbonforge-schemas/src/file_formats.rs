use crate::{activity::ActivityInput, factors::EmissionFactorTable, scenario::ScenarioChanges};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct FactorTableFile {
    pub schema_version: String,
    pub factors: EmissionFactorTable,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationRequestFile {
    pub schema_version: String,
    pub activity: ActivityInput,
    #[serde(default)]
    pub scenario: ScenarioChanges,
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    India,
}

impl Country {
    pub const ALL: [Country; 1] = [Country::India];

    pub fn label(&self) -> &'static str {
        match self {
            Country::India => "India",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bus,
    Rail,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [TransportMode::Car, TransportMode::Bus, TransportMode::Rail];

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
            TransportMode::Rail => "rail",
        }
    }

    pub fn is_public_transit(&self) -> bool {
        matches!(self, TransportMode::Bus | TransportMode::Rail)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietPattern {
    HighMeat,
    MediumMeat,
    LowMeat,
    FishBased,
    Vegetarian,
    Vegan,
}

impl DietPattern {
    pub const ALL: [DietPattern; 6] = [
        DietPattern::HighMeat,
        DietPattern::MediumMeat,
        DietPattern::LowMeat,
        DietPattern::FishBased,
        DietPattern::Vegetarian,
        DietPattern::Vegan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietPattern::HighMeat => "High meat",
            DietPattern::MediumMeat => "Medium meat",
            DietPattern::LowMeat => "Low meat",
            DietPattern::FishBased => "Fish-based",
            DietPattern::Vegetarian => "Vegetarian",
            DietPattern::Vegan => "Vegan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentPathway {
    Landfill,
    Incineration,
    CompostOrAnaerobicDigestion,
}

impl TreatmentPathway {
    pub const ALL: [TreatmentPathway; 3] = [
        TreatmentPathway::Landfill,
        TreatmentPathway::Incineration,
        TreatmentPathway::CompostOrAnaerobicDigestion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TreatmentPathway::Landfill => "Landfill (typical managed)",
            TreatmentPathway::Incineration => "Incineration (energy recovery)",
            TreatmentPathway::CompostOrAnaerobicDigestion => "Composting/AD (food/green fractions)",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(Country, TransportMode, DietPattern, TreatmentPathway);

/// Emission factors used by the model, keyed by the closed enumerations above.
///
/// Values are kgCO2e per activity unit, except `per_capita_benchmark` which is
/// tCO2e per person per year and only used for display. A key that is missing
/// from a map is a configuration error; lookups never fall back to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactorTable {
    /// kgCO2e per kWh of grid electricity.
    pub electricity: HashMap<Country, f64>,
    /// kgCO2e per passenger-km.
    pub transport: HashMap<TransportMode, f64>,
    /// kgCO2e per day.
    pub diet_daily: HashMap<DietPattern, f64>,
    /// kgCO2e per kg of residual waste.
    pub waste: HashMap<TreatmentPathway, f64>,
    /// tCO2e per person per year.
    pub per_capita_benchmark: HashMap<Country, f64>,
}

impl EmissionFactorTable {
    /// The built-in India factor set.
    pub fn reference() -> Self {
        Self {
            // CEA CO2 Baseline Database, FY 2022-23
            electricity: HashMap::from([(Country::India, 0.716)]),
            transport: HashMap::from([
                (TransportMode::Car, 0.170),
                (TransportMode::Bus, 0.097),
                (TransportMode::Rail, 0.008),
            ]),
            // Scarborough et al., Climatic Change 2014
            diet_daily: HashMap::from([
                (DietPattern::HighMeat, 7.19),
                (DietPattern::MediumMeat, 5.63),
                (DietPattern::LowMeat, 4.67),
                (DietPattern::FishBased, 3.91),
                (DietPattern::Vegetarian, 3.81),
                (DietPattern::Vegan, 2.89),
            ]),
            waste: HashMap::from([
                (TreatmentPathway::Landfill, 0.45),
                (TreatmentPathway::Incineration, 1.10),
                (TreatmentPathway::CompostOrAnaerobicDigestion, 0.10),
            ]),
            per_capita_benchmark: HashMap::from([(Country::India, 2.0)]),
        }
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self::reference()
    }
}

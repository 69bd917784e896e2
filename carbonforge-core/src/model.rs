use crate::{error::FootprintError, factors};
use carbonforge_schemas::{
    activity::ActivityInput,
    factors::{EmissionFactorTable, TransportMode},
    results::CategoryResult,
};

const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: f64 = 365.0;
const WEEKS_PER_YEAR: f64 = 52.0;
const MAX_COMMUTE_DAYS: u32 = 365;
const MEALS_PER_DAY_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// How `car_occupancy` enters the transport calculation.
///
/// The published car factor is already per passenger-km, so the calculator
/// has historically recorded occupancy without using it. `DivideVehicleKm`
/// treats the commute distance as vehicle-km shared by the occupants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OccupancyPolicy {
    #[default]
    Recorded,
    DivideVehicleKm,
}

/// Unrounded annual emissions per category, in kgCO2e.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawEmissions {
    pub transportation_kg: f64,
    pub electricity_kg: f64,
    pub diet_kg: f64,
    pub waste_kg: f64,
}

impl RawEmissions {
    /// Exact sum in tonnes, before any rounding.
    pub fn total_tonnes(&self) -> f64 {
        (self.transportation_kg + self.electricity_kg + self.diet_kg + self.waste_kg) / 1000.0
    }

    /// Converts each category to tonnes rounded to 3 decimals, then sums the
    /// rounded values.
    pub fn to_category_result(&self) -> CategoryResult {
        let transportation = round_tonnes(self.transportation_kg / 1000.0);
        let electricity = round_tonnes(self.electricity_kg / 1000.0);
        let diet = round_tonnes(self.diet_kg / 1000.0);
        let waste = round_tonnes(self.waste_kg / 1000.0);
        CategoryResult {
            transportation,
            electricity,
            diet,
            waste,
            total: round_tonnes(transportation + electricity + diet + waste),
        }
    }
}

/// Rounds a tonnes value to 3 decimal places.
///
/// Rounds the exact binary value, so 0.0765 (stored just below the tie)
/// becomes 0.076. Scaling by 1000 first would land on an exact 76.5 and
/// round up.
pub fn round_tonnes(tonnes: f64) -> f64 {
    format!("{:.3}", tonnes).parse().unwrap_or(tonnes)
}

/// Rejects any field outside its declared domain.
pub fn validate_input(input: &ActivityInput) -> Result<(), FootprintError> {
    non_negative("commute.daily_distance_km", input.commute.daily_distance_km)?;
    if input.commute.annual_days_commuted > MAX_COMMUTE_DAYS {
        return Err(FootprintError::invalid(
            "commute.annual_days_commuted",
            format!("{} is outside 0..={}", input.commute.annual_days_commuted, MAX_COMMUTE_DAYS),
        ));
    }
    let occupancy = input.commute.car_occupancy;
    if input.commute.mode == TransportMode::Car && (!occupancy.is_finite() || occupancy < 1.0) {
        return Err(FootprintError::invalid(
            "commute.car_occupancy",
            format!("{} must be at least 1", occupancy),
        ));
    }
    non_negative("electricity.monthly_kwh", input.electricity.monthly_kwh)?;
    if let Some(meals) = input.diet.meals_per_day {
        if !MEALS_PER_DAY_RANGE.contains(&meals) {
            return Err(FootprintError::invalid(
                "diet.meals_per_day",
                format!("{} is outside 1..=5", meals),
            ));
        }
    }
    non_negative("waste.weekly_residual_kg", input.waste.weekly_residual_kg)?;
    if input.waste.segregation_percent > 100 {
        return Err(FootprintError::invalid(
            "waste.segregation_percent",
            format!("{} is outside 0..=100", input.waste.segregation_percent),
        ));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), FootprintError> {
    if !value.is_finite() {
        return Err(FootprintError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(FootprintError::invalid(field, format!("{} is negative", value)));
    }
    Ok(())
}

fn raw_emissions(
    input: &ActivityInput,
    table: &EmissionFactorTable,
    policy: OccupancyPolicy,
) -> Result<RawEmissions, FootprintError> {
    validate_input(input)?;

    let commute = &input.commute;
    let annual_km = commute.daily_distance_km * commute.annual_days_commuted as f64;
    let passenger_km = match (policy, commute.mode) {
        (OccupancyPolicy::DivideVehicleKm, TransportMode::Car) => annual_km / commute.car_occupancy,
        _ => annual_km,
    };
    let transportation_kg = passenger_km * factors::transport_factor(table, commute.mode)?;

    let annual_kwh = input.electricity.monthly_kwh * MONTHS_PER_YEAR;
    let electricity_kg = annual_kwh * factors::electricity_factor(table, input.country)?;

    let diet_kg = factors::diet_daily_factor(table, input.diet.pattern)? * DAYS_PER_YEAR;

    let waste = &input.waste;
    let residual_weekly_kg = waste.weekly_residual_kg * (1.0 - waste.segregation_percent as f64 / 100.0);
    let annual_residual_kg = residual_weekly_kg * WEEKS_PER_YEAR;
    let waste_kg = annual_residual_kg * factors::waste_factor(table, waste.treatment_pathway)?;

    Ok(RawEmissions {
        transportation_kg,
        electricity_kg,
        diet_kg,
        waste_kg,
    })
}

/// Computes annual category emissions for one input against `table`, using
/// the default occupancy policy.
pub fn compute(input: &ActivityInput, table: &EmissionFactorTable) -> Result<CategoryResult, FootprintError> {
    factors::validate_table(table)?;
    Ok(raw_emissions(input, table, OccupancyPolicy::default())?.to_category_result())
}

/// A validated factor table paired with the calculation options.
#[derive(Debug, Clone)]
pub struct EmissionsModel {
    table: EmissionFactorTable,
    occupancy_policy: OccupancyPolicy,
}

impl EmissionsModel {
    /// Creates a new, empty `EmissionsModelBuilder`.
    pub fn builder() -> EmissionsModelBuilder {
        EmissionsModelBuilder::new()
    }

    pub fn factor_table(&self) -> &EmissionFactorTable {
        &self.table
    }

    pub fn occupancy_policy(&self) -> OccupancyPolicy {
        self.occupancy_policy
    }

    /// Computes rounded annual tonnes per category and their total for `input`.
    pub fn compute(&self, input: &ActivityInput) -> Result<CategoryResult, FootprintError> {
        Ok(self.raw_emissions(input)?.to_category_result())
    }

    /// Computes unrounded annual kilograms per category for `input`.
    pub fn raw_emissions(&self, input: &ActivityInput) -> Result<RawEmissions, FootprintError> {
        raw_emissions(input, &self.table, self.occupancy_policy)
    }
}

/// A fluent builder for constructing an `EmissionsModel`.
#[derive(Default)]
pub struct EmissionsModelBuilder {
    table: Option<EmissionFactorTable>,
    occupancy_policy: OccupancyPolicy,
}

impl EmissionsModelBuilder {
    /// Creates a new, empty `EmissionsModelBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the factor table. The built-in reference table is used otherwise.
    pub fn with_factor_table(mut self, table: EmissionFactorTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Sets how car occupancy enters the transport calculation.
    pub fn with_occupancy_policy(mut self, policy: OccupancyPolicy) -> Self {
        self.occupancy_policy = policy;
        self
    }

    /// Validates the factor table and builds the model.
    pub fn build(self) -> Result<EmissionsModel, FootprintError> {
        let table = self.table.unwrap_or_else(EmissionFactorTable::reference);
        factors::validate_table(&table)?;
        Ok(EmissionsModel {
            table,
            occupancy_policy: self.occupancy_policy,
        })
    }
}

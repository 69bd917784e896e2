//! Checked access to an `EmissionFactorTable`.
//!
//! Every lookup fails closed with `UnknownFactorKey` when a key is absent;
//! a missing factor is never treated as zero.

use crate::error::FootprintError;
use carbonforge_schemas::{
    factors::{Country, DietPattern, EmissionFactorTable, TransportMode, TreatmentPathway},
    file_formats::FactorTableFile,
};
use std::{collections::HashMap, fmt::Display, fs, hash::Hash, path::Path};

fn lookup<K>(map: &HashMap<K, f64>, table: &'static str, key: K) -> Result<f64, FootprintError>
where
    K: Eq + Hash + Display,
{
    map.get(&key)
        .copied()
        .ok_or_else(|| FootprintError::UnknownFactorKey {
            table,
            key: key.to_string(),
        })
}

pub fn electricity_factor(table: &EmissionFactorTable, country: Country) -> Result<f64, FootprintError> {
    lookup(&table.electricity, "electricity", country)
}

pub fn transport_factor(table: &EmissionFactorTable, mode: TransportMode) -> Result<f64, FootprintError> {
    lookup(&table.transport, "transport", mode)
}

pub fn diet_daily_factor(table: &EmissionFactorTable, pattern: DietPattern) -> Result<f64, FootprintError> {
    lookup(&table.diet_daily, "diet", pattern)
}

pub fn waste_factor(table: &EmissionFactorTable, pathway: TreatmentPathway) -> Result<f64, FootprintError> {
    lookup(&table.waste, "waste", pathway)
}

pub fn per_capita_benchmark(table: &EmissionFactorTable, country: Country) -> Result<f64, FootprintError> {
    lookup(&table.per_capita_benchmark, "per-capita benchmark", country)
}

fn check_values<K: Display>(map: &HashMap<K, f64>, table: &'static str) -> Result<(), FootprintError> {
    for (key, value) in map {
        if !value.is_finite() || *value < 0.0 {
            return Err(FootprintError::InvalidFactor {
                table,
                key: key.to_string(),
                value: *value,
            });
        }
    }
    Ok(())
}

/// Ensures every factor is a finite, non-negative number.
pub fn validate_table(table: &EmissionFactorTable) -> Result<(), FootprintError> {
    check_values(&table.electricity, "electricity")?;
    check_values(&table.transport, "transport")?;
    check_values(&table.diet_daily, "diet")?;
    check_values(&table.waste, "waste")?;
    check_values(&table.per_capita_benchmark, "per-capita benchmark")?;
    Ok(())
}

/// Parses a factor table from YAML text and validates it.
pub fn parse_factor_table(source: &str, content: &str) -> Result<EmissionFactorTable, FootprintError> {
    let file: FactorTableFile = serde_yaml::from_str(content)
        .map_err(|e| FootprintError::YamlParsing(source.to_string(), e))?;
    validate_table(&file.factors)?;
    Ok(file.factors)
}

/// Loads a factor table from a YAML file on disk.
pub fn load_factor_table<P: AsRef<Path>>(path: P) -> Result<EmissionFactorTable, FootprintError> {
    let display = path.as_ref().display().to_string();
    let content = fs::read_to_string(path.as_ref()).map_err(|e| FootprintError::FileIO(display.clone(), e))?;
    parse_factor_table(&display, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_fails_closed() {
        let mut table = EmissionFactorTable::reference();
        table.waste.remove(&TreatmentPathway::Incineration);
        let err = waste_factor(&table, TreatmentPathway::Incineration).unwrap_err();
        assert!(matches!(err, FootprintError::UnknownFactorKey { table: "waste", .. }));
    }

    #[test]
    fn negative_and_nan_factors_are_rejected() {
        let mut table = EmissionFactorTable::reference();
        table.transport.insert(TransportMode::Bus, -0.1);
        assert!(matches!(
            validate_table(&table),
            Err(FootprintError::InvalidFactor { table: "transport", .. })
        ));

        let mut table = EmissionFactorTable::reference();
        table.diet_daily.insert(DietPattern::Vegan, f64::NAN);
        assert!(validate_table(&table).is_err());
    }

    #[test]
    fn parses_partial_table_from_yaml() {
        let yaml = r#"
schema_version: "1.0"
factors:
  electricity:
    india: 0.5
  transport:
    car: 0.2
  diet_daily:
    vegan: 2.0
  waste:
    landfill: 0.4
  per_capita_benchmark:
    india: 1.5
"#;
        let table = parse_factor_table("inline", yaml).unwrap();
        assert_eq!(electricity_factor(&table, Country::India).unwrap(), 0.5);
        assert!(transport_factor(&table, TransportMode::Rail).is_err());
    }

    #[test]
    fn malformed_yaml_reports_source() {
        let err = parse_factor_table("broken.yaml", "factors: [").unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }
}

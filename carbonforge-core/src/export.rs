use crate::{error::FootprintError, factors};
use carbonforge_schemas::{
    activity::ActivityInput,
    factors::{EmissionFactorTable, TransportMode, TreatmentPathway},
    results::CategoryResult,
};
use csv::Writer;
use serde::Serialize;
use serde_json::json;
use std::{fs, io, path::Path};

pub const RESULTS_CSV_FILE: &str = "personal_carbon_results.csv";
pub const RESULTS_JSON_FILE: &str = "personal_carbon_results.json";

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "tCO2e/yr")]
    tonnes: f64,
}

/// Writes `Category,tCO2e/yr` rows: the four categories followed by `Total`.
pub struct ResultsWriter<W: io::Write> {
    writer: Writer<W>,
}

impl ResultsWriter<fs::File> {
    pub fn create(path: &str) -> Result<Self, csv::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }
}

impl<W: io::Write> ResultsWriter<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: Writer::from_writer(inner),
        }
    }

    pub fn write_result(&mut self, result: &CategoryResult) -> Result<(), csv::Error> {
        for (category, tonnes) in result.iter() {
            self.writer.serialize(ResultRow {
                category: category.name(),
                tonnes,
            })?;
        }
        self.writer.serialize(ResultRow {
            category: "Total",
            tonnes: result.total,
        })?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, anyhow::Error> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {}", e.error()))
    }
}

pub fn write_results_csv(path: &str, result: &CategoryResult) -> Result<(), FootprintError> {
    let mut writer = ResultsWriter::create(path).map_err(|e| FootprintError::CsvError(path.to_string(), e))?;
    writer
        .write_result(result)
        .map_err(|e| FootprintError::CsvError(path.to_string(), e))
}

pub fn results_csv_string(result: &CategoryResult) -> Result<String, FootprintError> {
    let mut writer = ResultsWriter::from_writer(Vec::new());
    writer
        .write_result(result)
        .map_err(|e| FootprintError::CsvError("<memory>".to_string(), e))?;
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes).map_err(anyhow::Error::from)?)
}

#[derive(Debug, Serialize)]
pub struct CommuteExport {
    pub mode: &'static str,
    pub daily_km: f64,
    pub days: u32,
}

#[derive(Debug, Serialize)]
pub struct InputsExport {
    pub commute: CommuteExport,
    pub electricity_monthly_kwh: f64,
    pub diet_type: &'static str,
    pub waste_weekly_kg: f64,
    pub waste_treatment: &'static str,
    pub segregation_percent: u32,
}

/// The downloadable JSON document.
#[derive(Debug, Serialize)]
pub struct ExportPayload {
    pub country: &'static str,
    pub inputs: InputsExport,
    #[serde(rename = "results_tCO2e")]
    pub results_t_co2e: serde_json::Map<String, serde_json::Value>,
}

pub fn export_payload(input: &ActivityInput, result: &CategoryResult) -> ExportPayload {
    ExportPayload {
        country: input.country.label(),
        inputs: InputsExport {
            commute: CommuteExport {
                mode: input.commute.mode.label(),
                daily_km: input.commute.daily_distance_km,
                days: input.commute.annual_days_commuted,
            },
            electricity_monthly_kwh: input.electricity.monthly_kwh,
            diet_type: input.diet.pattern.label(),
            waste_weekly_kg: input.waste.weekly_residual_kg,
            waste_treatment: input.waste.treatment_pathway.label(),
            segregation_percent: input.waste.segregation_percent,
        },
        results_t_co2e: result.to_json_map(),
    }
}

pub fn write_results_json(path: &str, payload: &ExportPayload) -> Result<(), FootprintError> {
    let content = serde_json::to_string_pretty(payload)?;
    fs::write(Path::new(path), content).map_err(|e| FootprintError::FileIO(path.to_string(), e))
}

/// Inputs, applied factors, and results as a single JSON document.
pub fn calculation_details(
    input: &ActivityInput,
    result: &CategoryResult,
    table: &EmissionFactorTable,
) -> Result<serde_json::Value, FootprintError> {
    let transport: serde_json::Map<String, serde_json::Value> = TransportMode::ALL
        .iter()
        .filter_map(|mode| table.transport.get(mode).map(|v| (mode.label().to_string(), json!(v))))
        .collect();
    let waste: serde_json::Map<String, serde_json::Value> = TreatmentPathway::ALL
        .iter()
        .filter_map(|p| table.waste.get(p).map(|v| (p.label().to_string(), json!(v))))
        .collect();
    let car_occupancy = match input.commute.mode {
        TransportMode::Car => json!(input.commute.car_occupancy),
        _ => serde_json::Value::Null,
    };

    Ok(json!({
        "Inputs": {
            "country": input.country.label(),
            "commute_mode": input.commute.mode.label(),
            "daily_commute_km": input.commute.daily_distance_km,
            "commute_days": input.commute.annual_days_commuted,
            "car_occupancy": car_occupancy,
            "monthly_kwh": input.electricity.monthly_kwh,
            "diet_type": input.diet.pattern.label(),
            "weekly_waste_kg": input.waste.weekly_residual_kg,
            "segregation_percent": input.waste.segregation_percent,
            "waste_treatment": input.waste.treatment_pathway.label(),
        },
        "Emission factors (kgCO2e per unit)": {
            "transport": transport,
            "electricity": factors::electricity_factor(table, input.country)?,
            "diet_daily": factors::diet_daily_factor(table, input.diet.pattern)?,
            "waste": waste,
        },
        "Results (tCO2e/year)": result.to_json_map(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::compute;

    fn reference_result() -> CategoryResult {
        compute(&ActivityInput::default(), &EmissionFactorTable::reference()).unwrap()
    }

    #[test]
    fn csv_has_header_four_categories_and_total() {
        let csv = results_csv_string(&reference_result()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Category,tCO2e/yr");
        assert_eq!(lines[1], "Transportation,0.612");
        assert_eq!(lines[3], "Diet,2.055");
        assert_eq!(lines[5], "Total,4.89");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn payload_shape() {
        let payload = export_payload(&ActivityInput::default(), &reference_result());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["country"], "India");
        assert_eq!(value["inputs"]["commute"]["mode"], "car");
        assert_eq!(value["inputs"]["diet_type"], "Medium meat");
        assert_eq!(value["results_tCO2e"]["Electricity"], json!(2.148));
        assert_eq!(value["results_tCO2e"]["Total"], json!(4.89));
    }

    #[test]
    fn details_hide_occupancy_for_non_car_modes() {
        let mut input = ActivityInput::default();
        input.commute.mode = TransportMode::Bus;
        let result = compute(&input, &EmissionFactorTable::reference()).unwrap();
        let details = calculation_details(&input, &result, &EmissionFactorTable::reference()).unwrap();
        assert!(details["Inputs"]["car_occupancy"].is_null());
        assert_eq!(details["Emission factors (kgCO2e per unit)"]["diet_daily"], json!(5.63));
        assert_eq!(details["Emission factors (kgCO2e per unit)"]["transport"]["rail"], json!(0.008));
    }

    #[test]
    fn csv_failures_name_the_file() {
        let path = std::env::temp_dir()
            .join(format!("carbonforge-missing-{}", std::process::id()))
            .join(RESULTS_CSV_FILE);
        let path = path.to_str().unwrap();
        match write_results_csv(path, &reference_result()) {
            Err(FootprintError::CsvError(file, _)) => assert_eq!(file, path),
            other => panic!("expected CsvError, got {other:?}"),
        }
    }

    #[test]
    fn writes_files() {
        let dir = std::env::temp_dir().join(format!("carbonforge-export-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let csv_path = dir.join(RESULTS_CSV_FILE);
        let json_path = dir.join(RESULTS_JSON_FILE);
        let result = reference_result();

        write_results_csv(csv_path.to_str().unwrap(), &result).unwrap();
        write_results_json(json_path.to_str().unwrap(), &export_payload(&ActivityInput::default(), &result)).unwrap();

        assert!(fs::read_to_string(&csv_path).unwrap().ends_with("Total,4.89\n"));
        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed["results_tCO2e"]["Waste"], json!(0.075));
        fs::remove_dir_all(&dir).unwrap();
    }
}

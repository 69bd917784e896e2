use anyhow::{ensure, Context, Result};
use carbonforge_core::factors;
use carbonforge_schemas::{factors::EmissionFactorTable, file_formats::CalculationRequestFile};
use std::{fs, path::Path};

const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

/// The factor table for a run and where it came from.
pub struct FactorSource {
    pub table: EmissionFactorTable,
    pub origin: String,
}

impl FactorSource {
    /// Loads the table from `path`, or falls back to the built-in reference table.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                println!("Loading emission factors from '{}'...", path.display());
                let table = factors::load_factor_table(path)
                    .with_context(|| format!("Failed to load factor table {:?}", path))?;
                Ok(Self {
                    table,
                    origin: path.display().to_string(),
                })
            }
            None => {
                println!("Using built-in reference emission factors.");
                Ok(Self {
                    table: EmissionFactorTable::reference(),
                    origin: "built-in reference".to_string(),
                })
            }
        }
    }
}

/// Reads and parses the calculation request.
pub fn load_request(path: &Path) -> Result<CalculationRequestFile> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let request: CalculationRequestFile =
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse YAML from {:?}", path))?;
    ensure!(
        request.schema_version == SUPPORTED_SCHEMA_VERSION,
        "Unsupported schema_version '{}' in {:?} (expected '{}')",
        request.schema_version,
        path,
        SUPPORTED_SCHEMA_VERSION
    );
    Ok(request)
}

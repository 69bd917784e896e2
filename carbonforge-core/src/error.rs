use thiserror::Error;

#[derive(Debug, Error)]
pub enum FootprintError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("No {table} factor defined for '{key}'")]
    UnknownFactorKey { table: &'static str, key: String },

    #[error("Invalid {table} factor for '{key}': {value} (must be finite and non-negative)")]
    InvalidFactor {
        table: &'static str,
        key: String,
        value: f64,
    },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred during export: {0}")]
    ExportError(#[from] anyhow::Error),
}

impl FootprintError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FootprintError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum ThermoError {
    #[error("Unknown category key '{0}'. Expected one of: energy, transport, industry, buildings, agriculture, waste, forest, ocean, ccs, dac")]
    UnknownCategory(String),
    #[error("Adjustment for '{category}' is not a finite number: {value}")]
    NonFiniteAdjustment { category: String, value: f64 },
    #[error("History entries must be finite, got {0}")]
    NonFiniteHistoryEntry(f64),
    #[error("Invalid model parameters: {0}")]
    InvalidParameters(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML configuration: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("Failed to serialise TOML configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type for `Result<T, ThermoError>`.
pub type ThermoResult<T> = Result<T, ThermoError>;

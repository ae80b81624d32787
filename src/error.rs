use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Precondition violated by the caller: wet bulb above dry bulb,
    /// temperature at or below absolute zero, non-finite number, …
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No refrigerant with this code exists in the table.
    #[error("Unknown refrigerant: {0}")]
    UnknownRefrigerant(String),

    /// Query outside the domain a pressure model is defined on.
    #[error("{refrigerant}: {value} {unit} is outside the valid range [{min}, {max}] {unit}")]
    OutOfRange {
        refrigerant: String,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    /// Malformed static dataset, detected when a table is built.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// A setting read from the environment could not be used.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Reject NaN and ±Infinity at the API boundary.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidInput(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

//! Shared error types for the engine

use thiserror::Error;

/// Main error type for riskmap operations.
///
/// The engine itself raises only `Validation`: zero-denominator cases in the
/// scorers are defined numeric fallbacks, and out-of-range optional inputs
/// are clamped rather than rejected. Errors from the external predictor are
/// the caller's to surface; they are never masked by a locally invented
/// score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A required metrics field was absent or not a finite number.
    #[error("invalid business metrics, missing or non-numeric fields: {}", missing_fields.join(", "))]
    Validation { missing_fields: Vec<String> },
}

impl EngineError {
    pub fn validation(missing_fields: Vec<String>) -> Self {
        EngineError::Validation { missing_fields }
    }

    /// The offending field names, in input-contract spelling.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            EngineError::Validation { missing_fields } => missing_fields,
        }
    }
}

use thiserror::Error;

/// Error type for analysis operations.
///
/// Bins of the pair distribution function whose reference count is zero are
/// not errors; they are reported as non-finite values in the result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Insufficient data: need {required} {what}, have {available}")]
    InsufficientData {
        what: &'static str,
        required: usize,
        available: usize,
    },
}

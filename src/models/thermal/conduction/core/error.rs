use thiserror::Error;

use crate::support::property::PropertyError;

/// Errors raised by conduction calculations.
///
/// Temperatures are reported in kelvin and conductivities in W/(m·K).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConductionError {
    /// A conductivity lookup or evaluation failed.
    #[error("conductivity evaluation failed: {0}")]
    Property(#[from] PropertyError),

    /// The integration span leaves the conductivity fit's valid range.
    #[error(
        "temperature span [{low} K, {high} K] is outside the conductivity range [{min} K, {max} K]"
    )]
    OutOfRange {
        low: f64,
        high: f64,
        min: f64,
        max: f64,
    },

    /// The call parameters are malformed.
    #[error("invalid arguments: {context}")]
    InvalidArguments { context: String },

    /// A sampled conductivity was zero, negative, or not finite.
    #[error("thermal conductivity {conductivity} W/(m·K) at {temperature} K is not positive")]
    NonPositiveConductivity { temperature: f64, conductivity: f64 },
}

impl ConductionError {
    pub(super) fn invalid_arguments(context: impl Into<String>) -> Self {
        Self::InvalidArguments {
            context: context.into(),
        }
    }
}

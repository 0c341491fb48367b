use thiserror::Error;

/// Errors raised while resolving or evaluating a material property.
///
/// Every variant is deterministic: retrying with the same inputs against the
/// same catalog produces the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// The material id is not in the catalog.
    #[error("material '{material}' not found")]
    MaterialNotFound { material: String },

    /// The material exists but has no property with this exact name.
    #[error("property '{property}' not found for material '{material}' (available: {available:?})")]
    PropertyNotFound {
        material: String,
        property: String,
        available: Vec<String>,
    },

    /// The temperature lies outside the fit's validity window.
    ///
    /// Temperatures are reported in kelvin.
    #[error("temperature {temperature} K is outside valid range [{min} K, {max} K]")]
    OutOfRange { temperature: f64, min: f64, max: f64 },

    /// The equation family name is not one this crate evaluates.
    #[error("unsupported equation type: {equation}")]
    UnsupportedEquation { equation: String },

    /// The curve model is mathematically undefined at the input.
    ///
    /// For example, a logarithmic fit at `T ≤ 0` or a rational fit whose
    /// denominator vanishes.
    #[error("domain error: {context}")]
    Domain { context: String },

    /// The call parameters are malformed.
    #[error("invalid arguments: {context}")]
    InvalidArguments { context: String },

    /// A catalog record failed validation at ingestion.
    #[error("invalid property record: {context}")]
    InvalidRecord { context: String },
}

impl PropertyError {
    /// Returns `true` for both material and property lookup misses.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MaterialNotFound { .. } | Self::PropertyNotFound { .. }
        )
    }

    pub(crate) fn domain(context: impl Into<String>) -> Self {
        Self::Domain {
            context: context.into(),
        }
    }

    pub(crate) fn invalid_arguments(context: impl Into<String>) -> Self {
        Self::InvalidArguments {
            context: context.into(),
        }
    }

    pub(crate) fn invalid_record(context: impl Into<String>) -> Self {
        Self::InvalidRecord {
            context: context.into(),
        }
    }
}

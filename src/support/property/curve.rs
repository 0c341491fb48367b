//! Closed-form curve models for temperature-dependent properties.
//!
//! The free functions are stateless and evaluate one equation family each.
//! [`CurveModel`] is the validated, tagged form stored in a
//! [`PropertySpec`](super::PropertySpec).

use std::{fmt, str::FromStr};

use super::PropertyError;

/// Equation family of a curve fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EquationType {
    /// `Σ cᵢ·Tⁱ`
    Polynomial,
    /// `10^(Σ cᵢ·log₁₀(T)ⁱ)`
    LogPolynomial,
    /// `10^(Σ aᵢ·T^(i/2) / Σ bᵢ·T^(i/2))`
    Rational,
}

impl EquationType {
    /// Canonical catalog name of the family.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Polynomial => "polynomial",
            Self::LogPolynomial => "logarithmic_polynomial",
            Self::Rational => "rational",
        }
    }
}

impl fmt::Display for EquationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EquationType {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "polynomial" => Ok(Self::Polynomial),
            "logarithmic_polynomial" | "log_polynomial" => Ok(Self::LogPolynomial),
            "rational" => Ok(Self::Rational),
            other => Err(PropertyError::UnsupportedEquation {
                equation: other.to_owned(),
            }),
        }
    }
}

/// A curve model with its coefficients.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveModel {
    Polynomial(Vec<f64>),
    LogPolynomial(Vec<f64>),
    Rational {
        numerator: Vec<f64>,
        denominator: Vec<f64>,
    },
}

impl CurveModel {
    /// Equation family of this model.
    #[must_use]
    pub fn equation_type(&self) -> EquationType {
        match self {
            Self::Polynomial(_) => EquationType::Polynomial,
            Self::LogPolynomial(_) => EquationType::LogPolynomial,
            Self::Rational { .. } => EquationType::Rational,
        }
    }

    /// Evaluates the model at `t_k` kelvin.
    ///
    /// No range check is applied here; callers validate the temperature
    /// against the fit's window first.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Domain`] when the model is undefined at `t_k`.
    pub fn evaluate(&self, t_k: f64) -> Result<f64, PropertyError> {
        match self {
            Self::Polynomial(coefficients) => polynomial(t_k, coefficients),
            Self::LogPolynomial(coefficients) => log_polynomial(t_k, coefficients),
            Self::Rational {
                numerator,
                denominator,
            } => rational(t_k, numerator, denominator),
        }
    }
}

/// Evaluates `Σ cᵢ·Tⁱ`.
///
/// ```
/// use cryotherm_models::support::property::curve::polynomial;
///
/// assert_eq!(polynomial(10.0, &[1.0, 2.0, 0.1]).unwrap(), 31.0);
/// ```
///
/// # Errors
///
/// Returns [`PropertyError::Domain`] if `t_k` is negative or `NaN`.
pub fn polynomial(t_k: f64, coefficients: &[f64]) -> Result<f64, PropertyError> {
    if t_k.is_nan() || t_k < 0.0 {
        return Err(PropertyError::domain(format!(
            "polynomial model requires T >= 0, got {t_k}"
        )));
    }
    Ok(power_series(t_k, coefficients))
}

/// Evaluates `10^(Σ cᵢ·Lⁱ)` with `L = log₁₀(T)`.
///
/// # Errors
///
/// Returns [`PropertyError::Domain`] if `t_k` is not strictly positive.
pub fn log_polynomial(t_k: f64, coefficients: &[f64]) -> Result<f64, PropertyError> {
    if t_k.is_nan() || t_k <= 0.0 {
        return Err(PropertyError::domain(format!(
            "logarithmic polynomial model requires T > 0, got {t_k}"
        )));
    }
    let exponent = power_series(t_k.log10(), coefficients);
    Ok(10f64.powf(exponent))
}

/// Evaluates `10^(N/D)` where `N = Σ aᵢ·T^(i/2)` and `D = Σ bᵢ·T^(i/2)`.
///
/// # Errors
///
/// Returns [`PropertyError::Domain`] if `t_k` is negative or `NaN`, or if
/// the denominator is exactly zero at `t_k`.
pub fn rational(t_k: f64, numerator: &[f64], denominator: &[f64]) -> Result<f64, PropertyError> {
    if t_k.is_nan() || t_k < 0.0 {
        return Err(PropertyError::domain(format!(
            "rational model requires T >= 0, got {t_k}"
        )));
    }
    let num = half_power_series(t_k, numerator);
    let den = half_power_series(t_k, denominator);
    if den == 0.0 {
        return Err(PropertyError::domain(format!(
            "rational model denominator is zero at T = {t_k}"
        )));
    }
    Ok(10f64.powf(num / den))
}

/// `Σ cᵢ·xⁱ`, summed in index order.
///
/// Powers go through `powf`, not `powi`, so results match a libm `pow`
/// evaluation of the same fit bit for bit.
fn power_series(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .zip(0_u32..)
        .fold(0.0, |acc, (c, i)| acc + c * x.powf(f64::from(i)))
}

/// `Σ cᵢ·x^(i/2)`, summed in index order.
fn half_power_series(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .zip(0_u32..)
        .fold(0.0, |acc, (c, i)| acc + c * x.powf(f64::from(i) * 0.5))
}

use crate::support::constraint::NonNegative;

use super::{CurveModel, EquationType, PropertyError};

/// Inclusive validity window of a curve fit, in kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    min: f64,
    max: f64,
}

impl TemperatureRange {
    /// Creates a range with `0 ≤ min < max`, both finite.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidRecord`] otherwise.
    pub fn new(min: f64, max: f64) -> Result<Self, PropertyError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PropertyError::invalid_record(format!(
                "temperature range bounds must be finite, got [{min}, {max}]"
            )));
        }
        NonNegative::new(min).map_err(|err| {
            PropertyError::invalid_record(format!("temperature range minimum {min}: {err}"))
        })?;
        if min >= max {
            return Err(PropertyError::invalid_record(format!(
                "temperature range minimum must be below maximum, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    /// Builds a range from bounds already known to satisfy `0 ≤ min < max`.
    pub(crate) const fn new_unchecked(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `t_k` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, t_k: f64) -> bool {
        self.min <= t_k && t_k <= self.max
    }

    /// Checks that `t_k` lies within the range.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] with the requested value and
    /// both bounds.
    pub fn check(&self, t_k: f64) -> Result<(), PropertyError> {
        if self.contains(t_k) {
            Ok(())
        } else {
            Err(PropertyError::OutOfRange {
                temperature: t_k,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Intersects `[low, high]` with this range.
    ///
    /// Returns `None` when the intersection is empty or a single point.
    #[must_use]
    pub fn clamp(&self, low: f64, high: f64) -> Option<(f64, f64)> {
        let low = low.max(self.min);
        let high = high.min(self.max);
        (low < high).then_some((low, high))
    }
}

/// Validated calculation parameters for one material property.
///
/// A spec is immutable once built. All structural validation happens in
/// [`PropertySpec::new`] or the [`PropertyRecord`] conversion, so evaluation
/// only has to check the temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    model: CurveModel,
    range: TemperatureRange,
    units: String,
}

impl PropertySpec {
    /// Builds a spec from a curve model, validity range, and units label.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidRecord`] if any coefficient list is
    /// empty or contains a non-finite value.
    pub fn new(
        model: CurveModel,
        range: TemperatureRange,
        units: impl Into<String>,
    ) -> Result<Self, PropertyError> {
        match &model {
            CurveModel::Polynomial(c) | CurveModel::LogPolynomial(c) => {
                check_coefficients("coefficients", c)?;
            }
            CurveModel::Rational {
                numerator,
                denominator,
            } => {
                check_coefficients("numerator coefficients", numerator)?;
                check_coefficients("denominator coefficients", denominator)?;
            }
        }
        Ok(Self::new_unchecked(model, range, units))
    }

    /// Builds a spec from data already known to be valid.
    pub(crate) fn new_unchecked(
        model: CurveModel,
        range: TemperatureRange,
        units: impl Into<String>,
    ) -> Self {
        Self {
            model,
            range,
            units: units.into(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &CurveModel {
        &self.model
    }

    #[must_use]
    pub fn equation_type(&self) -> EquationType {
        self.model.equation_type()
    }

    #[must_use]
    pub fn range(&self) -> TemperatureRange {
        self.range
    }

    #[must_use]
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Range-checks `t_k` and evaluates the curve.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] before evaluation if `t_k` is
    /// outside the range, or [`PropertyError::Domain`] from the model.
    pub fn evaluate(&self, t_k: f64) -> Result<f64, PropertyError> {
        self.range.check(t_k)?;
        self.model.evaluate(t_k)
    }
}

fn check_coefficients(label: &str, coefficients: &[f64]) -> Result<(), PropertyError> {
    if coefficients.is_empty() {
        return Err(PropertyError::invalid_record(format!("{label} are empty")));
    }
    if let Some(bad) = coefficients.iter().find(|c| !c.is_finite()) {
        return Err(PropertyError::invalid_record(format!(
            "{label} contain a non-finite value ({bad})"
        )));
    }
    Ok(())
}

/// Loosely-typed property data as it arrives from an external catalog.
///
/// Convert with [`PropertySpec::try_from`], which validates the record once.
/// Rational records use an explicit numerator or denominator list where one
/// is present, and fill any missing part from an even split of
/// `coefficients`, first half numerator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyRecord {
    pub equation_type: String,
    pub coefficients: Vec<f64>,
    pub numerator_coefficients: Option<Vec<f64>>,
    pub denominator_coefficients: Option<Vec<f64>>,
    pub temperature_range: (f64, f64),
    pub units: String,
}

impl TryFrom<PropertyRecord> for PropertySpec {
    type Error = PropertyError;

    fn try_from(record: PropertyRecord) -> Result<Self, Self::Error> {
        let equation: EquationType = record.equation_type.parse()?;
        let (min, max) = record.temperature_range;
        let range = TemperatureRange::new(min, max)?;

        let model = match equation {
            EquationType::Polynomial => CurveModel::Polynomial(record.coefficients),
            EquationType::LogPolynomial => CurveModel::LogPolynomial(record.coefficients),
            EquationType::Rational => match (
                record.numerator_coefficients,
                record.denominator_coefficients,
            ) {
                (Some(numerator), Some(denominator)) => CurveModel::Rational {
                    numerator,
                    denominator,
                },
                (numerator, denominator) => {
                    let (split_numerator, split_denominator) =
                        split_rational(record.coefficients)?;
                    CurveModel::Rational {
                        numerator: numerator.unwrap_or(split_numerator),
                        denominator: denominator.unwrap_or(split_denominator),
                    }
                }
            },
        };

        Self::new(model, range, record.units)
    }
}

/// Splits flat rational coefficients into `(numerator, denominator)` halves.
fn split_rational(mut coefficients: Vec<f64>) -> Result<(Vec<f64>, Vec<f64>), PropertyError> {
    if coefficients.is_empty() || coefficients.len() % 2 != 0 {
        return Err(PropertyError::invalid_record(format!(
            "rational coefficients must have a non-zero even length to split, got {}",
            coefficients.len()
        )));
    }
    let denominator = coefficients.split_off(coefficients.len() / 2);
    Ok((coefficients, denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(equation: &str, coefficients: &[f64]) -> PropertyRecord {
        PropertyRecord {
            equation_type: equation.into(),
            coefficients: coefficients.to_vec(),
            temperature_range: (4.0, 300.0),
            units: "W/(m·K)".into(),
            ..PropertyRecord::default()
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = TemperatureRange::new(4.0, 300.0).unwrap();
        assert!(range.check(4.0).is_ok());
        assert!(range.check(300.0).is_ok());

        let below = f64::from_bits(4.0_f64.to_bits() - 1);
        let above = f64::from_bits(300.0_f64.to_bits() + 1);
        assert_eq!(
            range.check(below),
            Err(PropertyError::OutOfRange {
                temperature: below,
                min: 4.0,
                max: 300.0
            })
        );
        assert!(range.check(above).is_err());
        assert!(range.check(f64::NAN).is_err());
    }

    #[test]
    fn range_rejects_inverted_or_negative_bounds() {
        assert!(TemperatureRange::new(300.0, 4.0).is_err());
        assert!(TemperatureRange::new(4.0, 4.0).is_err());
        assert!(TemperatureRange::new(-1.0, 4.0).is_err());
        assert!(TemperatureRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn range_clamp() {
        let range = TemperatureRange::new(4.0, 300.0).unwrap();
        assert_eq!(range.clamp(1.0, 500.0), Some((4.0, 300.0)));
        assert_eq!(range.clamp(77.0, 100.0), Some((77.0, 100.0)));
        assert_eq!(range.clamp(300.0, 400.0), None);
        assert_eq!(range.clamp(100.0, 77.0), None);
    }

    #[test]
    fn rational_record_splits_flat_coefficients() {
        let spec = PropertySpec::try_from(record("rational", &[1.0, 2.0, 1.0, 1.0])).unwrap();
        assert_eq!(
            spec.model(),
            &CurveModel::Rational {
                numerator: vec![1.0, 2.0],
                denominator: vec![1.0, 1.0],
            }
        );
    }

    #[test]
    fn rational_record_prefers_explicit_parts() {
        let spec = PropertySpec::try_from(PropertyRecord {
            numerator_coefficients: Some(vec![3.0]),
            denominator_coefficients: Some(vec![1.0, 0.5, 0.25]),
            ..record("rational", &[1.0, 2.0])
        })
        .unwrap();
        assert_eq!(
            spec.model(),
            &CurveModel::Rational {
                numerator: vec![3.0],
                denominator: vec![1.0, 0.5, 0.25],
            }
        );
    }

    #[test]
    fn rational_record_fills_a_missing_part_from_the_split() {
        let numerator_only = PropertySpec::try_from(PropertyRecord {
            numerator_coefficients: Some(vec![9.0]),
            ..record("rational", &[1.0, 2.0, 1.0, 1.0])
        })
        .unwrap();
        assert_eq!(
            numerator_only.model(),
            &CurveModel::Rational {
                numerator: vec![9.0],
                denominator: vec![1.0, 1.0],
            }
        );

        let denominator_only = PropertySpec::try_from(PropertyRecord {
            denominator_coefficients: Some(vec![2.0, 0.5]),
            ..record("rational", &[1.0, 2.0, 1.0, 1.0])
        })
        .unwrap();
        assert_eq!(
            denominator_only.model(),
            &CurveModel::Rational {
                numerator: vec![1.0, 2.0],
                denominator: vec![2.0, 0.5],
            }
        );

        // The missing half still needs a splittable list.
        let err = PropertySpec::try_from(PropertyRecord {
            numerator_coefficients: Some(vec![9.0]),
            ..record("rational", &[1.0, 2.0, 3.0])
        })
        .unwrap_err();
        assert!(matches!(err, PropertyError::InvalidRecord { .. }));
    }

    #[test]
    fn rational_record_with_odd_length_is_invalid() {
        let err = PropertySpec::try_from(record("rational", &[1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(err, PropertyError::InvalidRecord { .. }));
    }

    #[test]
    fn records_are_validated_once() {
        assert!(matches!(
            PropertySpec::try_from(record("cubic_spline", &[1.0])),
            Err(PropertyError::UnsupportedEquation { .. })
        ));
        assert!(matches!(
            PropertySpec::try_from(record("polynomial", &[])),
            Err(PropertyError::InvalidRecord { .. })
        ));
        assert!(matches!(
            PropertySpec::try_from(record("polynomial", &[1.0, f64::NAN])),
            Err(PropertyError::InvalidRecord { .. })
        ));
        assert!(matches!(
            PropertySpec::try_from(PropertyRecord {
                temperature_range: (300.0, 4.0),
                ..record("polynomial", &[1.0])
            }),
            Err(PropertyError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn evaluation_checks_range_first() {
        // A log fit at 0 K would be a domain error, but the range check wins.
        let spec = PropertySpec::try_from(record("logarithmic_polynomial", &[1.0])).unwrap();
        assert!(matches!(
            spec.evaluate(0.0),
            Err(PropertyError::OutOfRange { .. })
        ));
        assert_eq!(spec.evaluate(4.0).unwrap(), 10.0);
    }
}

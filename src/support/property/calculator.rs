use uom::si::{
    f64::{ThermalConductivity, ThermodynamicTemperature},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{PropertyError, PropertyKind, PropertyLookup, PropertySpec};

/// Decimal digits kept by [`PropertyCalculator::evaluate`] when unspecified.
pub const DEFAULT_PRECISION: u32 = 6;

/// Largest accepted rounding precision.
pub const MAX_PRECISION: u32 = 15;

/// Largest accepted point count for [`PropertyCalculator::series`].
pub const MAX_SERIES_POINTS: usize = 100_000;

/// A single property evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationRequest<'r> {
    pub material: &'r str,
    pub property: &'r str,
    pub temperature: ThermodynamicTemperature,
    /// Decimal digits to keep, [`DEFAULT_PRECISION`] if `None`.
    pub precision: Option<u32>,
}

impl<'r> EvaluationRequest<'r> {
    #[must_use]
    pub fn new(
        material: &'r str,
        property: &'r str,
        temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            material,
            property,
            temperature,
            precision: None,
        }
    }

    #[must_use]
    pub fn with_precision(self, precision: u32) -> Self {
        Self {
            precision: Some(precision),
            ..self
        }
    }
}

/// A temperature sweep of one property.
///
/// Points where evaluation failed hold `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub temperatures: Vec<ThermodynamicTemperature>,
    pub values: Vec<Option<f64>>,
}

impl Series {
    #[must_use]
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Iterates `(temperature, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ThermodynamicTemperature, Option<f64>)> + '_ {
        self.temperatures
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

/// Evaluates material properties through a [`PropertyLookup`].
///
/// The calculator holds a shared borrow of the lookup and no other state, so
/// it is cheap to copy and safe to use from several threads at once when the
/// lookup is `Sync`.
///
/// Rounding is half-to-even at the requested number of decimal digits.
#[derive(Debug)]
pub struct PropertyCalculator<'a, L: ?Sized> {
    lookup: &'a L,
}

impl<L: ?Sized> Clone for PropertyCalculator<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ?Sized> Copy for PropertyCalculator<'_, L> {}

impl<'a, L: PropertyLookup + ?Sized> PropertyCalculator<'a, L> {
    #[must_use]
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    #[must_use]
    pub fn lookup(&self) -> &'a L {
        self.lookup
    }

    /// Evaluates one property at one temperature.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error if the material or exact property name
    /// is absent, [`PropertyError::OutOfRange`] if the temperature is outside
    /// the fit's inclusive window, [`PropertyError::Domain`] if the curve is
    /// undefined there, or [`PropertyError::InvalidArguments`] if the
    /// precision exceeds [`MAX_PRECISION`].
    pub fn evaluate(&self, request: &EvaluationRequest<'_>) -> Result<f64, PropertyError> {
        let precision = check_precision(request.precision)?;
        let spec = self.lookup.property(request.material, request.property)?;
        evaluate_spec(spec, request.temperature.get::<kelvin>(), precision)
    }

    /// Shorthand for [`evaluate`](Self::evaluate).
    ///
    /// # Errors
    ///
    /// See [`evaluate`](Self::evaluate).
    pub fn value(
        &self,
        material: &str,
        property: &str,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        self.evaluate(&EvaluationRequest::new(material, property, temperature))
    }

    /// Thermal conductivity, with catalog values taken as W/(m·K).
    ///
    /// # Errors
    ///
    /// See [`evaluate`](Self::evaluate).
    pub fn thermal_conductivity(
        &self,
        material: &str,
        temperature: ThermodynamicTemperature,
        variant: Option<&str>,
    ) -> Result<ThermalConductivity, PropertyError> {
        let value = self.kind_value(
            PropertyKind::ThermalConductivity,
            material,
            temperature,
            variant,
        )?;
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(value))
    }

    /// Specific heat in the catalog's units (J/(kg·K) for built-in data).
    ///
    /// # Errors
    ///
    /// See [`evaluate`](Self::evaluate).
    pub fn specific_heat(
        &self,
        material: &str,
        temperature: ThermodynamicTemperature,
        variant: Option<&str>,
    ) -> Result<f64, PropertyError> {
        self.kind_value(PropertyKind::SpecificHeat, material, temperature, variant)
    }

    /// Young's modulus in the catalog's units (GPa for built-in data).
    ///
    /// # Errors
    ///
    /// See [`evaluate`](Self::evaluate).
    pub fn youngs_modulus(
        &self,
        material: &str,
        temperature: ThermodynamicTemperature,
        variant: Option<&str>,
    ) -> Result<f64, PropertyError> {
        self.kind_value(PropertyKind::YoungsModulus, material, temperature, variant)
    }

    /// Linear thermal expansion relative to room temperature, in the
    /// catalog's units.
    ///
    /// # Errors
    ///
    /// See [`evaluate`](Self::evaluate).
    pub fn linear_expansion(
        &self,
        material: &str,
        temperature: ThermodynamicTemperature,
        variant: Option<&str>,
    ) -> Result<f64, PropertyError> {
        self.kind_value(PropertyKind::LinearExpansion, material, temperature, variant)
    }

    fn kind_value(
        &self,
        kind: PropertyKind,
        material: &str,
        temperature: ThermodynamicTemperature,
        variant: Option<&str>,
    ) -> Result<f64, PropertyError> {
        let property = kind.with_variant(variant);
        self.value(material, &property, temperature)
    }

    /// Evaluates a property over `points` evenly spaced temperatures.
    ///
    /// The requested span is first clamped to the property's valid range.
    /// Per-point failures become `None` instead of aborting the sweep.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error from the lookup, or with
    /// [`PropertyError::InvalidArguments`] if `points` is below 2 or above
    /// [`MAX_SERIES_POINTS`], the precision is too large, or the clamped span
    /// is empty.
    pub fn series(
        &self,
        material: &str,
        property: &str,
        span: (ThermodynamicTemperature, ThermodynamicTemperature),
        points: usize,
        precision: Option<u32>,
    ) -> Result<Series, PropertyError> {
        if !(2..=MAX_SERIES_POINTS).contains(&points) {
            return Err(PropertyError::invalid_arguments(format!(
                "series needs between 2 and {MAX_SERIES_POINTS} points, got {points}"
            )));
        }
        let precision = check_precision(precision)?;
        let spec = self.lookup.property(material, property)?;

        let (low, high) = (span.0.get::<kelvin>(), span.1.get::<kelvin>());
        let range = spec.range();
        let (low, high) = range.clamp(low, high).ok_or_else(|| {
            PropertyError::invalid_arguments(format!(
                "requested span [{low} K, {high} K] does not overlap valid range [{} K, {} K]",
                range.min(),
                range.max()
            ))
        })?;

        let kelvins = linspace(low, high, points);
        let values = kelvins
            .iter()
            .map(|&t| evaluate_spec(spec, t, precision).ok())
            .collect();
        let temperatures = kelvins
            .into_iter()
            .map(ThermodynamicTemperature::new::<kelvin>)
            .collect();

        Ok(Series {
            temperatures,
            values,
        })
    }
}

/// Range-checks, evaluates, and rounds against an already resolved spec.
pub(crate) fn evaluate_spec(
    spec: &PropertySpec,
    t_k: f64,
    precision: u32,
) -> Result<f64, PropertyError> {
    let value = spec.evaluate(t_k)?;
    Ok(round_to_precision(value, precision))
}

pub(crate) fn check_precision(precision: Option<u32>) -> Result<u32, PropertyError> {
    let precision = precision.unwrap_or(DEFAULT_PRECISION);
    if precision > MAX_PRECISION {
        return Err(PropertyError::invalid_arguments(format!(
            "precision must be at most {MAX_PRECISION} digits, got {precision}"
        )));
    }
    Ok(precision)
}

/// Rounds `value` to `precision` decimal digits, ties to even.
///
/// Values too large to carry that many fractional digits in an `f64`, and
/// non-finite values, are returned unchanged.
///
/// ```
/// use cryotherm_models::support::property::round_to_precision;
///
/// assert_eq!(round_to_precision(1.234_567_89, 3), 1.235);
/// assert_eq!(round_to_precision(2.5, 0), 2.0);
/// assert_eq!(round_to_precision(3.5, 0), 4.0);
/// ```
#[must_use]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    // 2^52: beyond this every f64 is already an integer.
    const LIMIT: f64 = 4_503_599_627_370_496.0;

    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= LIMIT {
        return value;
    }
    scaled.round_ties_even() / factor
}

/// `n ≥ 2` evenly spaced values from `start` to exactly `end`.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let last = n.saturating_sub(1);
    let step = (end - start) / last as f64;
    (0..n)
        .map(|i| if i == last { end } else { start + step * i as f64 })
        .collect()
}

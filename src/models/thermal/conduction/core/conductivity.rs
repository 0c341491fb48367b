use crate::support::property::{
    PropertyLookup, PropertySpec, TemperatureRange,
    calculator::{check_precision, evaluate_spec},
};

use super::ConductionError;

/// A resolved conductivity fit, sampled at a fixed rounding precision.
#[derive(Debug, Clone, Copy)]
pub(super) struct Conductivity<'s> {
    spec: &'s PropertySpec,
    precision: u32,
}

impl<'s> Conductivity<'s> {
    pub(super) fn resolve<L: PropertyLookup + ?Sized>(
        lookup: &'s L,
        material: &str,
        property: &str,
        precision: u32,
    ) -> Result<Self, ConductionError> {
        let precision = check_precision(Some(precision))?;
        let spec = lookup.property(material, property)?;
        Ok(Self { spec, precision })
    }

    pub(super) fn range(&self) -> TemperatureRange {
        self.spec.range()
    }

    /// Conductivity at `t_k` in W/(m·K), required to be positive.
    pub(super) fn at(&self, t_k: f64) -> Result<f64, ConductionError> {
        let k = evaluate_spec(self.spec, t_k, self.precision)?;
        if k.is_finite() && k > 0.0 {
            Ok(k)
        } else {
            Err(ConductionError::NonPositiveConductivity {
                temperature: t_k,
                conductivity: k,
            })
        }
    }

    /// Fails unless `[low, high]` lies inside the fit's range.
    pub(super) fn check_span(&self, low: f64, high: f64) -> Result<(), ConductionError> {
        let range = self.range();
        if range.contains(low) && range.contains(high) {
            Ok(())
        } else {
            Err(ConductionError::OutOfRange {
                low,
                high,
                min: range.min(),
                max: range.max(),
            })
        }
    }
}

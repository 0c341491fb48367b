use crate::support::property::{
    CurveModel, MAX_PRECISION, PropertyError, PropertyLookup, PropertySpec, TemperatureRange,
};

use super::conductivity::Conductivity;

/// Lookup with analytic conductivity curves on `[4 K, 300 K]`.
///
/// - `constant`: `k = 10`
/// - `linear`: `k = 1 + 0.1·T`
/// - `sign_change`: `k = T - 100`, negative below 100 K
pub(super) struct TestLookup {
    constant: PropertySpec,
    linear: PropertySpec,
    sign_change: PropertySpec,
}

impl TestLookup {
    pub(super) fn new() -> Self {
        let spec = |coefficients: Vec<f64>| {
            PropertySpec::new(
                CurveModel::Polynomial(coefficients),
                TemperatureRange::new(4.0, 300.0).unwrap(),
                "W/(m·K)",
            )
            .unwrap()
        };
        Self {
            constant: spec(vec![10.0]),
            linear: spec(vec![1.0, 0.1]),
            sign_change: spec(vec![-100.0, 1.0]),
        }
    }
}

impl PropertyLookup for TestLookup {
    fn property(&self, material: &str, property: &str) -> Result<&PropertySpec, PropertyError> {
        let spec = match material {
            "constant" => &self.constant,
            "linear" => &self.linear,
            "sign_change" => &self.sign_change,
            _ => {
                return Err(PropertyError::MaterialNotFound {
                    material: material.to_owned(),
                });
            }
        };
        if property == "thermal_conductivity" {
            Ok(spec)
        } else {
            Err(PropertyError::PropertyNotFound {
                material: material.to_owned(),
                property: property.to_owned(),
                available: vec!["thermal_conductivity".to_owned()],
            })
        }
    }

    fn material_name(&self, material: &str) -> Option<&str> {
        match material {
            "linear" => Some("Linear test conductor"),
            _ => None,
        }
    }
}

/// Unrounded conductivity of a test material.
pub(super) fn conductivity<'a>(lookup: &'a TestLookup, material: &str) -> Conductivity<'a> {
    Conductivity::resolve(lookup, material, "thermal_conductivity", MAX_PRECISION).unwrap()
}

/// Analytic `k = 1 + 0.1·T` integral from `low` to `high`.
pub(super) fn linear_integral(low: f64, high: f64) -> f64 {
    (high - low) + 0.05 * (high * high - low * low)
}

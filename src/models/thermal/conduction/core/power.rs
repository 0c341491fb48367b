use crate::support::geometry::Geometry;
use uom::si::{area::square_meter, length::meter};

use super::{ConductionError, conductivity::Conductivity, integral::conductivity_integral};

/// `A/L` of a prismatic conductor, in meters.
pub(super) fn shape_factor<G: Geometry + ?Sized>(geometry: &G) -> f64 {
    geometry.cross_sectional_area().get::<square_meter>() / geometry.length().get::<meter>()
}

/// Heat flow `Q = (A/L)·∫k dT` from `hot` to `cold`, in watts.
pub(super) fn thermal_power(
    k: &Conductivity<'_>,
    shape_factor: f64,
    hot: f64,
    cold: f64,
    samples: usize,
    max_samples: usize,
) -> Result<f64, ConductionError> {
    if hot.is_nan() || cold.is_nan() || hot <= cold {
        return Err(ConductionError::invalid_arguments(format!(
            "hot end must be warmer than cold end, got {hot} K and {cold} K"
        )));
    }
    let integral = conductivity_integral(k, cold, hot, samples, max_samples)?;
    Ok(shape_factor * integral)
}

/// Heat flow from the resistance form `Q = ΔT / ((L/A)·∫k⁻¹ dT)`.
#[cfg(test)]
fn resistance_form_power(
    k: &Conductivity<'_>,
    shape_factor: f64,
    hot: f64,
    cold: f64,
    samples: usize,
) -> Result<f64, ConductionError> {
    use crate::support::property::calculator::linspace;

    use super::integral::trapezoid;

    k.check_span(cold, hot)?;
    let temperatures = linspace(cold, hot, samples);
    let inverse = temperatures
        .iter()
        .map(|&t| k.at(t).map(f64::recip))
        .collect::<Result<Vec<_>, _>>()?;
    let resistance = trapezoid(&temperatures, &inverse) / shape_factor;
    Ok((hot - cold) / resistance)
}

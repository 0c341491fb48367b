//! Steady temperature distribution along a prismatic conductor.
//!
//! With constant cross-section `A` and heat flow `Q`, Fourier's law
//! integrates from the hot end to
//!
//! ```text
//! x(T) = (A/Q)·∫[T, T_hot] k(T') dT'
//! ```
//!
//! so position is proportional to the conductivity integral measured down
//! from the hot temperature. The solver tabulates `x(T)` on a fine
//! temperature lattice and inverts it by linear interpolation at the
//! requested positions.

use uom::si::{
    area::square_meter,
    f64::{Length, Power, ThermodynamicTemperature},
    length::meter,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::StrictlyPositive, geometry::Geometry, property::calculator::linspace,
};

use super::{
    ConductionConfig, ConductionError,
    conductivity::Conductivity,
    integral::{check_samples, cumulative_trapezoid},
    power::{shape_factor, thermal_power},
};

/// The second boundary condition of a profile, besides the hot end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileBoundary {
    /// Known cold-end temperature; the heat flow follows from it.
    ColdTemperature(ThermodynamicTemperature),
    /// Known heat flow; the cold end follows from it.
    Power(Power),
}

impl ProfileBoundary {
    /// Builds a boundary from two optional inputs, exactly one of which must
    /// be given.
    ///
    /// # Errors
    ///
    /// Returns [`ConductionError::InvalidArguments`] if both or neither are
    /// present.
    pub fn from_options(
        cold: Option<ThermodynamicTemperature>,
        power: Option<Power>,
    ) -> Result<Self, ConductionError> {
        match (cold, power) {
            (Some(cold), None) => Ok(Self::ColdTemperature(cold)),
            (None, Some(power)) => Ok(Self::Power(power)),
            (Some(_), Some(_)) => Err(ConductionError::invalid_arguments(
                "give either a cold-end temperature or a heat flow, not both",
            )),
            (None, None) => Err(ConductionError::invalid_arguments(
                "a cold-end temperature or a heat flow is required",
            )),
        }
    }
}

/// One sample of a temperature profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance from the hot end.
    pub position: Length,
    pub temperature: ThermodynamicTemperature,
    /// `true` when the position lies past the tabulated lattice and the
    /// temperature is a linear extrapolation.
    ///
    /// Only power-driven profiles extrapolate, when the heat flow carries the
    /// conductor past the floor span or the end of the conductivity fit.
    /// Treat these temperatures as estimates.
    pub extrapolated: bool,
}

/// Temperatures at evenly spaced positions from the hot end to the cold end.
///
/// The first point is at zero with exactly the hot-end temperature, the last
/// is at exactly the conductor length, and temperatures never increase
/// along the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureProfile {
    points: Vec<ProfilePoint>,
    power: Power,
}

impl TemperatureProfile {
    #[must_use]
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Heat flow through the conductor.
    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Length> + '_ {
        self.points.iter().map(|p| p.position)
    }

    pub fn temperatures(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        self.points.iter().map(|p| p.temperature)
    }

    /// Number of points that were extrapolated.
    #[must_use]
    pub fn extrapolated_count(&self) -> usize {
        self.points.iter().filter(|p| p.extrapolated).count()
    }
}

/// Solves the profile at `points` positions.
pub(super) fn temperature_profile<G: Geometry + ?Sized>(
    k: &Conductivity<'_>,
    geometry: &G,
    hot: f64,
    boundary: ProfileBoundary,
    points: usize,
    config: &ConductionConfig,
) -> Result<TemperatureProfile, ConductionError> {
    check_samples("profile points", points, config.max_samples)?;
    if config.profile_oversampling == 0 {
        return Err(ConductionError::invalid_arguments(
            "profile oversampling must be at least 1",
        ));
    }
    k.range().check(hot)?;

    let area = geometry.cross_sectional_area().get::<square_meter>();
    let length = geometry.length().get::<meter>();

    let fixed_cold_end = matches!(boundary, ProfileBoundary::ColdTemperature(_));
    let (power, floor) = match boundary {
        ProfileBoundary::ColdTemperature(cold) => {
            let cold = cold.get::<kelvin>();
            let power = thermal_power(
                k,
                shape_factor(geometry),
                hot,
                cold,
                config.integration_samples,
                config.max_samples,
            )?;
            (power, cold)
        }
        ProfileBoundary::Power(power) => {
            let power = StrictlyPositive::new(power)
                .map_err(|err| {
                    ConductionError::invalid_arguments(format!("heat flow {power:?}: {err}"))
                })?
                .into_inner()
                .get::<watt>();
            if !power.is_finite() {
                return Err(ConductionError::invalid_arguments(
                    "heat flow must be finite",
                ));
            }
            let span = config.floor_span.get::<delta_kelvin>();
            let floor = (hot - span).max(k.range().min());
            if floor >= hot {
                let range = k.range();
                return Err(ConductionError::OutOfRange {
                    low: hot - span,
                    high: hot,
                    min: range.min(),
                    max: range.max(),
                });
            }
            (power, floor)
        }
    };

    let lattice_size = points
        .saturating_mul(config.profile_oversampling)
        .clamp(2, config.max_samples);
    let (temperatures, conductivities) = sample_lattice(k, hot, floor, lattice_size)?;

    // Temperatures decrease along the lattice, so the running integral is
    // negative and positions come out non-decreasing.
    let integrals = cumulative_trapezoid(&temperatures, &conductivities);
    let total = integrals.last().copied().unwrap_or(0.0);

    // With both end temperatures fixed, the lattice spans the whole conductor.
    // Its integral and the one behind `power` differ by discretization error,
    // so positions are taken as fractions of the lattice total instead.
    let spans_conductor =
        fixed_cold_end && temperatures.last() == Some(&floor) && total < 0.0;
    let scale = if spans_conductor {
        length / total
    } else {
        -area / power
    };
    let mut lattice_positions: Vec<f64> = integrals
        .into_iter()
        .map(|integral| scale * integral)
        .collect();
    if spans_conductor {
        let last = lattice_positions.len() - 1;
        lattice_positions[last] = length;
    }

    let profile = linspace(0.0, length, points)
        .into_iter()
        .enumerate()
        .map(|(i, x)| {
            let (t, extrapolated) = if i == 0 {
                (hot, false)
            } else {
                invert(&lattice_positions, &temperatures, x)
            };
            ProfilePoint {
                position: Length::new::<meter>(x),
                temperature: ThermodynamicTemperature::new::<kelvin>(t),
                extrapolated,
            }
        })
        .collect();

    Ok(TemperatureProfile {
        points: profile,
        power: Power::new::<watt>(power),
    })
}

/// Samples conductivity from `hot` down to `floor`, stopping at the first
/// temperature the fit cannot evaluate.
fn sample_lattice(
    k: &Conductivity<'_>,
    hot: f64,
    floor: f64,
    size: usize,
) -> Result<(Vec<f64>, Vec<f64>), ConductionError> {
    let mut temperatures = Vec::with_capacity(size);
    let mut conductivities = Vec::with_capacity(size);

    for t in linspace(hot, floor, size) {
        match k.at(t) {
            Ok(value) => {
                temperatures.push(t);
                conductivities.push(value);
            }
            Err(ConductionError::Property(_)) if temperatures.len() >= 2 => break,
            Err(err) => return Err(err),
        }
    }

    Ok((temperatures, conductivities))
}

/// Temperature at position `x` by linear interpolation over the lattice,
/// extrapolating the last segment past its end.
fn invert(positions: &[f64], temperatures: &[f64], x: f64) -> (f64, bool) {
    let last = positions.len() - 1;

    if x > positions[last] {
        let slope = segment_slope(positions, temperatures, last - 1);
        return (temperatures[last] + slope * (x - positions[last]), true);
    }
    if x == positions[last] {
        return (temperatures[last], false);
    }

    let j = positions
        .partition_point(|&p| p <= x)
        .saturating_sub(1)
        .min(last - 1);
    let slope = segment_slope(positions, temperatures, j);
    (temperatures[j] + slope * (x - positions[j]), false)
}

fn segment_slope(positions: &[f64], temperatures: &[f64], j: usize) -> f64 {
    let dx = positions[j + 1] - positions[j];
    if dx > 0.0 {
        (temperatures[j + 1] - temperatures[j]) / dx
    } else {
        0.0
    }
}

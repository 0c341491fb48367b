//! Steady-state conduction through cryogenic structural members.
//!
//! [`Conduction`] is the calculation API: conductivity integrals, heat flow,
//! conductance, temperature profiles, and the cold-end temperature for a
//! given load. [`SteadyConduction`] wraps one material and geometry as a
//! [`twine_core::Model`] from boundary temperatures to a
//! [`CalculationSummary`].

mod core;

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

use crate::support::{geometry::Geometry, property::PropertyLookup};

pub use self::core::{
    CalculationSummary, ColdEnd, ColdEndConfig, ColdEndError, Conduction, ConductionConfig,
    ConductionError, ProfileBoundary, ProfilePoint, TemperatureProfile,
};

/// End temperatures of a conductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryTemperatures {
    pub hot: ThermodynamicTemperature,
    pub cold: ThermodynamicTemperature,
}

/// A fixed material and geometry evaluated at varying end temperatures.
///
/// ```
/// use cryotherm_models::{
///     models::thermal::conduction::{BoundaryTemperatures, Conduction, SteadyConduction},
///     support::{geometry::Rod, property::MaterialCatalog},
/// };
/// use twine_core::Model;
/// use uom::si::{
///     f64::{Length, ThermodynamicTemperature},
///     length::millimeter,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let catalog = MaterialCatalog::builtin();
/// let rod = Rod::new(
///     Length::new::<millimeter>(6.0),
///     Length::new::<millimeter>(250.0),
/// )?;
/// let model = SteadyConduction::new(Conduction::new(&catalog), "stainless_steel_304", rod);
///
/// let summary = model.call(&BoundaryTemperatures {
///     hot: ThermodynamicTemperature::new::<kelvin>(300.0),
///     cold: ThermodynamicTemperature::new::<kelvin>(4.2),
/// })?;
/// assert_eq!(summary.material_name, "Stainless Steel 304");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SteadyConduction<'a, L: ?Sized, G> {
    conduction: Conduction<'a, L>,
    material: String,
    geometry: G,
}

impl<'a, L: PropertyLookup + ?Sized, G: Geometry> SteadyConduction<'a, L, G> {
    #[must_use]
    pub fn new(conduction: Conduction<'a, L>, material: impl Into<String>, geometry: G) -> Self {
        Self {
            conduction,
            material: material.into(),
            geometry,
        }
    }

    #[must_use]
    pub fn material(&self) -> &str {
        &self.material
    }

    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }
}

impl<L: PropertyLookup + ?Sized, G: Geometry> Model for SteadyConduction<'_, L, G> {
    type Input = BoundaryTemperatures;
    type Output = CalculationSummary;
    type Error = ConductionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.conduction
            .summary(&self.material, &self.geometry, input.hot, input.cold)
    }
}

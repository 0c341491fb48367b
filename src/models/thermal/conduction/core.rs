//! Steady one-dimensional conduction through prismatic conductors.
//!
//! All calculations share a resolved conductivity fit, sampled at the
//! configured precision and required to be positive. Heat flow uses the
//! direct form `Q = (A/L)·∫k dT`.

mod cold_end;
mod config;
mod conductivity;
mod error;
mod integral;
mod power;
mod profile;
mod summary;

#[cfg(test)]
mod test_support;

pub use cold_end::{ColdEnd, ColdEndConfig, ColdEndError};
pub use config::ConductionConfig;
pub use error::ConductionError;
pub use profile::{ProfileBoundary, ProfilePoint, TemperatureProfile};
pub use summary::CalculationSummary;

use uom::si::{
    f64::{Power, ThermalConductance, ThermalConductivity, ThermodynamicTemperature},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    geometry::Geometry,
    property::{PropertyKind, PropertyLookup},
    units::{ConductivityIntegral, TemperatureDifference, ThermalResistance, watts_per_meter},
};

use conductivity::Conductivity;
use integral::conductivity_integral;
use power::{shape_factor, thermal_power};

/// Steady conduction calculations against a property lookup.
///
/// The lookup is borrowed for the calculator's lifetime, so it cannot change
/// while a calculation is in flight.
///
/// ```
/// use cryotherm_models::{
///     models::thermal::conduction::Conduction,
///     support::{geometry::Rod, property::MaterialCatalog},
/// };
/// use uom::si::{
///     f64::{Length, ThermodynamicTemperature},
///     length::millimeter,
///     power::watt,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let catalog = MaterialCatalog::builtin();
/// let conduction = Conduction::new(&catalog);
/// let rod = Rod::new(
///     Length::new::<millimeter>(10.0),
///     Length::new::<millimeter>(100.0),
/// )?;
///
/// let q = conduction.thermal_power(
///     "stainless_steel_304",
///     &rod,
///     ThermodynamicTemperature::new::<kelvin>(300.0),
///     ThermodynamicTemperature::new::<kelvin>(77.0),
/// )?;
/// assert!((q.get::<watt>() - 2.12).abs() < 0.01);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Conduction<'a, L: ?Sized> {
    lookup: &'a L,
    property: String,
    config: ConductionConfig,
}

impl<L: ?Sized> Clone for Conduction<'_, L> {
    fn clone(&self) -> Self {
        Self {
            lookup: self.lookup,
            property: self.property.clone(),
            config: self.config,
        }
    }
}

impl<'a, L: PropertyLookup + ?Sized> Conduction<'a, L> {
    /// Uses the `thermal_conductivity` property and default settings.
    #[must_use]
    pub fn new(lookup: &'a L) -> Self {
        Self {
            lookup,
            property: PropertyKind::ThermalConductivity.name().to_owned(),
            config: ConductionConfig::default(),
        }
    }

    /// Uses the `thermal_conductivity_<variant>` property instead, such as
    /// `normal` or `wrap` for laminates.
    #[must_use]
    pub fn with_variant(mut self, variant: &str) -> Self {
        self.property = PropertyKind::ThermalConductivity.with_variant(Some(variant));
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ConductionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ConductionConfig {
        &self.config
    }

    /// Catalog property name used for conductivity.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    fn conductivity(&self, material: &str) -> Result<Conductivity<'a>, ConductionError> {
        Conductivity::resolve(self.lookup, material, &self.property, self.config.precision)
    }

    /// Integral of conductivity from `low` to `high`.
    ///
    /// # Errors
    ///
    /// Fails with [`ConductionError::InvalidArguments`] unless `low < high`
    /// and the sample count is admissible, with
    /// [`ConductionError::OutOfRange`] if the span leaves the conductivity
    /// fit, and with lookup or evaluation errors otherwise.
    pub fn conductivity_integral(
        &self,
        material: &str,
        low: ThermodynamicTemperature,
        high: ThermodynamicTemperature,
    ) -> Result<ConductivityIntegral, ConductionError> {
        let k = self.conductivity(material)?;
        let integral = conductivity_integral(
            &k,
            low.get::<kelvin>(),
            high.get::<kelvin>(),
            self.config.integration_samples,
            self.config.max_samples,
        )?;
        Ok(watts_per_meter(integral))
    }

    /// Heat flow from `hot` to `cold` through `geometry`.
    ///
    /// # Errors
    ///
    /// Fails with [`ConductionError::InvalidArguments`] unless `hot > cold`,
    /// and as [`conductivity_integral`](Self::conductivity_integral) does.
    pub fn thermal_power<G: Geometry + ?Sized>(
        &self,
        material: &str,
        geometry: &G,
        hot: ThermodynamicTemperature,
        cold: ThermodynamicTemperature,
    ) -> Result<Power, ConductionError> {
        let k = self.conductivity(material)?;
        let q = thermal_power(
            &k,
            shape_factor(geometry),
            hot.get::<kelvin>(),
            cold.get::<kelvin>(),
            self.config.integration_samples,
            self.config.max_samples,
        )?;
        Ok(Power::new::<watt>(q))
    }

    /// Heat flow per kelvin of end-to-end temperature difference.
    ///
    /// # Errors
    ///
    /// See [`thermal_power`](Self::thermal_power).
    pub fn thermal_conductance<G: Geometry + ?Sized>(
        &self,
        material: &str,
        geometry: &G,
        hot: ThermodynamicTemperature,
        cold: ThermodynamicTemperature,
    ) -> Result<ThermalConductance, ConductionError> {
        let q = self.thermal_power(material, geometry, hot, cold)?;
        Ok(conductance(q, hot, cold))
    }

    /// Reciprocal of [`thermal_conductance`](Self::thermal_conductance).
    ///
    /// # Errors
    ///
    /// See [`thermal_power`](Self::thermal_power).
    pub fn thermal_resistance<G: Geometry + ?Sized>(
        &self,
        material: &str,
        geometry: &G,
        hot: ThermodynamicTemperature,
        cold: ThermodynamicTemperature,
    ) -> Result<ThermalResistance, ConductionError> {
        Ok(1.0 / self.thermal_conductance(material, geometry, hot, cold)?)
    }

    /// Temperature profile at `points` evenly spaced positions.
    ///
    /// # Errors
    ///
    /// Fails with [`ConductionError::InvalidArguments`] for an inadmissible
    /// point count or heat flow, or a cold end not below the hot end, and
    /// with range or evaluation errors if the hot end leaves the
    /// conductivity fit.
    pub fn temperature_profile<G: Geometry + ?Sized>(
        &self,
        material: &str,
        geometry: &G,
        hot: ThermodynamicTemperature,
        boundary: ProfileBoundary,
        points: usize,
    ) -> Result<TemperatureProfile, ConductionError> {
        let k = self.conductivity(material)?;
        profile::temperature_profile(
            &k,
            geometry,
            hot.get::<kelvin>(),
            boundary,
            points,
            &self.config,
        )
    }

    /// Cold-end temperature at which the conductor carries `heat_load`.
    ///
    /// # Errors
    ///
    /// Returns a [`ColdEndError`] for invalid inputs, a load the conductor
    /// cannot carry, or a solver failure.
    pub fn cold_end<G: Geometry + ?Sized>(
        &self,
        material: &str,
        geometry: &G,
        hot: ThermodynamicTemperature,
        heat_load: Power,
        config: ColdEndConfig,
    ) -> Result<ColdEnd, ColdEndError> {
        let k = self.conductivity(material)?;
        cold_end::cold_end(&k, geometry, hot, heat_load, &self.config, config)
    }

    /// Collects the integral, heat flow, and end conductivities in one
    /// record.
    ///
    /// # Errors
    ///
    /// See [`thermal_power`](Self::thermal_power).
    pub fn summary<G: Geometry + ?Sized>(
        &self,
        material: &str,
        geometry: &G,
        hot: ThermodynamicTemperature,
        cold: ThermodynamicTemperature,
    ) -> Result<CalculationSummary, ConductionError> {
        let k = self.conductivity(material)?;
        let (hot_k, cold_k) = (hot.get::<kelvin>(), cold.get::<kelvin>());

        let factor = shape_factor(geometry);
        let q = thermal_power(
            &k,
            factor,
            hot_k,
            cold_k,
            self.config.integration_samples,
            self.config.max_samples,
        )?;
        let integral = q / factor;
        let k_hot = k.at(hot_k)?;
        let k_cold = k.at(cold_k)?;

        let power = Power::new::<watt>(q);
        let delta_t = hot.minus(cold);

        Ok(CalculationSummary {
            material_id: material.to_owned(),
            material_name: self
                .lookup
                .material_name(material)
                .unwrap_or(material)
                .to_owned(),
            geometry_kind: geometry.kind(),
            geometry_description: geometry.description(),
            length: geometry.length(),
            area: geometry.cross_sectional_area(),
            hot,
            cold,
            delta_t,
            conductivity_hot: ThermalConductivity::new::<watt_per_meter_kelvin>(k_hot),
            conductivity_cold: ThermalConductivity::new::<watt_per_meter_kelvin>(k_cold),
            conductivity_ratio: k_hot / k_cold,
            conductivity_integral: watts_per_meter(integral),
            average_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                integral / delta_t.get::<delta_kelvin>(),
            ),
            power,
            conductance: conductance(power, hot, cold),
        })
    }
}

fn conductance(
    power: Power,
    hot: ThermodynamicTemperature,
    cold: ThermodynamicTemperature,
) -> ThermalConductance {
    let delta_t = hot.minus(cold).get::<delta_kelvin>();
    ThermalConductance::new::<watt_per_kelvin>(power.get::<watt>() / delta_t)
}

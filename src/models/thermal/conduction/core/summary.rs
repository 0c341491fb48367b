use uom::si::f64::{
    Area, Length, Power, TemperatureInterval, ThermalConductance, ThermalConductivity,
    ThermodynamicTemperature,
};

use crate::support::{geometry::GeometryKind, units::ConductivityIntegral};

/// Everything a steady conduction calculation reports for one conductor.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationSummary {
    pub material_id: String,
    /// Catalog display name, or the id when the lookup has none.
    pub material_name: String,

    pub geometry_kind: GeometryKind,
    pub geometry_description: String,
    pub length: Length,
    pub area: Area,

    pub hot: ThermodynamicTemperature,
    pub cold: ThermodynamicTemperature,
    pub delta_t: TemperatureInterval,

    pub conductivity_hot: ThermalConductivity,
    pub conductivity_cold: ThermalConductivity,
    /// `conductivity_hot / conductivity_cold`.
    pub conductivity_ratio: f64,

    /// `∫k dT` from cold to hot.
    pub conductivity_integral: ConductivityIntegral,
    /// Integral divided by the temperature span.
    pub average_conductivity: ThermalConductivity,

    pub power: Power,
    /// `power / delta_t`.
    pub conductance: ThermalConductance,
}

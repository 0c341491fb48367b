//! Unit helpers layered on [`uom`].
//!
//! Public APIs in this crate take and return [`uom`] quantities. This module
//! adds what [`uom`] lacks for conduction work:
//!
//! - [`TemperatureDifference`] subtracts two absolute temperatures into a
//!   [`TemperatureInterval`](uom::si::f64::TemperatureInterval).
//! - [`ConductivityIntegral`] is the dimension of `∫k(T) dT` (W/m).
//! - [`ThermalResistance`] is the reciprocal of a thermal conductance (K/W).
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::kelvin};
//! use cryotherm_models::support::units::TemperatureDifference;
//!
//! let hot = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let cold = ThermodynamicTemperature::new::<kelvin>(77.0);
//! assert_eq!(hot.minus(cold).get::<temperature_interval::kelvin>(), 223.0);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{ConductivityIntegral, ThermalResistance, watts_per_meter};
pub use temperature_difference::TemperatureDifference;

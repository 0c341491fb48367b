//! Temperature-dependent material property evaluation.
//!
//! Cryogenic material data is published as curve fits: a family of closed
//! form equations plus a coefficient list and a validity window. This module
//! turns that data into numbers.
//!
//! - [`curve`]: the equation families, as pure functions of `(T, coefficients)`.
//! - [`PropertySpec`]: a validated fit (equation, coefficients, range, units).
//! - [`PropertyLookup`]: the contract an external catalog fulfils.
//! - [`PropertyCalculator`]: range checking, dispatch, and rounding on top of
//!   a lookup, plus temperature sweeps.
//! - [`MaterialCatalog`]: an in-memory lookup with built-in NIST fits.
//!
//! # Example
//!
//! ```
//! use cryotherm_models::support::property::{MaterialCatalog, PropertyCalculator};
//! use uom::si::{
//!     f64::ThermodynamicTemperature, thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let catalog = MaterialCatalog::builtin();
//! let calculator = PropertyCalculator::new(&catalog);
//!
//! let k = calculator.thermal_conductivity(
//!     "stainless_steel_304",
//!     ThermodynamicTemperature::new::<kelvin>(77.0),
//!     None,
//! )?;
//! assert!(k.get::<watt_per_meter_kelvin>() < 10.0);
//! # Ok::<(), cryotherm_models::support::property::PropertyError>(())
//! ```

pub mod curve;

pub(crate) mod calculator;
mod catalog;
mod error;
mod kind;
mod lookup;
mod spec;

pub use calculator::{
    DEFAULT_PRECISION, EvaluationRequest, MAX_PRECISION, MAX_SERIES_POINTS, PropertyCalculator,
    Series, round_to_precision,
};
pub use catalog::{Material, MaterialCatalog, MaterialSummary, PropertySummary};
pub use curve::{CurveModel, EquationType};
pub use error::PropertyError;
pub use kind::PropertyKind;
pub use lookup::PropertyLookup;
pub use spec::{PropertyRecord, PropertySpec, TemperatureRange};

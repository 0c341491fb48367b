//! # Cryotherm Models
//!
//! Cryogenic material properties and steady-state conduction models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Conduction calculations and their [`twine_core::Model`]
//!   adapters.
//! - [`support`]: Property curves and the built-in material catalog,
//!   conductor geometries, numeric constraints, and unit helpers.
//!
//! ## Example
//!
//! ```
//! use cryotherm_models::{
//!     models::thermal::conduction::{ColdEndConfig, Conduction},
//!     support::{geometry::Tube, property::MaterialCatalog},
//! };
//! use uom::si::{
//!     f64::{Length, Power, ThermodynamicTemperature},
//!     length::millimeter,
//!     power::watt,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let catalog = MaterialCatalog::builtin();
//! let conduction = Conduction::new(&catalog);
//! let mm = Length::new::<millimeter>;
//! let tube = Tube::new(mm(12.7), mm(0.5), mm(300.0))?;
//!
//! // Cold end that a 0.1 W load settles at with the warm end at 300 K.
//! let end = conduction.cold_end(
//!     "stainless_steel_304",
//!     &tube,
//!     ThermodynamicTemperature::new::<kelvin>(300.0),
//!     Power::new::<watt>(0.1),
//!     ColdEndConfig::default(),
//! )?;
//! assert!(end.temperature.get::<kelvin>() < 300.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod models;
pub mod support;

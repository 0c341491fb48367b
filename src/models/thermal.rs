//! Thermal models.
//!
//! Currently steady conduction through cryogenic supports, leads, and
//! similar members between two temperature stages.

pub mod conduction;

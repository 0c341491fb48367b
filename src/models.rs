//! Public Twine models.
//!
//! # Model structure
//!
//! Each model lives in its own module with an internal `core` submodule
//! holding the computation. The [`twine_core::Model`] implementations are
//! thin adapters over the core API, which is also re-exported for callers
//! who want individual calculations.

pub mod thermal;

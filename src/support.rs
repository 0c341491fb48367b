//! Supporting utilities used by models.
//!
//! These are public because they are useful on their own, but their APIs are
//! not yet stable.

pub mod constraint;
pub mod geometry;
pub mod property;
pub mod units;

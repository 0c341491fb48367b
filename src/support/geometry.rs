//! Conductor cross-sections.
//!
//! Solvers only need a prismatic conductor's cross-sectional area and
//! length, captured by the [`Geometry`] trait. The shapes here validate their
//! dimensions at construction and add a display label and description.

mod bar;
mod custom;
mod rod;
mod tube;

use std::fmt;

use thiserror::Error;
use uom::si::{
    area::square_millimeter,
    f64::{Area, Length},
    length::millimeter,
};

use crate::support::constraint::ConstraintError;

pub use bar::Bar;
pub use custom::CustomSection;
pub use rod::Rod;
pub use tube::Tube;

/// A prismatic conductor: constant cross-section along its length.
pub trait Geometry {
    /// Cross-sectional area normal to the heat flow, strictly positive.
    fn cross_sectional_area(&self) -> Area;

    /// Conductor length along the heat flow, strictly positive.
    fn length(&self) -> Length;

    fn kind(&self) -> GeometryKind {
        GeometryKind::Custom
    }

    /// Human-readable summary in millimeters.
    fn description(&self) -> String {
        format!(
            "{}: A={:.2}mm² × {:.1}mm",
            self.kind(),
            self.cross_sectional_area().get::<square_millimeter>(),
            self.length().get::<millimeter>()
        )
    }
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn cross_sectional_area(&self) -> Area {
        (**self).cross_sectional_area()
    }

    fn length(&self) -> Length {
        (**self).length()
    }

    fn kind(&self) -> GeometryKind {
        (**self).kind()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Display label of a geometry.
///
/// `Wire` is a [`Rod`] under 1 mm in diameter; the two behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Rod,
    Wire,
    Tube,
    Bar,
    Custom,
}

impl GeometryKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rod => "rod",
            Self::Wire => "wire",
            Self::Tube => "tube",
            Self::Bar => "bar",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised when constructing a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A dimension was zero, negative, or `NaN`.
    #[error("invalid dimension: {0}")]
    Constraint(#[from] ConstraintError),

    /// A dimension was infinite.
    #[error("{dimension} must be finite")]
    Infinite { dimension: &'static str },

    /// A tube wall at least as thick as the outer radius leaves no bore.
    #[error(
        "wall thickness {} mm must be less than the outer radius {} mm",
        .wall_thickness.get::<millimeter>(),
        .outer_diameter.get::<millimeter>() / 2.0
    )]
    WallTooThick {
        outer_diameter: Length,
        wall_thickness: Length,
    },
}

/// Rejects infinite dimensions; the sign checks are left to the constraint.
fn finite(dimension: &'static str, si_value: f64) -> Result<(), GeometryError> {
    if si_value.is_infinite() {
        Err(GeometryError::Infinite { dimension })
    } else {
        Ok(())
    }
}

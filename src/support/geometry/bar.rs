use uom::si::{
    f64::{Area, Length},
    length::millimeter,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{Geometry, GeometryError, GeometryKind, finite};

/// Rectangular bar or strap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    width: Constrained<Length, StrictlyPositive>,
    thickness: Constrained<Length, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
}

impl Bar {
    /// # Errors
    ///
    /// Returns [`GeometryError::Constraint`] if a dimension is not strictly
    /// positive, or [`GeometryError::Infinite`] if one is infinite.
    pub fn new(width: Length, thickness: Length, length: Length) -> Result<Self, GeometryError> {
        finite("width", width.value)?;
        finite("thickness", thickness.value)?;
        finite("length", length.value)?;
        Ok(Self {
            width: StrictlyPositive::new(width)?,
            thickness: StrictlyPositive::new(thickness)?,
            length: StrictlyPositive::new(length)?,
        })
    }
}

impl Geometry for Bar {
    fn cross_sectional_area(&self) -> Area {
        self.width.into_inner() * self.thickness.into_inner()
    }

    fn length(&self) -> Length {
        self.length.into_inner()
    }

    fn kind(&self) -> GeometryKind {
        GeometryKind::Bar
    }

    fn description(&self) -> String {
        format!(
            "bar: {:.1}mm × {:.1}mm × {:.1}mm",
            self.width.into_inner().get::<millimeter>(),
            self.thickness.into_inner().get::<millimeter>(),
            self.length().get::<millimeter>()
        )
    }
}

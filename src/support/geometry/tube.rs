use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length},
    length::millimeter,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{Geometry, GeometryError, GeometryKind, finite};

/// Hollow circular tube; heat flows through the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    outer_diameter: Constrained<Length, StrictlyPositive>,
    wall_thickness: Constrained<Length, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
}

impl Tube {
    /// # Errors
    ///
    /// Returns [`GeometryError::Constraint`] if a dimension is not strictly
    /// positive, [`GeometryError::Infinite`] if one is infinite, or
    /// [`GeometryError::WallTooThick`] if the wall is not
    /// thinner than the outer radius.
    pub fn new(
        outer_diameter: Length,
        wall_thickness: Length,
        length: Length,
    ) -> Result<Self, GeometryError> {
        finite("outer diameter", outer_diameter.value)?;
        finite("wall thickness", wall_thickness.value)?;
        finite("length", length.value)?;

        let outer_diameter = StrictlyPositive::new(outer_diameter)?;
        let wall_thickness = StrictlyPositive::new(wall_thickness)?;
        let length = StrictlyPositive::new(length)?;

        if *wall_thickness.as_ref() >= *outer_diameter.as_ref() / 2.0 {
            return Err(GeometryError::WallTooThick {
                outer_diameter: outer_diameter.into_inner(),
                wall_thickness: wall_thickness.into_inner(),
            });
        }

        Ok(Self {
            outer_diameter,
            wall_thickness,
            length,
        })
    }

    #[must_use]
    pub fn outer_diameter(&self) -> Length {
        self.outer_diameter.into_inner()
    }

    #[must_use]
    pub fn wall_thickness(&self) -> Length {
        self.wall_thickness.into_inner()
    }
}

impl Geometry for Tube {
    fn cross_sectional_area(&self) -> Area {
        let outer = self.outer_diameter() / 2.0;
        let inner = outer - self.wall_thickness();
        PI * (outer * outer - inner * inner)
    }

    fn length(&self) -> Length {
        self.length.into_inner()
    }

    fn kind(&self) -> GeometryKind {
        GeometryKind::Tube
    }

    fn description(&self) -> String {
        format!(
            "tube: Ø{:.1}mm × {:.1}mm wall × {:.1}mm",
            self.outer_diameter().get::<millimeter>(),
            self.wall_thickness().get::<millimeter>(),
            self.length().get::<millimeter>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_millimeter;

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    #[test]
    fn annulus_area() {
        let tube = Tube::new(mm(12.7), mm(0.5), mm(300.0)).unwrap();
        // π·(6.35² - 5.85²)
        assert_relative_eq!(
            tube.cross_sectional_area().get::<square_millimeter>(),
            PI * 6.1,
            max_relative = 1e-9
        );
        assert_eq!(tube.description(), "tube: Ø12.7mm × 0.5mm wall × 300.0mm");
    }

    #[test]
    fn wall_must_leave_a_bore() {
        assert!(matches!(
            Tube::new(mm(10.0), mm(5.0), mm(100.0)),
            Err(GeometryError::WallTooThick { .. })
        ));
        assert!(Tube::new(mm(10.0), mm(4.9), mm(100.0)).is_ok());
    }

    #[test]
    fn infinite_dimensions_are_rejected() {
        assert_eq!(
            Tube::new(mm(f64::INFINITY), mm(0.5), mm(100.0)),
            Err(GeometryError::Infinite {
                dimension: "outer diameter"
            })
        );
        assert_eq!(
            Tube::new(mm(10.0), mm(0.5), mm(f64::INFINITY)),
            Err(GeometryError::Infinite { dimension: "length" })
        );
    }
}

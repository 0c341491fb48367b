use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length},
    length::millimeter,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{Geometry, GeometryError, GeometryKind, finite};

/// Solid circular rod.
///
/// Rods thinner than [`Rod::WIRE_THRESHOLD_MM`] are labelled as wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rod {
    diameter: Constrained<Length, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
}

impl Rod {
    /// Diameter below which a rod is reported as [`GeometryKind::Wire`].
    pub const WIRE_THRESHOLD_MM: f64 = 1.0;

    /// # Errors
    ///
    /// Returns [`GeometryError::Constraint`] if either dimension is not
    /// strictly positive, or [`GeometryError::Infinite`] if one is infinite.
    pub fn new(diameter: Length, length: Length) -> Result<Self, GeometryError> {
        finite("diameter", diameter.value)?;
        finite("length", length.value)?;
        Ok(Self {
            diameter: StrictlyPositive::new(diameter)?,
            length: StrictlyPositive::new(length)?,
        })
    }

    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter.into_inner()
    }
}

impl Geometry for Rod {
    fn cross_sectional_area(&self) -> Area {
        let radius = self.diameter() / 2.0;
        PI * radius * radius
    }

    fn length(&self) -> Length {
        self.length.into_inner()
    }

    fn kind(&self) -> GeometryKind {
        if self.diameter().get::<millimeter>() < Self::WIRE_THRESHOLD_MM {
            GeometryKind::Wire
        } else {
            GeometryKind::Rod
        }
    }

    fn description(&self) -> String {
        format!(
            "{}: Ø{:.1}mm × {:.1}mm",
            self.kind(),
            self.diameter().get::<millimeter>(),
            self.length().get::<millimeter>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_millimeter;

    use crate::support::constraint::ConstraintError;

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    #[test]
    fn area_of_a_ten_millimeter_rod() {
        let rod = Rod::new(mm(10.0), mm(100.0)).unwrap();
        assert_relative_eq!(
            rod.cross_sectional_area().get::<square_millimeter>(),
            25.0 * PI,
            max_relative = 1e-12
        );
        assert_eq!(rod.kind(), GeometryKind::Rod);
        assert_eq!(rod.description(), "rod: Ø10.0mm × 100.0mm");
    }

    #[test]
    fn thin_rods_are_wires() {
        let wire = Rod::new(mm(0.5), mm(250.0)).unwrap();
        assert_eq!(wire.kind(), GeometryKind::Wire);
        assert_eq!(wire.description(), "wire: Ø0.5mm × 250.0mm");

        let edge = Rod::new(mm(1.0), mm(250.0)).unwrap();
        assert_eq!(edge.kind(), GeometryKind::Rod);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Rod::new(mm(0.0), mm(100.0)),
            Err(GeometryError::Constraint(ConstraintError::Zero))
        );
        assert_eq!(
            Rod::new(mm(10.0), mm(-1.0)),
            Err(GeometryError::Constraint(ConstraintError::Negative))
        );
    }

    #[test]
    fn rejects_infinite_dimensions() {
        assert_eq!(
            Rod::new(mm(10.0), mm(f64::INFINITY)),
            Err(GeometryError::Infinite { dimension: "length" })
        );
        assert_eq!(
            Rod::new(mm(f64::INFINITY), mm(100.0)),
            Err(GeometryError::Infinite { dimension: "diameter" })
        );
    }
}

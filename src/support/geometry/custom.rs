use uom::si::{
    area::square_millimeter,
    f64::{Area, Length},
    length::millimeter,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{Geometry, GeometryError, finite};

/// A section given directly by its area, for shapes not modelled here.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomSection {
    area: Constrained<Area, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
    label: String,
}

impl CustomSection {
    /// # Errors
    ///
    /// Returns [`GeometryError::Constraint`] if the area or length is not
    /// strictly positive, or [`GeometryError::Infinite`] if either is
    /// infinite.
    pub fn new(area: Area, length: Length) -> Result<Self, GeometryError> {
        finite("area", area.value)?;
        finite("length", length.value)?;
        Ok(Self {
            area: StrictlyPositive::new(area)?,
            length: StrictlyPositive::new(length)?,
            label: "custom".to_owned(),
        })
    }

    /// Replaces the label used in [`Geometry::description`].
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl Geometry for CustomSection {
    fn cross_sectional_area(&self) -> Area {
        self.area.into_inner()
    }

    fn length(&self) -> Length {
        self.length.into_inner()
    }

    fn description(&self) -> String {
        format!(
            "{}: A={:.2}mm² × {:.1}mm",
            self.label,
            self.cross_sectional_area().get::<square_millimeter>(),
            self.length().get::<millimeter>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::geometry::GeometryKind;

    #[test]
    fn labelled_description() {
        let section = CustomSection::new(
            Area::new::<square_millimeter>(12.5),
            Length::new::<millimeter>(80.0),
        )
        .unwrap();
        assert_eq!(section.kind(), GeometryKind::Custom);
        assert_eq!(section.description(), "custom: A=12.50mm² × 80.0mm");

        let strap = section.with_label("braided strap");
        assert_eq!(strap.description(), "braided strap: A=12.50mm² × 80.0mm");
    }

    #[test]
    fn infinite_area_or_length_is_rejected() {
        let area = Area::new::<square_millimeter>;
        let length = Length::new::<millimeter>;
        assert_eq!(
            CustomSection::new(area(f64::INFINITY), length(80.0)),
            Err(GeometryError::Infinite { dimension: "area" })
        );
        assert_eq!(
            CustomSection::new(area(12.5), length(f64::INFINITY)),
            Err(GeometryError::Infinite { dimension: "length" })
        );
    }
}

use super::{PropertyError, PropertySpec};

/// Read-only access to material property data.
///
/// Lookups are exact and case-sensitive. Variant selection (for example a
/// `_wrap` suffix) is done by the caller when building the property name.
///
/// Implementations must not change while a calculation borrows them; the
/// borrow checker enforces this for lookups held by reference.
pub trait PropertyLookup {
    /// Returns the [`PropertySpec`] for `property` of `material`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::MaterialNotFound`] or
    /// [`PropertyError::PropertyNotFound`].
    fn property(&self, material: &str, property: &str) -> Result<&PropertySpec, PropertyError>;

    /// Human-readable name of `material`, if the lookup knows one.
    fn material_name(&self, material: &str) -> Option<&str> {
        let _ = material;
        None
    }
}

impl<L: PropertyLookup + ?Sized> PropertyLookup for &L {
    fn property(&self, material: &str, property: &str) -> Result<&PropertySpec, PropertyError> {
        (**self).property(material, property)
    }

    fn material_name(&self, material: &str) -> Option<&str> {
        (**self).material_name(material)
    }
}

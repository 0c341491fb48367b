use std::fmt;

/// Physical property families carried by the catalog.
///
/// Catalog entries are keyed by plain names. Directional or regime-specific
/// fits are separate entries named `"<kind>_<variant>"`, for example
/// `thermal_conductivity_wrap` or `youngs_modulus_low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    ThermalConductivity,
    SpecificHeat,
    YoungsModulus,
    LinearExpansion,
    ExpansionCoefficient,
    ElectricalConductivity,
}

impl PropertyKind {
    pub const ALL: [Self; 6] = [
        Self::ThermalConductivity,
        Self::SpecificHeat,
        Self::YoungsModulus,
        Self::LinearExpansion,
        Self::ExpansionCoefficient,
        Self::ElectricalConductivity,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ThermalConductivity => "thermal_conductivity",
            Self::SpecificHeat => "specific_heat",
            Self::YoungsModulus => "youngs_modulus",
            Self::LinearExpansion => "linear_expansion",
            Self::ExpansionCoefficient => "expansion_coefficient",
            Self::ElectricalConductivity => "electrical_conductivity",
        }
    }

    /// Catalog property name for this kind, optionally with a variant suffix.
    ///
    /// ```
    /// use cryotherm_models::support::property::PropertyKind;
    ///
    /// let kind = PropertyKind::ThermalConductivity;
    /// assert_eq!(kind.with_variant(None), "thermal_conductivity");
    /// assert_eq!(kind.with_variant(Some("wrap")), "thermal_conductivity_wrap");
    /// ```
    #[must_use]
    pub fn with_variant(self, variant: Option<&str>) -> String {
        match variant {
            Some(suffix) if !suffix.is_empty() => format!("{}_{suffix}", self.name()),
            _ => self.name().to_owned(),
        }
    }

    /// Returns `true` if `property` is this kind or one of its variants.
    #[must_use]
    pub fn matches(self, property: &str) -> bool {
        let name = self.name();
        property == name
            || property
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('_'))
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names() {
        assert_eq!(
            PropertyKind::YoungsModulus.with_variant(Some("high")),
            "youngs_modulus_high"
        );
        assert_eq!(
            PropertyKind::SpecificHeat.with_variant(Some("")),
            "specific_heat"
        );
    }

    #[test]
    fn matching_requires_a_separator() {
        let kind = PropertyKind::LinearExpansion;
        assert!(kind.matches("linear_expansion"));
        assert!(kind.matches("linear_expansion_normal"));
        assert!(!kind.matches("linear_expansionist"));
        assert!(!PropertyKind::ThermalConductivity.matches("linear_expansion"));
    }

    #[test]
    fn names_are_distinct_and_unprefixed() {
        for (i, a) in PropertyKind::ALL.iter().enumerate() {
            for b in &PropertyKind::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert!(!a.matches(b.name()) && !b.matches(a.name()));
            }
        }
        assert_eq!(
            PropertyKind::ElectricalConductivity.to_string(),
            "electrical_conductivity"
        );
    }
}

//! NIST cryogenic material property fits.
//!
//! Coefficients come from the NIST Cryogenic Technologies Group material
//! property database. Each fit is valid only on its stated range.

use crate::support::property::{CurveModel, PropertySpec, TemperatureRange};

use super::{Material, MaterialCatalog};

const CONDUCTIVITY: &str = "W/(m·K)";
const SPECIFIC_HEAT: &str = "J/(kg·K)";
const MODULUS: &str = "GPa";
const LINEAR_EXPANSION: &str = "1e-5 m/m";
const EXPANSION_COEFFICIENT: &str = "1e-6 1/K";

const FULL_RANGE: TemperatureRange = TemperatureRange::new_unchecked(4.0, 300.0);

pub(super) fn catalog() -> MaterialCatalog {
    let mut catalog = MaterialCatalog::new();
    catalog.insert(aluminum_6061_t6());
    for copper in copper_ofhc() {
        catalog.insert(copper);
    }
    catalog.insert(stainless_steel_304());
    catalog.insert(fiberglass_epoxy_g10());
    catalog
}

fn poly(coefficients: &[f64], range: TemperatureRange, units: &str) -> PropertySpec {
    PropertySpec::new_unchecked(CurveModel::Polynomial(coefficients.to_vec()), range, units)
}

fn log_poly(coefficients: &[f64], units: &str) -> PropertySpec {
    PropertySpec::new_unchecked(
        CurveModel::LogPolynomial(coefficients.to_vec()),
        FULL_RANGE,
        units,
    )
}

fn aluminum_6061_t6() -> Material {
    Material::new("aluminum_6061_t6", "Aluminum 6061-T6")
        .with_property(
            "thermal_conductivity",
            log_poly(
                &[
                    0.07918, 1.0957, -0.07277, 0.08084, 0.02803, -0.09464, 0.04179, -0.00571,
                ],
                CONDUCTIVITY,
            ),
        )
        .with_property(
            "specific_heat",
            log_poly(
                &[
                    46.6467, -314.292, 866.662, -1298.3, 1162.27, -637.795, 210.351, -38.3094,
                    2.96344,
                ],
                SPECIFIC_HEAT,
            ),
        )
        .with_property(
            "youngs_modulus",
            poly(
                &[7.771221e1, 1.030646e-2, -2.9241e-4, 8.9936e-7, -1.0709e-9],
                TemperatureRange::new_unchecked(0.0, 299.0),
                MODULUS,
            ),
        )
        .with_property(
            "linear_expansion",
            poly(
                &[-4.1277e2, -3.0389e-1, 8.7696e-3, -9.9821e-6, 0.0],
                FULL_RANGE,
                LINEAR_EXPANSION,
            ),
        )
}

/// NIST rational fit coefficients `a..i` for each RRR grade.
///
/// The fit is `log₁₀ k = (a + c·T^½ + e·T + g·T^1.5 + i·T²) /
/// (1 + b·T^½ + d·T + f·T^1.5 + h·T²)`.
const COPPER_CONDUCTIVITY: [(u32, [f64; 9]); 5] = [
    (
        50,
        [
            1.8743, -0.41538, -0.6018, 0.13294, 0.26426, -0.0219, -0.051276, 0.0014871, 0.003723,
        ],
    ),
    (
        100,
        [
            2.2154, -0.47461, -0.88068, 0.13871, 0.29505, -0.02043, -0.04831, 0.001281, 0.003207,
        ],
    ),
    (
        150,
        [
            2.3797, -0.4918, -0.98615, 0.13942, 0.30475, -0.019713, -0.046897, 0.0011969,
            0.0029988,
        ],
    ),
    (
        300,
        [
            1.357, 0.3981, 2.669, -0.1346, -0.6683, 0.01342, 0.05773, 0.0002147, 0.0,
        ],
    ),
    (
        500,
        [
            2.8075, -0.54074, -1.2777, 0.15362, 0.36444, -0.02105, -0.051727, 0.0012226,
            0.0030964,
        ],
    ),
];

fn copper_ofhc() -> impl Iterator<Item = Material> {
    COPPER_CONDUCTIVITY.iter().map(|&(rrr, [a, b, c, d, e, f, g, h, i])| {
        let conductivity = PropertySpec::new_unchecked(
            CurveModel::Rational {
                numerator: vec![a, c, e, g, i],
                denominator: vec![1.0, b, d, f, h],
            },
            FULL_RANGE,
            CONDUCTIVITY,
        );

        Material::new(
            format!("copper_ofhc_rrr{rrr}"),
            format!("Copper OFHC (RRR={rrr})"),
        )
        .with_property("thermal_conductivity", conductivity)
        .with_property(
            "specific_heat",
            log_poly(
                &[
                    -1.91844, -0.15973, 8.61013, -18.996, 21.9661, -12.7328, 3.54322, -0.3797,
                ],
                SPECIFIC_HEAT,
            ),
        )
        .with_property(
            "expansion_coefficient",
            log_poly(
                &[
                    -17.9081289,
                    67.131914,
                    -118.809316,
                    109.9845997,
                    -53.8696089,
                    13.30247491,
                    -1.30843441,
                ],
                EXPANSION_COEFFICIENT,
            ),
        )
    })
}

fn stainless_steel_304() -> Material {
    Material::new("stainless_steel_304", "Stainless Steel 304")
        .with_property(
            "thermal_conductivity",
            log_poly(
                &[
                    -1.4087, 1.3982, 0.2543, -0.626, 0.2334, 0.4256, -0.4658, 0.165, -0.0199,
                ],
                CONDUCTIVITY,
            ),
        )
        .with_property(
            "specific_heat",
            log_poly(
                &[
                    22.0061, -127.5528, 303.647, -381.0098, 274.0328, -112.9212, 24.7593,
                    -2.239153,
                ],
                SPECIFIC_HEAT,
            ),
        )
        .with_property(
            "youngs_modulus_low",
            poly(
                &[2.098145e2, 1.217019e-1, -1.146999e-2, 3.605430e-4, -3.0179e-6],
                TemperatureRange::new_unchecked(5.0, 57.0),
                MODULUS,
            ),
        )
        .with_property(
            "youngs_modulus_high",
            poly(
                &[2.100593e2, 1.534883e-1, -1.617390e-3, 5.117060e-6, -6.1546e-9],
                TemperatureRange::new_unchecked(57.0, 293.0),
                MODULUS,
            ),
        )
        .with_property(
            "linear_expansion",
            poly(
                &[-2.9554e2, -3.9811e-1, 9.2683e-3, -2.0261e-5, 1.7127e-8],
                TemperatureRange::new_unchecked(23.0, 300.0),
                LINEAR_EXPANSION,
            ),
        )
}

fn fiberglass_epoxy_g10() -> Material {
    Material::new("fiberglass_epoxy_g10", "G-10 Fiberglass Epoxy")
        .with_property(
            "thermal_conductivity_normal",
            log_poly(
                &[
                    -4.1236, 13.788, -26.068, 26.272, -14.663, 4.4954, -0.6905, 0.0397,
                ],
                CONDUCTIVITY,
            ),
        )
        .with_property(
            "thermal_conductivity_wrap",
            log_poly(
                &[
                    -2.64827, 8.80228, -24.8998, 41.1625, -39.8754, 23.1778, -7.95635, 1.48806,
                    -0.11701,
                ],
                CONDUCTIVITY,
            ),
        )
        .with_property(
            "specific_heat",
            log_poly(
                &[
                    -2.4083, 7.6006, -8.2982, 7.3301, -4.2386, 1.4294, -0.24396, 0.015236,
                ],
                SPECIFIC_HEAT,
            ),
        )
        .with_property(
            "linear_expansion_normal",
            poly(
                &[-7.198e2, 4.455e-1, 7.505e-3, -2.219e-6],
                FULL_RANGE,
                LINEAR_EXPANSION,
            ),
        )
        .with_property(
            "linear_expansion_wrap",
            poly(
                &[-2.469e2, 2.064e-1, 3.072e-3, -3.226e-6],
                FULL_RANGE,
                LINEAR_EXPANSION,
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::property::{PropertyKind, PropertyLookup};

    fn value(catalog: &MaterialCatalog, material: &str, property: &str, t: f64) -> f64 {
        catalog.property(material, property).unwrap().evaluate(t).unwrap()
    }

    #[test]
    fn every_builtin_spec_passes_validation() {
        let catalog = catalog();
        for id in catalog.ids() {
            let material = catalog.material(id).unwrap();
            for name in material.property_names() {
                let spec = material.property(name).unwrap();
                let range = spec.range();
                assert!(
                    TemperatureRange::new(range.min(), range.max()).is_ok(),
                    "{id}/{name}"
                );
                assert!(
                    PropertySpec::new(spec.model().clone(), range, spec.units()).is_ok(),
                    "{id}/{name}"
                );
            }
        }
    }

    #[test]
    fn conductivity_reference_points() {
        let catalog = catalog();
        let cases = [
            ("aluminum_6061_t6", "thermal_conductivity", 77.0, 83.5),
            ("aluminum_6061_t6", "thermal_conductivity", 300.0, 155.3),
            ("stainless_steel_304", "thermal_conductivity", 77.0, 7.92),
            ("stainless_steel_304", "thermal_conductivity", 300.0, 15.31),
            ("copper_ofhc_rrr100", "thermal_conductivity", 77.0, 547.2),
            ("copper_ofhc_rrr100", "thermal_conductivity", 300.0, 396.3),
            ("copper_ofhc_rrr50", "thermal_conductivity", 77.0, 515.0),
            ("fiberglass_epoxy_g10", "thermal_conductivity_normal", 100.0, 0.31),
            ("fiberglass_epoxy_g10", "thermal_conductivity_wrap", 100.0, 0.45),
        ];
        for (material, property, t, expected) in cases {
            assert_relative_eq!(
                value(&catalog, material, property, t),
                expected,
                max_relative = 0.01
            );
        }
    }

    #[test]
    fn conductivity_is_positive_across_the_range() {
        let catalog = catalog();
        for id in catalog.materials_with_property(PropertyKind::ThermalConductivity) {
            let material = catalog.material(id).unwrap();
            for name in material
                .property_names()
                .filter(|name| PropertyKind::ThermalConductivity.matches(name))
            {
                let spec = material.property(name).unwrap();
                let range = spec.range();
                let mut t = range.min();
                while t <= range.max() {
                    let k = spec.evaluate(t).unwrap();
                    assert!(k.is_finite() && k > 0.0, "{id}/{name} at {t} K");
                    t += 1.0;
                }
            }
        }
    }

    #[test]
    fn higher_purity_copper_conducts_better_when_cold() {
        let catalog = catalog();
        let k50 = value(&catalog, "copper_ofhc_rrr50", "thermal_conductivity", 10.0);
        let k500 = value(&catalog, "copper_ofhc_rrr500", "thermal_conductivity", 10.0);
        assert!(k500 > 5.0 * k50);
    }
}

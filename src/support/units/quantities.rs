use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P3, Z0},
};

/// Temperature integral of thermal conductivity, `∫k(T) dT`, W/m in SI.
pub type ConductivityIntegral = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thermal resistance, K/W in SI.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`ConductivityIntegral`] from a value in W/m.
///
/// [`uom`] has no named unit for this dimension.
#[must_use]
pub fn watts_per_meter(value: f64) -> ConductivityIntegral {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Area, Length, Power, TemperatureInterval, ThermalConductance, ThermalConductivity},
        area::square_meter,
        length::meter,
        power::watt,
        temperature_interval::kelvin,
        thermal_conductance::watt_per_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn conductivity_times_interval_is_an_integral() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(2.0);
        let dt = TemperatureInterval::new::<kelvin>(10.0);
        let integral: ConductivityIntegral = k * dt;
        assert_relative_eq!(integral.value, 20.0);

        // Q = (A/L)·∫k dT
        let shape = Area::new::<square_meter>(1e-4) / Length::new::<meter>(0.1);
        let q: Power = integral * shape;
        assert_relative_eq!(q.get::<watt>(), 0.02);
    }

    #[test]
    fn integral_from_si_value() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(3.0);
        let dt = TemperatureInterval::new::<kelvin>(5.0);
        assert_eq!(watts_per_meter(15.0), k * dt);
    }

    #[test]
    fn resistance_is_reciprocal_conductance() {
        let g = ThermalConductance::new::<watt_per_kelvin>(4.0);
        let r: ThermalResistance = 1.0 / g;
        assert_relative_eq!(r.value, 0.25);
    }
}

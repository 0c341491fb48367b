use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures.
///
/// [`uom`] does not allow `ThermodynamicTemperature - ThermodynamicTemperature`
/// (see uom issues #380 and #403), so the difference is formed in kelvin.
pub trait TemperatureDifference {
    /// Returns `self - other` as a temperature interval.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn cryogenic_spans() {
        let room = ThermodynamicTemperature::new::<abs_kelvin>(300.0);
        let nitrogen = ThermodynamicTemperature::new::<abs_kelvin>(77.0);
        let helium = ThermodynamicTemperature::new::<abs_kelvin>(4.2);

        assert_relative_eq!(room.minus(nitrogen).get::<delta_kelvin>(), 223.0);
        assert_relative_eq!(helium.minus(nitrogen).get::<delta_kelvin>(), -72.8);
    }

    #[test]
    fn mixed_input_units() {
        let ice = ThermodynamicTemperature::new::<degree_celsius>(0.0);
        let nitrogen = ThermodynamicTemperature::new::<abs_kelvin>(77.15);
        assert_relative_eq!(
            ice.minus(nitrogen).get::<delta_kelvin>(),
            196.0,
            epsilon = 1e-9
        );
    }
}

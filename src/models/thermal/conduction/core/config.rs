use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::support::property::DEFAULT_PRECISION;

/// Numerical settings for conduction calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductionConfig {
    /// Conductivity samples for each trapezoidal integral.
    pub integration_samples: usize,

    /// Lattice points per requested profile point.
    pub profile_oversampling: usize,

    /// How far below the hot end a power-driven profile looks for its
    /// cold end, unless the conductivity fit stops first.
    pub floor_span: TemperatureInterval,

    /// Upper bound on any sample or lattice count.
    pub max_samples: usize,

    /// Decimal digits kept on each conductivity sample.
    pub precision: u32,
}

impl Default for ConductionConfig {
    fn default() -> Self {
        Self {
            integration_samples: 100,
            profile_oversampling: 20,
            floor_span: TemperatureInterval::new::<delta_kelvin>(200.0),
            max_samples: 100_000,
            precision: DEFAULT_PRECISION,
        }
    }
}

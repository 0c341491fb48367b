use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for finding the cold-end temperature.
#[derive(Debug, Clone, Copy)]
pub struct ColdEndConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the cold-end temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the heat flow residual (achieved - target).
    pub power_tol: Power,
}

impl Default for ColdEndConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            power_tol: Power::new::<watt>(1e-9),
        }
    }
}

impl ColdEndConfig {
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.power_tol.get::<watt>(),
        }
    }
}

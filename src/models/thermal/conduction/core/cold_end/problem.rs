//! Problem formulation for matching a heat load.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::watt,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::thermal::conduction::core::{
        ConductionError,
        conductivity::Conductivity,
        power::{shape_factor, thermal_power},
    },
    support::geometry::Geometry,
};

use super::ColdEnd;

/// Heat flow through a conductor as a function of its cold-end temperature.
///
/// A cold end at or above the hot end carries no heat.
pub(super) struct ColdEndModel<'a> {
    conductivity: &'a Conductivity<'a>,
    shape_factor: f64,
    hot: f64,
    samples: usize,
    max_samples: usize,
}

impl<'a> ColdEndModel<'a> {
    pub(super) fn new<G: Geometry + ?Sized>(
        conductivity: &'a Conductivity<'a>,
        geometry: &G,
        hot: f64,
        samples: usize,
        max_samples: usize,
    ) -> Self {
        Self {
            conductivity,
            shape_factor: shape_factor(geometry),
            hot,
            samples,
            max_samples,
        }
    }
}

impl Model for ColdEndModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = ColdEnd;
    type Error = ConductionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let cold = input.get::<kelvin>();
        let power = if cold >= self.hot {
            0.0
        } else {
            thermal_power(
                self.conductivity,
                self.shape_factor,
                self.hot,
                cold,
                self.samples,
                self.max_samples,
            )?
        };
        Ok(ColdEnd {
            temperature: *input,
            power: Power::new::<watt>(power),
        })
    }
}

/// Residual `achieved - target` heat flow.
pub(super) struct ColdEndProblem {
    target: Power,
}

impl ColdEndProblem {
    pub(super) fn new(target: Power) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for ColdEndProblem {
    type Input = ThermodynamicTemperature;
    type Output = ColdEnd;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.power.get::<watt>() - self.target.get::<watt>()])
    }
}

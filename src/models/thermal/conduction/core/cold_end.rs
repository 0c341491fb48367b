//! Inverse conduction solve: the cold-end temperature for a heat load.
//!
//! Heat flow falls monotonically as the cold end warms toward the hot end,
//! so bisection on the cold-end temperature between the conductivity fit's
//! minimum and the hot end finds the unique match.

mod config;
mod error;
mod problem;

pub use config::ColdEndConfig;
pub use error::ColdEndError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::watt,
    thermodynamic_temperature::kelvin,
};

use crate::support::{constraint::StrictlyPositive, geometry::Geometry};

use super::{ConductionConfig, ConductionError, conductivity::Conductivity};

use problem::{ColdEndModel, ColdEndProblem};

/// A cold-end temperature and the heat flow it produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColdEnd {
    pub temperature: ThermodynamicTemperature,
    pub power: Power,
}

/// Finds the cold-end temperature at which the conductor carries `heat_load`.
///
/// # Errors
///
/// Returns [`ColdEndError::Unreachable`] when the load exceeds what the
/// conductor carries with its cold end at the fit's minimum temperature,
/// and other [`ColdEndError`] variants on invalid inputs or solver failure.
pub(super) fn cold_end<G: Geometry + ?Sized>(
    k: &Conductivity<'_>,
    geometry: &G,
    hot: ThermodynamicTemperature,
    heat_load: Power,
    conduction: &ConductionConfig,
    config: ColdEndConfig,
) -> Result<ColdEnd, ColdEndError> {
    let heat_load = StrictlyPositive::new(heat_load)
        .map_err(|err| {
            ConductionError::invalid_arguments(format!("heat load {heat_load:?}: {err}"))
        })?
        .into_inner();

    let hot_k = hot.get::<kelvin>();
    k.range().check(hot_k).map_err(ConductionError::from)?;
    let floor = k.range().min();

    let model = ColdEndModel::new(
        k,
        geometry,
        hot_k,
        conduction.integration_samples,
        conduction.max_samples,
    );

    let coldest = model.call(&ThermodynamicTemperature::new::<kelvin>(floor))?;
    if coldest.power < heat_load {
        return Err(ColdEndError::Unreachable {
            requested: heat_load,
            max: coldest.power,
        });
    }

    let problem = ColdEndProblem::new(heat_load);

    let solution = bisection::solve(
        &model,
        &problem,
        [floor, hot_k],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed evaluation means the candidate left the fit; steer
            // back toward the warm side, where less heat flows.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(ColdEndError::MaxIters {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::millimeter};

    use crate::{
        models::thermal::conduction::core::{
            power::{shape_factor, thermal_power},
            test_support::{TestLookup, conductivity},
        },
        support::geometry::Rod,
    };

    fn rod() -> Rod {
        let mm = Length::new::<millimeter>;
        Rod::new(mm(10.0), mm(100.0)).unwrap()
    }

    fn temperature(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    #[test]
    fn roundtrip() {
        let lookup = TestLookup::new();
        let k = conductivity(&lookup, "linear");
        let conduction = ConductionConfig::default();

        let load = thermal_power(&k, shape_factor(&rod()), 300.0, 77.0, 100, 1000).unwrap();
        let result = cold_end(
            &k,
            &rod(),
            temperature(300.0),
            Power::new::<watt>(load),
            &conduction,
            ColdEndConfig::default(),
        )
        .expect("cold end solve should succeed");

        assert_relative_eq!(result.temperature.get::<kelvin>(), 77.0, epsilon = 1e-6);
        assert_relative_eq!(result.power.get::<watt>(), load, epsilon = 1e-8);
    }

    #[test]
    fn small_loads_keep_the_cold_end_warm() {
        let lookup = TestLookup::new();
        let k = conductivity(&lookup, "constant");
        // k = 10, A/L = π·25e-6/0.1: 1e-3 W drops about 0.127 K.
        let result = cold_end(
            &k,
            &rod(),
            temperature(300.0),
            Power::new::<watt>(1e-3),
            &ConductionConfig::default(),
            ColdEndConfig::default(),
        )
        .unwrap();

        let drop = 1e-3 / (10.0 * shape_factor(&rod()));
        assert_relative_eq!(
            result.temperature.get::<kelvin>(),
            300.0 - drop,
            epsilon = 1e-6
        );
    }

    #[test]
    fn excessive_load_is_unreachable() {
        let lookup = TestLookup::new();
        let k = conductivity(&lookup, "linear");
        let err = cold_end(
            &k,
            &rod(),
            temperature(300.0),
            Power::new::<watt>(1e3),
            &ConductionConfig::default(),
            ColdEndConfig::default(),
        )
        .unwrap_err();

        match err {
            ColdEndError::Unreachable { requested, max } => {
                assert_relative_eq!(requested.get::<watt>(), 1e3);
                assert!(max < requested);
                assert!(max.get::<watt>() > 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_positive_loads_and_out_of_range_hot_ends() {
        let lookup = TestLookup::new();
        let k = conductivity(&lookup, "linear");
        let solve = |hot: f64, load: f64| {
            cold_end(
                &k,
                &rod(),
                temperature(hot),
                Power::new::<watt>(load),
                &ConductionConfig::default(),
                ColdEndConfig::default(),
            )
        };

        assert!(matches!(
            solve(300.0, 0.0),
            Err(ColdEndError::Conduction(ConductionError::InvalidArguments { .. }))
        ));
        assert!(matches!(
            solve(400.0, 1.0),
            Err(ColdEndError::Conduction(ConductionError::Property(_)))
        ));
    }
}

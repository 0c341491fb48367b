use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Power;

use crate::models::thermal::conduction::core::ConductionError;

/// Errors that can occur while solving for the cold-end temperature.
#[derive(Debug, Error)]
pub enum ColdEndError {
    /// A conduction calculation failed.
    #[error("conduction calculation failed")]
    Conduction(#[from] ConductionError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best heat flow residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// Even the coldest admissible cold end cannot carry the heat load.
    #[error("heat load {requested:?} exceeds the maximum {max:?} this conductor can carry")]
    Unreachable {
        requested: Power,
        /// Heat flow with the cold end at the conductivity fit's minimum.
        max: Power,
    },
}

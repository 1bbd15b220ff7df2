use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::MolarEnergy;

use crate::support::thermo::PropertyError;

/// Errors that can occur while solving for a crossover temperature.
#[derive(Debug, Error)]
pub enum CrossoverError {
    /// A reaction property could not be evaluated.
    #[error("property evaluation failed")]
    Property(#[from] PropertyError),

    /// The Gibbs energy has the same sign at both ends of the bracket.
    #[error("bracket does not contain a crossover: low={low:?}, high={high:?}")]
    NotBracketed {
        /// Gibbs energy at the low end of the bracket.
        low: MolarEnergy,

        /// Gibbs energy at the high end of the bracket.
        high: MolarEnergy,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Smallest absolute Gibbs energy encountered during iteration.
        residual: MolarEnergy,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{MolarEnergy, TemperatureInterval, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Solver configuration for the crossover temperature search.
#[derive(Debug, Clone, Copy)]
pub struct CrossoverConfig {
    /// Temperatures bounding the search, low then high.
    pub bracket: [ThermodynamicTemperature; 2],

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the temperature search variable.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance for the Gibbs energy residual.
    pub gibbs_tol: MolarEnergy,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self {
            bracket: [
                ThermodynamicTemperature::new::<kelvin>(300.0),
                ThermodynamicTemperature::new::<kelvin>(1500.0),
            ],
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            gibbs_tol: MolarEnergy::new::<joule_per_mole>(1e-9),
        }
    }
}

impl CrossoverConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.gibbs_tol.get::<joule_per_mole>(),
        }
    }

    /// The bracket in kelvin.
    pub(super) fn bracket_kelvin(&self) -> [f64; 2] {
        self.bracket.map(|t| t.get::<kelvin>())
    }
}

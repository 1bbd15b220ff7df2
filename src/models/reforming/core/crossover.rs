//! Iterative solver for the crossover temperature of a reaction.
//!
//! The crossover temperature is where the Gibbs energy of reaction changes
//! sign, so the equilibrium constant passes through one. Below it an
//! endothermic reforming reaction is unfavored, above it favored (and the
//! reverse for the exothermic water-gas shift).

mod config;
mod error;
mod problem;

pub use config::CrossoverConfig;
pub use error::CrossoverError;

use tracing::trace;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{f64::MolarEnergy, molar_energy::joule_per_mole, thermodynamic_temperature::kelvin};

use crate::support::thermo::Reaction;

use super::{EquilibriumResults, traits::ReactionThermoModel};

use problem::{CrossoverModel, CrossoverProblem};

/// Solves for the temperature at which `reaction` has `ΔG = 0`.
///
/// Uses bisection over `config.bracket`. The returned results are evaluated
/// at the crossover, so `k` is one to within the configured tolerances.
///
/// # Errors
///
/// Returns [`CrossoverError`] if the bracket endpoints cannot be evaluated,
/// the Gibbs energy does not change sign across the bracket, or the solver
/// fails to converge.
pub fn crossover_temperature<Thermo: ReactionThermoModel>(
    thermo: &Thermo,
    reaction: Reaction,
    config: CrossoverConfig,
) -> Result<EquilibriumResults, CrossoverError> {
    let model = CrossoverModel::new(thermo, reaction);

    let [low, high] = config.bracket;
    let at_low = model.call(&low)?;
    let at_high = model.call(&high)?;

    for end in [at_low, at_high] {
        if end.delta_g == 0.0 {
            return Ok(end);
        }
    }
    if at_low.delta_g.signum() == at_high.delta_g.signum() {
        return Err(CrossoverError::NotBracketed {
            low: MolarEnergy::new::<joule_per_mole>(at_low.delta_g),
            high: MolarEnergy::new::<joule_per_mole>(at_high.delta_g),
        });
    }

    let solution = bisection::solve(
        &model,
        &CrossoverProblem,
        config.bracket_kelvin(),
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed evaluation has no residual; steer bisection past it.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(CrossoverError::MaxIters {
            residual: MolarEnergy::new::<joule_per_mole>(solution.residual),
            iters: solution.iters,
        });
    }

    let results = solution.snapshot.output;
    trace!(
        reaction = %reaction,
        model = Thermo::NAME,
        kelvin = results.temperature.get::<kelvin>(),
        iters = solution.iters,
        "crossover temperature solved"
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
    };

    use crate::support::thermo::model::{Nist, Reid};

    fn bracket(low: f64, high: f64) -> CrossoverConfig {
        CrossoverConfig {
            bracket: [
                ThermodynamicTemperature::new::<kelvin>(low),
                ThermodynamicTemperature::new::<kelvin>(high),
            ],
            ..CrossoverConfig::default()
        }
    }

    #[test]
    fn nist_crossovers() -> Result<(), CrossoverError> {
        let expected = [
            (Reaction::Drm, 914.856_794_402_167_5),
            (Reaction::Srm1, 891.998_256_531_959),
            (Reaction::Srm2, 862.182_536_390_507_3),
            (Reaction::Wgs, 1_096.094_375_451_192_3),
        ];
        for (reaction, kelvin_expected) in expected {
            let results = crossover_temperature(&Nist, reaction, CrossoverConfig::default())?;
            assert_relative_eq!(
                results.temperature.get::<kelvin>(),
                kelvin_expected,
                epsilon = 1e-6
            );
            assert_relative_eq!(results.k, 1.0, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn reid_water_gas_shift_crossover() -> Result<(), CrossoverError> {
        let results = crossover_temperature(&Reid, Reaction::Wgs, CrossoverConfig::default())?;
        assert_relative_eq!(
            results.temperature.get::<kelvin>(),
            1_063.692_822_700_979_4,
            epsilon = 1e-6
        );
        Ok(())
    }

    #[test]
    fn favorability_flips_across_crossover() -> Result<(), CrossoverError> {
        let results = crossover_temperature(&Nist, Reaction::Drm, CrossoverConfig::default())?;
        let t = results.temperature.get::<kelvin>();

        let below = CrossoverModel::new(&Nist, Reaction::Drm)
            .call(&ThermodynamicTemperature::new::<kelvin>(t - 10.0))?;
        let above = CrossoverModel::new(&Nist, Reaction::Drm)
            .call(&ThermodynamicTemperature::new::<kelvin>(t + 10.0))?;

        assert!(!below.is_favored());
        assert!(above.is_favored());
        Ok(())
    }

    #[test]
    fn bracket_without_sign_change() {
        let result = crossover_temperature(&Nist, Reaction::Drm, bracket(300.0, 800.0));
        assert!(matches!(result, Err(CrossoverError::NotBracketed { .. })));
    }

    #[test]
    fn non_physical_bracket() {
        let result = crossover_temperature(&Nist, Reaction::Wgs, bracket(0.0, 1500.0));
        assert!(matches!(result, Err(CrossoverError::Property(_))));
    }

    #[test]
    fn iteration_limit() {
        let config = CrossoverConfig {
            max_iters: 3,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-12),
            ..CrossoverConfig::default()
        };
        let result = crossover_temperature(&Nist, Reaction::Srm1, config);
        assert!(matches!(result, Err(CrossoverError::MaxIters { .. })));
    }
}

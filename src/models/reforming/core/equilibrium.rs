use uom::si::f64::ThermodynamicTemperature;

use crate::support::thermo::{PropertyError, Reaction};

use super::traits::ReactionThermoModel;

/// Reaction properties at one temperature.
///
/// Energies are in the thermo model's native units: NIST reports `delta_h` in
/// kJ/mol, Reid in J/mol. `delta_s` is in J/mol·K and `delta_g` in J/mol for
/// both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumResults {
    pub temperature: ThermodynamicTemperature,
    pub delta_h: f64,
    pub delta_s: f64,
    pub delta_g: f64,
    /// Dimensionless equilibrium constant.
    pub k: f64,
}

impl EquilibriumResults {
    /// Whether the reaction is thermodynamically favored (`K > 1`).
    #[must_use]
    pub fn is_favored(&self) -> bool {
        self.k > 1.0
    }
}

/// Evaluates every reaction property of `reaction` at `temperature`.
///
/// # Errors
///
/// Returns [`PropertyError`] if the temperature is not strictly positive or a
/// property is not finite.
pub fn equilibrium(
    thermo: &impl ReactionThermoModel,
    reaction: Reaction,
    temperature: ThermodynamicTemperature,
) -> Result<EquilibriumResults, PropertyError> {
    Ok(EquilibriumResults {
        temperature,
        delta_h: thermo.reaction_enthalpy(reaction, temperature)?,
        delta_s: thermo.reaction_entropy(reaction, temperature)?,
        delta_g: thermo.gibbs_energy(reaction, temperature)?,
        k: thermo.equilibrium_constant(reaction, temperature)?,
    })
}

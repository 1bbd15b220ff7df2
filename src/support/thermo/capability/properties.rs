use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::thermo::{GAS_CONSTANT, PropertyError, Reaction, Species};

use super::ThermoModel;

pub trait HasHeatCapacity: ThermoModel {
    /// Returns the molar heat capacity of `species` in J/mol·K.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    fn heat_capacity(
        &self,
        species: Species,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError>;
}

pub trait HasHeatOfFormation: ThermoModel {
    /// Returns the heat of formation of `species` at `temperature`,
    /// in the model's native enthalpy unit.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    fn heat_of_formation(
        &self,
        species: Species,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError>;
}

pub trait HasReactionEnthalpy: ThermoModel {
    /// Returns the heat of reaction at `temperature`, in the model's native
    /// enthalpy unit (kJ/mol for NIST, J/mol for Reid).
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    fn reaction_enthalpy(
        &self,
        reaction: Reaction,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError>;
}

pub trait HasReactionEntropy: ThermoModel {
    /// Returns the entropy of reaction at `temperature` in J/mol·K.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    fn reaction_entropy(
        &self,
        reaction: Reaction,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError>;
}

pub trait HasGibbsEnergy: HasReactionEnthalpy + HasReactionEntropy {
    /// Returns the Gibbs energy of reaction at `temperature` in J/mol.
    ///
    /// Each convention combines its enthalpy and entropy in its own units,
    /// so there is no default implementation.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    fn gibbs_energy(
        &self,
        reaction: Reaction,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError>;
}

pub trait HasEquilibriumConstant: HasGibbsEnergy {
    /// Returns the dimensionless equilibrium constant `K = exp(−ΔG/(R·T))`.
    ///
    /// Both conventions report `ΔG` in J/mol, so the formula is shared.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// or the result overflows.
    fn equilibrium_constant(
        &self,
        reaction: Reaction,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let gibbs = self.gibbs_energy(reaction, temperature)?;
        // Already validated by `gibbs_energy`.
        let t = temperature.get::<kelvin>();
        PropertyError::ensure_finite(
            equilibrium_constant(t, gibbs, GAS_CONSTANT),
            "equilibrium constant",
        )
    }
}

/// Computes `K = exp(−ΔG/(R·T))`.
///
/// `gibbs` and `gas_constant` must share an energy unit
/// (J/mol with R = 8.314 J/mol·K, or kJ/mol with R = 8.314e-3 kJ/mol·K).
#[must_use]
pub fn equilibrium_constant(temperature: f64, gibbs: f64, gas_constant: f64) -> f64 {
    (-gibbs / gas_constant / temperature).exp()
}

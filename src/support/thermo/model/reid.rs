//! Reid correlation model.
//!
//! Heat capacity is a plain cubic in the absolute temperature (no rescaling):
//!
//! ```text
//! cp(T) = a + b·T + c·T² + d·T³                  [J/mol·K]
//! ```
//!
//! Enthalpies and entropies are integrated from 298.15 K. Reference values
//! are tabulated in J/mol, so every energy this model reports is in J/mol and
//! the Gibbs energy needs no unit scaling.

pub mod table;

use uom::si::f64::ThermodynamicTemperature;

use crate::support::thermo::{
    PropertyError, REFERENCE_TEMPERATURE as T0, Reaction, Species,
    capability::{
        HasEquilibriumConstant, HasGibbsEnergy, HasHeatCapacity, HasHeatOfFormation,
        HasReactionEnthalpy, HasReactionEntropy, ThermoModel,
    },
    input,
};

pub use table::{ReidCoefficients, ReidDeltas};

/// Heat capacity `a + b·T + c·T² + d·T³` in J/mol·K.
#[must_use]
pub fn heat_capacity(temperature: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = temperature;
    a + b * t + c * t.powi(2) + d * t.powi(3)
}

/// Integrated enthalpy change from 298.15 K, added to `h298`.
fn enthalpy_from_reference(temperature: f64, h298: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = temperature;
    h298 + a * (t - T0)
        + b / 2.0 * (t.powi(2) - T0.powi(2))
        + c / 3.0 * (t.powi(3) - T0.powi(3))
        + d / 4.0 * (t.powi(4) - T0.powi(4))
}

/// Heat of reaction in J/mol.
///
/// `ΔHr298 + Δa·(T−T₀) + Δb/2·(T²−T₀²) + Δc/3·(T³−T₀³) + Δd/4·(T⁴−T₀⁴)`
#[must_use]
pub fn heat_of_reaction(temperature: f64, hr298: f64, deltas: &ReidDeltas) -> f64 {
    let d = deltas;
    enthalpy_from_reference(temperature, hr298, d.a, d.b, d.c, d.d)
}

/// Heat of formation of one species at `temperature`, in J/mol.
#[must_use]
pub fn heat_of_formation(temperature: f64, record: &ReidCoefficients) -> f64 {
    let r = record;
    enthalpy_from_reference(temperature, r.hf298, r.a, r.b, r.c, r.d)
}

/// Entropy of reaction in J/mol·K.
///
/// `ΔSr298 + Δa·ln(T/T₀) + Δb·(T−T₀) + Δc/2·(T²−T₀²) + Δd/3·(T³−T₀³)`
#[must_use]
pub fn entropy_of_reaction(temperature: f64, sr298: f64, deltas: &ReidDeltas) -> f64 {
    let t = temperature;
    let ReidDeltas { a, b, c, d, .. } = *deltas;
    sr298
        + a * (t / T0).ln()
        + b * (t - T0)
        + c / 2.0 * (t.powi(2) - T0.powi(2))
        + d / 3.0 * (t.powi(3) - T0.powi(3))
}

/// Gibbs energy of reaction `ΔHr − T·ΔSr` in J/mol.
#[must_use]
pub fn gibbs_energy(temperature: f64, heat_of_reaction: f64, entropy_of_reaction: f64) -> f64 {
    heat_of_reaction - temperature * entropy_of_reaction
}

/// Reid polynomial model over the built-in species and reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reid;

impl ThermoModel for Reid {
    const NAME: &'static str = "Reid";
}

impl HasHeatCapacity for Reid {
    fn heat_capacity(
        &self,
        species: Species,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        let r = table::coefficients(species);
        PropertyError::ensure_finite(heat_capacity(t, r.a, r.b, r.c, r.d), "heat capacity")
    }
}

impl HasHeatOfFormation for Reid {
    /// Heat of formation in J/mol.
    fn heat_of_formation(
        &self,
        species: Species,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        PropertyError::ensure_finite(
            heat_of_formation(t, table::coefficients(species)),
            "heat of formation",
        )
    }
}

impl HasReactionEnthalpy for Reid {
    /// Heat of reaction in J/mol.
    fn reaction_enthalpy(
        &self,
        reaction: Reaction,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        let deltas = table::deltas(reaction);
        PropertyError::ensure_finite(heat_of_reaction(t, deltas.hr298, deltas), "heat of reaction")
    }
}

impl HasReactionEntropy for Reid {
    fn reaction_entropy(
        &self,
        reaction: Reaction,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        let deltas = table::deltas(reaction);
        PropertyError::ensure_finite(
            entropy_of_reaction(t, deltas.sr298, deltas),
            "entropy of reaction",
        )
    }
}

impl HasGibbsEnergy for Reid {
    fn gibbs_energy(
        &self,
        reaction: Reaction,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        let deltas = table::deltas(reaction);
        let h = heat_of_reaction(t, deltas.hr298, deltas);
        let s = entropy_of_reaction(t, deltas.sr298, deltas);
        PropertyError::ensure_finite(gibbs_energy(t, h, s), "Gibbs energy of reaction")
    }
}

impl HasEquilibriumConstant for Reid {}

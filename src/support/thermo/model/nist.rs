//! NIST (Shomate) correlation model.
//!
//! The Shomate equation expresses heat capacity as a polynomial in the
//! rescaled temperature `t = T/1000`, plus a reciprocal term:
//!
//! ```text
//! cp(T) = a + b·t + c·t² + d·t³ + e/t            [J/mol·K]
//! ```
//!
//! Enthalpies are integrated from it and reported in kJ/mol; entropies are
//! in J/mol·K. The Gibbs energy therefore scales the enthalpy by 1000 to
//! reach J/mol before subtracting `T·ΔS`.
//!
//! The `f`, `g`, `h` coefficients split between the two integrals:
//! `f` and `h` enter the enthalpy only (with weights `+1` and `−1`),
//! `g` enters the entropy only.
//!
//! # Preconditions
//!
//! The raw equation functions in this module divide by `t` and `t²`, so they
//! require `T > 0` and return non-finite values otherwise. The [`Nist`] model
//! validates its temperature before evaluating them.

pub mod table;

use uom::si::f64::ThermodynamicTemperature;

use crate::support::thermo::{
    PropertyError, Reaction, Species,
    capability::{
        HasEquilibriumConstant, HasGibbsEnergy, HasHeatCapacity, HasHeatOfFormation,
        HasReactionEnthalpy, HasReactionEntropy, ThermoModel,
    },
    input,
};

pub use table::{NistCoefficients, NistDeltas};

/// Heat capacity `a + b·t + c·t² + d·t³ + e/t` in J/mol·K.
#[must_use]
pub fn heat_capacity(temperature: f64, a: f64, b: f64, c: f64, d: f64, e: f64) -> f64 {
    let t = temperature / 1000.0;
    a + b * t + c * t.powi(2) + d * t.powi(3) + e / t
}

/// Heat of reaction in kJ/mol.
///
/// `ΔHr298 + Δa·t + Δb/2·t² + Δc/3·t³ + Δd/4·t⁴ − Δe/t + Δf − Δh`
#[must_use]
pub fn heat_of_reaction(temperature: f64, hr298: f64, deltas: &NistDeltas) -> f64 {
    let d = deltas;
    shomate_enthalpy(temperature, hr298, d.a, d.b, d.c, d.d, d.e, d.f, d.h)
}

/// Heat of formation of one species at `temperature`, in kJ/mol.
///
/// Same functional form as [`heat_of_reaction`] with the species' own
/// coefficients and `HF298` in place of the reaction deltas.
#[must_use]
pub fn heat_of_formation(temperature: f64, record: &NistCoefficients) -> f64 {
    let r = record;
    shomate_enthalpy(temperature, r.hf298, r.a, r.b, r.c, r.d, r.e, r.f, r.h)
}

#[allow(clippy::too_many_arguments)]
fn shomate_enthalpy(
    temperature: f64,
    h298: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    h: f64,
) -> f64 {
    let t = temperature / 1000.0;
    h298 + a * t + b / 2.0 * t.powi(2) + c / 3.0 * t.powi(3) + d / 4.0 * t.powi(4) - e / t + f
        - h
}

/// Entropy of reaction in J/mol·K.
///
/// `ΔSr298 + Δa·ln t + Δb·t + Δc/2·t² + Δd/3·t³ − Δe/(2t²) + Δg`
#[must_use]
pub fn entropy_of_reaction(temperature: f64, sr298: f64, deltas: &NistDeltas) -> f64 {
    let t = temperature / 1000.0;
    let NistDeltas { a, b, c, d, e, g, .. } = *deltas;
    sr298 + a * t.ln() + b * t + c / 2.0 * t.powi(2) + d / 3.0 * t.powi(3)
        - e / (2.0 * t.powi(2))
        + g
}

/// Gibbs energy of reaction `ΔHr·1000 − T·ΔSr` in J/mol.
///
/// `heat_of_reaction` is in kJ/mol and `entropy_of_reaction` in J/mol·K.
#[must_use]
pub fn gibbs_energy(temperature: f64, heat_of_reaction: f64, entropy_of_reaction: f64) -> f64 {
    heat_of_reaction * 1000.0 - temperature * entropy_of_reaction
}

/// How several reactions' Gibbs energies are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combination {
    /// One Gibbs energy per reaction.
    #[default]
    Elementwise,
    /// A single Gibbs energy for the net reaction obtained by summing them.
    Aggregate,
}

/// Gibbs energies for several reactions evaluated at once, in J/mol.
///
/// The per-reaction formula is [`gibbs_energy`] in both combinations.
///
/// # Errors
///
/// Returns [`PropertyError::ShapeMismatch`] if the enthalpy and entropy
/// slices differ in length.
pub fn gibbs_energies(
    temperature: f64,
    heats_of_reaction: &[f64],
    entropies_of_reaction: &[f64],
    combination: Combination,
) -> Result<Vec<f64>, PropertyError> {
    if heats_of_reaction.len() != entropies_of_reaction.len() {
        return Err(PropertyError::shape_mismatch(
            "entropies per heat of reaction",
            heats_of_reaction.len(),
            entropies_of_reaction.len(),
        ));
    }

    let each = heats_of_reaction
        .iter()
        .zip(entropies_of_reaction)
        .map(|(&h, &s)| gibbs_energy(temperature, h, s));

    Ok(match combination {
        Combination::Elementwise => each.collect(),
        Combination::Aggregate => vec![each.sum()],
    })
}

/// NIST Shomate model over the built-in species and reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nist;

impl ThermoModel for Nist {
    const NAME: &'static str = "NIST";
}

impl HasHeatCapacity for Nist {
    fn heat_capacity(
        &self,
        species: Species,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        let r = table::coefficients(species);
        PropertyError::ensure_finite(heat_capacity(t, r.a, r.b, r.c, r.d, r.e), "heat capacity")
    }
}

impl HasHeatOfFormation for Nist {
    /// Heat of formation in kJ/mol.
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

impl HasReactionEnthalpy for Nist {
    /// Heat of reaction in kJ/mol.
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

impl HasReactionEntropy for Nist {
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

impl HasGibbsEnergy for Nist {
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

impl HasEquilibriumConstant for Nist {}

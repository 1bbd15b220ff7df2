//! Basis-vector form of the Shomate equation.
//!
//! Each species contributes a row of eight coefficients `[a..h]`. Evaluating
//! a property is a dot product of that row with a temperature-dependent basis
//! vector (`t = T/1000`):
//!
//! ```text
//! H(T) = [t, t²/2, t³/3, t⁴/4, −1/t, 1, 0, −1]          (kJ/mol)
//! S(T) = [ln t, t, t²/2, t³/3, −1/(2t²), 0, 1, 0]       (J/mol·K)
//! cp(T) = [1, t, t², t³, 1/t] · [a..e]                  (J/mol·K)
//! ```
//!
//! [`ShomateReaction`] assembles rows and stoichiometry supplied by the caller,
//! so it can describe reactions outside the built-in set.

use uom::si::f64::ThermodynamicTemperature;

use crate::support::thermo::{
    PropertyError, Reaction,
    capability::equilibrium_constant,
    input,
    model::nist::table,
};

/// Gas constant in kJ/mol·K, matching the kJ energies of [`ShomateReaction`].
const GAS_CONSTANT_KJ: f64 = 8.314e-3;

/// Enthalpy basis vector at `temperature` (K).
#[must_use]
pub fn enthalpy_basis(temperature: f64) -> [f64; 8] {
    let t = temperature / 1000.0;
    [
        t,
        t.powi(2) / 2.0,
        t.powi(3) / 3.0,
        t.powi(4) / 4.0,
        -1.0 / t,
        1.0,
        0.0,
        -1.0,
    ]
}

/// Entropy basis vector at `temperature` (K).
#[must_use]
pub fn entropy_basis(temperature: f64) -> [f64; 8] {
    let t = temperature / 1000.0;
    [
        t.ln(),
        t,
        t.powi(2) / 2.0,
        t.powi(3) / 3.0,
        -1.0 / (2.0 * t.powi(2)),
        0.0,
        1.0,
        0.0,
    ]
}

/// Heat capacity basis vector at `temperature` (K), paired with `[a..e]`.
#[must_use]
pub fn specific_heat_basis(temperature: f64) -> [f64; 5] {
    let t = temperature / 1000.0;
    [1.0, t, t.powi(2), t.powi(3), 1.0 / t]
}

pub(crate) fn dot(row: &[f64], basis: &[f64]) -> f64 {
    row.iter().zip(basis).map(|(c, b)| c * b).sum()
}

/// A reaction described by per-species Shomate rows and stoichiometry.
///
/// All four vectors are aligned: entry `i` of each describes the same species.
#[derive(Debug, Clone, PartialEq)]
pub struct ShomateReaction {
    coeffs: Vec<[f64; 8]>,
    hf298: Vec<f64>,
    sf298: Vec<f64>,
    stoichiometry: Vec<f64>,
}

impl ShomateReaction {
    /// Creates a reaction from aligned per-species data.
    ///
    /// `hf298` is in kJ/mol. `sf298` is carried as supplied and never enters
    /// a calculation, so its unit is the caller's choice (absolute entropies
    /// in J/mol·K, for example).
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::ShapeMismatch`] if any vector differs in
    /// length from `coeffs`.
    pub fn new(
        coeffs: Vec<[f64; 8]>,
        hf298: Vec<f64>,
        sf298: Vec<f64>,
        stoichiometry: Vec<f64>,
    ) -> Result<Self, PropertyError> {
        let rows = coeffs.len();
        for (context, len) in [
            ("heats of formation per coefficient row", hf298.len()),
            ("entropies of formation per coefficient row", sf298.len()),
            ("stoichiometric coefficients per coefficient row", stoichiometry.len()),
        ] {
            if len != rows {
                return Err(PropertyError::shape_mismatch(context, rows, len));
            }
        }

        Ok(Self {
            coeffs,
            hf298,
            sf298,
            stoichiometry,
        })
    }

    /// Builds the value object for a built-in reaction from the NIST table.
    #[must_use]
    pub fn from_reaction(reaction: Reaction) -> Self {
        let records = reaction.participants().map(table::coefficients);
        Self {
            coeffs: records.iter().map(|r| r.shomate_row()).collect(),
            hf298: records.iter().map(|r| r.hf298).collect(),
            sf298: records.iter().map(|r| r.sf298()).collect(),
            stoichiometry: reaction.stoichiometry().to_vec(),
        }
    }

    #[must_use]
    pub fn coeffs(&self) -> &[[f64; 8]] {
        &self.coeffs
    }

    #[must_use]
    pub fn stoichiometry(&self) -> &[f64] {
        &self.stoichiometry
    }

    /// Entropies carried with the rows, in whatever unit they were supplied.
    ///
    /// [`ShomateReaction::from_reaction`] stores `(HF298 − GF298) / 298.15` in
    /// kJ/mol·K. These do not enter [`ShomateReaction::entropy_kj_mol_k`]: the `g`
    /// coefficient of each row already gives an absolute entropy.
    #[must_use]
    pub fn sf298(&self) -> &[f64] {
        &self.sf298
    }

    /// Enthalpy of reaction `Σ νᵢ (rowᵢ·H(T) + HF298ᵢ)` in kJ/mol.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    pub fn enthalpy_kj_mol(&self, temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        PropertyError::ensure_finite(self.enthalpy_at(t), "enthalpy of reaction")
    }

    /// Entropy of reaction `Σ νᵢ rowᵢ·S(T) / 1000` in kJ/mol·K.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    pub fn entropy_kj_mol_k(&self, temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        PropertyError::ensure_finite(self.entropy_at(t), "entropy of reaction")
    }

    /// Gibbs energy of reaction `ΔH − T·ΔS` in kJ/mol.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    pub fn gibbs_kj_mol(&self, temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        PropertyError::ensure_finite(self.gibbs_at(t), "Gibbs energy of reaction")
    }

    /// Equilibrium constant `exp(−ΔG/(R·T))` with `R = 8.314e-3` kJ/mol·K.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result overflows.
    pub fn equilibrium_constant(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        PropertyError::ensure_finite(
            equilibrium_constant(t, self.gibbs_at(t), GAS_CONSTANT_KJ),
            "equilibrium constant",
        )
    }

    fn enthalpy_at(&self, t: f64) -> f64 {
        let basis = enthalpy_basis(t);
        self.terms()
            .map(|(row, hf298, nu)| nu * (dot(row, &basis) + hf298))
            .sum()
    }

    fn entropy_at(&self, t: f64) -> f64 {
        let basis = entropy_basis(t);
        self.terms()
            .map(|(row, _, nu)| nu * dot(row, &basis) / 1000.0)
            .sum()
    }

    fn gibbs_at(&self, t: f64) -> f64 {
        self.enthalpy_at(t) - t * self.entropy_at(t)
    }

    fn terms(&self) -> impl Iterator<Item = (&[f64; 8], f64, f64)> {
        self.coeffs
            .iter()
            .zip(&self.hf298)
            .zip(&self.stoichiometry)
            .map(|((row, &hf298), &nu)| (row, hf298, nu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::thermodynamic_temperature::kelvin;

    use crate::support::thermo::{
        Species,
        capability::{HasReactionEnthalpy, HasReactionEntropy},
        model::Nist,
    };

    fn kelvin_t(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    #[test]
    fn basis_vectors_at_one_thousand_kelvin() {
        assert_eq!(
            enthalpy_basis(1000.0),
            [1.0, 0.5, 1.0 / 3.0, 0.25, -1.0, 1.0, 0.0, -1.0]
        );
        assert_eq!(
            entropy_basis(1000.0),
            [0.0, 1.0, 0.5, 1.0 / 3.0, -0.5, 0.0, 1.0, 0.0]
        );
        assert_eq!(specific_heat_basis(1000.0), [1.0; 5]);
    }

    #[test]
    fn dry_reforming_from_table() -> Result<(), PropertyError> {
        let drm = ShomateReaction::from_reaction(Reaction::Drm);
        let t = kelvin_t(873.15);

        assert_relative_eq!(drm.enthalpy_kj_mol(t)?, 260.285_304_043_223_96, max_relative = 1e-9);
        assert_relative_eq!(drm.entropy_kj_mol_k(t)?, 0.284_246_606_749_032_6, max_relative = 1e-9);
        assert_relative_eq!(drm.gibbs_kj_mol(t)?, 12.095_379_360_306_14, max_relative = 1e-8);
        assert_relative_eq!(drm.equilibrium_constant(t)?, 0.188_968_488_203_885_23, max_relative = 1e-6);
        Ok(())
    }

    #[test]
    fn other_reactions_from_table() -> Result<(), PropertyError> {
        let t = kelvin_t(873.15);
        let k = |r| ShomateReaction::from_reaction(r).equilibrium_constant(t);
        assert_relative_eq!(k(Reaction::Srm1)?, 0.507_242_156_017_129_5, max_relative = 1e-6);
        assert_relative_eq!(k(Reaction::Srm2)?, 1.361_574_129_562_295_6, max_relative = 1e-6);
        assert_relative_eq!(k(Reaction::Wgs)?, 2.684_268_476_921_092, max_relative = 1e-6);
        Ok(())
    }

    #[test]
    fn enthalpy_agrees_with_nist_model() -> Result<(), PropertyError> {
        // Same rows and reference enthalpies, so only rounding separates them.
        for reaction in Reaction::ALL {
            let t = kelvin_t(1100.0);
            let value_object = ShomateReaction::from_reaction(reaction).enthalpy_kj_mol(t)?;
            let model = Nist.reaction_enthalpy(reaction, t)?;
            assert_relative_eq!(value_object, model, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn entropy_excludes_formation_entropy() -> Result<(), PropertyError> {
        let t = kelvin_t(873.15);
        let drm = ShomateReaction::from_reaction(Reaction::Drm);
        let nist_j = Nist.reaction_entropy(Reaction::Drm, t)?;
        let sr298: f64 = drm
            .sf298()
            .iter()
            .zip(drm.stoichiometry())
            .map(|(s, nu)| s * nu)
            .sum();

        // The NIST model adds ΔSr298; the value object does not.
        assert_relative_eq!(drm.entropy_kj_mol_k(t)? * 1000.0 + sr298, nist_j, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn caller_supplied_rows() -> Result<(), PropertyError> {
        // Water formation from the table rows, a reaction outside the built-in set.
        let rows = [Species::H2, Species::H2O].map(|s| *table::coefficients(s));
        let reaction = ShomateReaction::new(
            rows.iter().map(|r| r.shomate_row()).collect(),
            rows.iter().map(|r| r.hf298).collect(),
            rows.iter().map(|r| r.sf298()).collect(),
            vec![-1.0, 1.0],
        )?;
        assert_eq!(reaction.coeffs().len(), 2);
        assert!(reaction.enthalpy_kj_mol(kelvin_t(500.0))?.is_finite());
        Ok(())
    }

    #[test]
    fn misaligned_vectors_are_rejected() {
        let result = ShomateReaction::new(vec![[0.0; 8]; 2], vec![0.0; 2], vec![0.0; 2], vec![1.0]);
        assert_eq!(
            result,
            Err(PropertyError::ShapeMismatch {
                context: "stoichiometric coefficients per coefficient row".into(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn zero_kelvin_is_rejected() {
        let drm = ShomateReaction::from_reaction(Reaction::Drm);
        assert!(drm.gibbs_kj_mol(kelvin_t(0.0)).is_err());
    }

    #[test]
    fn non_finite_results_are_errors() {
        let drm = ShomateReaction::from_reaction(Reaction::Drm);
        assert!(matches!(
            drm.gibbs_kj_mol(kelvin_t(f64::INFINITY)),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            drm.enthalpy_kj_mol(kelvin_t(1e-310)),
            Err(PropertyError::Calculation { .. })
        ));
        assert!(matches!(
            drm.entropy_kj_mol_k(kelvin_t(1e-310)),
            Err(PropertyError::Calculation { .. })
        ));
    }

    #[test]
    fn formation_entropy_unit_is_carried_as_supplied() -> Result<(), PropertyError> {
        let rows = [Species::CO, Species::H2O, Species::CO2, Species::H2].map(|s| *table::coefficients(s));
        let build = |scale: f64| {
            ShomateReaction::new(
                rows.iter().map(|r| r.shomate_row()).collect(),
                rows.iter().map(|r| r.hf298).collect(),
                rows.iter().map(|r| r.sf298() * scale).collect(),
                vec![-1.0, -1.0, 1.0, 1.0],
            )
        };
        let kj = build(1.0)?;
        let j = build(1000.0)?;

        let t = kelvin_t(900.0);
        assert_relative_eq!(j.sf298()[0], kj.sf298()[0] * 1000.0);
        assert_eq!(j.entropy_kj_mol_k(t)?, kj.entropy_kj_mol_k(t)?);
        assert_eq!(j.equilibrium_constant(t)?, kj.equilibrium_constant(t)?);
        Ok(())
    }

    proptest! {
        #[test]
        fn gibbs_is_enthalpy_minus_t_entropy(t in 300.0_f64..1500.0) {
            for reaction in Reaction::ALL {
                let r = ShomateReaction::from_reaction(reaction);
                let h = r.enthalpy_kj_mol(kelvin_t(t)).unwrap();
                let s = r.entropy_kj_mol_k(kelvin_t(t)).unwrap();
                let g = r.gibbs_kj_mol(kelvin_t(t)).unwrap();
                prop_assert!((g - (h - t * s)).abs() <= 1e-9 * h.abs().max(1.0));
                prop_assert!(r.equilibrium_constant(kelvin_t(t)).unwrap() > 0.0);
            }
        }
    }
}

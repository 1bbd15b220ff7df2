//! Problem formulation for the crossover temperature search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::{
    models::reforming::core::{EquilibriumResults, equilibrium, traits::ReactionThermoModel},
    support::thermo::{PropertyError, Reaction},
};

/// Model adapter exposing temperature as the sole input variable.
pub(super) struct CrossoverModel<'a, Thermo> {
    thermo: &'a Thermo,
    reaction: Reaction,
}

impl<'a, Thermo> CrossoverModel<'a, Thermo> {
    pub(super) fn new(thermo: &'a Thermo, reaction: Reaction) -> Self {
        Self { thermo, reaction }
    }
}

impl<Thermo: ReactionThermoModel> Model for CrossoverModel<'_, Thermo> {
    type Input = ThermodynamicTemperature;
    type Output = EquilibriumResults;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        equilibrium(self.thermo, self.reaction, *input)
    }
}

/// Equation problem definition for the crossover search.
///
/// The residual is the Gibbs energy of reaction in J/mol, which is zero
/// exactly where `K = 1`.
pub(super) struct CrossoverProblem;

impl EquationProblem<1> for CrossoverProblem {
    type Input = ThermodynamicTemperature;
    type Output = EquilibriumResults;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.delta_g])
    }
}

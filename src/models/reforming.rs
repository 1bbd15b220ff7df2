//! Biogas reforming equilibrium models.
//!
//! This module provides [`twine_core::Model`] implementations for the
//! reforming reactions and feed mixtures. The computational core is in the
//! internal `core` module.
//!
//! - [`ReactionEquilibrium`]: reaction enthalpy, entropy, Gibbs energy, and
//!   equilibrium constant at a temperature, under either correlation model.
//! - [`MixtureState`]: ideal-gas mixture properties at a temperature and
//!   pressure.
//! - [`crossover_temperature`]: the temperature at which a reaction's
//!   equilibrium constant passes through one.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_reforming::{
//!     models::reforming::ReactionEquilibrium,
//!     support::thermo::{Reaction, model::Nist},
//! };
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
//!
//! let drm = ReactionEquilibrium::new(Nist, Reaction::Drm);
//! let results = drm
//!     .call(&ThermodynamicTemperature::new::<degree_celsius>(600.0))
//!     .unwrap();
//!
//! // Dry reforming is not yet favored at 600 °C.
//! assert!(results.k > 0.0 && results.k < 1.0);
//! ```

mod core;

pub use self::core::{
    CrossoverConfig, CrossoverError, EquilibriumResults, MixtureResults, ReactionThermoModel,
    crossover_temperature,
};

use twine_core::Model;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::thermo::{Mixture, PropertyError, Reaction};

/// Equilibrium properties of one reaction under one correlation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionEquilibrium<Thermo> {
    thermo: Thermo,
    reaction: Reaction,
}

impl<Thermo: ReactionThermoModel> ReactionEquilibrium<Thermo> {
    #[must_use]
    pub fn new(thermo: Thermo, reaction: Reaction) -> Self {
        Self { thermo, reaction }
    }

    #[must_use]
    pub fn reaction(&self) -> Reaction {
        self.reaction
    }

    /// Solves for this reaction's crossover temperature.
    ///
    /// # Errors
    ///
    /// See [`crossover_temperature`].
    pub fn crossover_temperature(
        &self,
        config: CrossoverConfig,
    ) -> Result<EquilibriumResults, CrossoverError> {
        crossover_temperature(&self.thermo, self.reaction, config)
    }
}

impl<Thermo: ReactionThermoModel> Model for ReactionEquilibrium<Thermo> {
    type Input = ThermodynamicTemperature;
    type Output = EquilibriumResults;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::equilibrium(&self.thermo, self.reaction, *input)
    }
}

/// Properties of a fixed-composition gas mixture.
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureState {
    mixture: Mixture,
}

impl MixtureState {
    #[must_use]
    pub fn new(mixture: Mixture) -> Self {
        Self { mixture }
    }

    #[must_use]
    pub fn mixture(&self) -> &Mixture {
        &self.mixture
    }
}

impl Model for MixtureState {
    type Input = (ThermodynamicTemperature, Pressure);
    type Output = MixtureResults;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let (temperature, pressure) = *input;
        self::core::mixture_state(&self.mixture, temperature, pressure)
    }
}

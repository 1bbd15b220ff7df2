//! Equilibrium and mixture calculations behind the reforming models.
//!
//! Everything here is a pure function of its inputs. The correlation models
//! are injected through [`ReactionThermoModel`], so the same code serves the
//! NIST and Reid conventions.

mod crossover;
mod equilibrium;
mod mixture_state;
mod traits;

pub use crossover::{CrossoverConfig, CrossoverError, crossover_temperature};
pub use equilibrium::{EquilibriumResults, equilibrium};
pub use mixture_state::{MixtureResults, mixture_state};
pub use traits::ReactionThermoModel;

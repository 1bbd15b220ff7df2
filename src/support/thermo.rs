//! Equilibrium thermodynamics of the biogas reforming system.
//!
//! Data flows one way: the per-species correlation tables in [`model`] are
//! combined by [`delta`] into per-reaction coefficients, which the model
//! equations evaluate at a caller-supplied temperature.
//! Nothing here holds mutable state; every evaluation is a pure function of
//! its inputs and the static tables.

mod error;
mod input;

pub mod capability;
pub mod delta;
pub mod mixture;
pub mod model;
pub mod reaction;
pub mod species;

pub use error::PropertyError;
pub use mixture::Mixture;
pub use reaction::Reaction;
pub use species::Species;

/// Reference temperature of the tabulated formation data, in K.
pub const REFERENCE_TEMPERATURE: f64 = 298.15;

/// Molar gas constant in J/mol·K, as used by the equilibrium constant.
pub const GAS_CONSTANT: f64 = 8.314;

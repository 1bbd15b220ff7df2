//! # Twine Reforming
//!
//! Equilibrium thermodynamics of biogas reforming for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Reaction enthalpy, entropy, Gibbs energy, and equilibrium constant are
//! evaluated for dry reforming, steam reforming, and the water-gas shift from
//! tabulated heat capacity correlations (NIST Shomate or Reid polynomials).
//! Ideal-gas mixture properties are evaluated from the same Shomate data.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for reaction
//!   equilibrium and feed mixtures.
//! - [`support`]: Species and reaction tables, correlation models, and the
//!   numeric constraints they rely on.
//!
//! ## Units
//!
//! Temperatures and pressures enter the public API as `uom` quantities.
//! Reaction energies are returned as `f64` in the correlation's native unit,
//! because the two conventions disagree: NIST enthalpies are in kJ/mol and
//! Reid enthalpies in J/mol. Gibbs energies are in J/mol under both.
//! Mixture outputs with a single meaning (density, concentration, molar mass,
//! specific heat capacity) are `uom` quantities.
//!
//! ## Stability
//!
//! Modules in [`support`] are public because they're useful on their own,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Model-specific code lives in each model's private `core` module.

pub mod models;
pub mod support;

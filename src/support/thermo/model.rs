//! Correlation models.
//!
//! Two independent conventions are provided and must not be mixed within
//! one calculation:
//!
//! - [`Nist`]: Shomate equation with `t = T/1000`; enthalpies in kJ/mol.
//! - [`Reid`]: cubic polynomial in `T`; enthalpies in J/mol.
//!
//! [`shomate`] holds the basis-vector formulation of the Shomate equation
//! used by the caller-assembled value objects.

pub mod nist;
pub mod reid;
pub mod shomate;

pub use nist::Nist;
pub use reid::Reid;
pub use shomate::ShomateReaction;

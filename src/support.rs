//! Supporting utilities shared by the models in this crate.
//!
//! - [`constraint`]: Numeric invariants checked at construction time.
//! - [`thermo`]: Reforming species, reactions, and correlation models.

pub mod constraint;
pub mod thermo;

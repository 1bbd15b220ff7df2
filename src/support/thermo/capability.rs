//! Capability traits used to query species and reaction properties.
//!
//! Each correlation convention is a model type implementing these traits.
//! Traits are split per property: a model implements what it can evaluate
//! and generic code bounds on what it needs.

mod properties;

pub use properties::*;

/// Base trait for correlation models.
pub trait ThermoModel {
    /// Short name of the correlation convention, used in diagnostics.
    const NAME: &'static str;
}

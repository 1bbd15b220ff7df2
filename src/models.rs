//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model domain lives in its own module with an internal `core`
//! submodule holding the computation. The `core` module is an implementation
//! detail; only its result and configuration types are re-exported.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the core. One core may back several adapters: the reforming core serves
//! both [`reforming::ReactionEquilibrium`] and the crossover solve.

pub mod reforming;

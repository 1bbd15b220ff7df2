//! Internal traits for reforming equilibrium calculations.

use crate::support::thermo::capability::{
    HasEquilibriumConstant, HasGibbsEnergy, HasReactionEnthalpy, HasReactionEntropy, ThermoModel,
};

/// Required thermo model bounds for reaction equilibrium.
///
/// Implemented for every model providing the reaction capabilities, so
/// [`Nist`](crate::support::thermo::model::Nist) and
/// [`Reid`](crate::support::thermo::model::Reid) qualify without further code.
pub trait ReactionThermoModel:
    ThermoModel + HasReactionEnthalpy + HasReactionEntropy + HasGibbsEnergy + HasEquilibriumConstant
{
}

impl<T> ReactionThermoModel for T where
    T: ThermoModel
        + HasReactionEnthalpy
        + HasReactionEntropy
        + HasGibbsEnergy
        + HasEquilibriumConstant
{
}

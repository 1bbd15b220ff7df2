use uom::si::f64::{
    MassDensity, MolarConcentration, MolarMass, Pressure, SpecificHeatCapacity,
    ThermodynamicTemperature,
};

use crate::support::thermo::{Mixture, PropertyError};

/// Mixture properties at one temperature and pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureResults {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,

    /// Molar heat capacity in J/mol·K.
    pub heat_capacity: f64,
    pub specific_heat_capacity: SpecificHeatCapacity,

    /// Per-species enthalpies in kJ/mol, in mixture row order.
    pub partial_enthalpies: Vec<f64>,
    pub partial_concentrations: Vec<MolarConcentration>,
    pub concentration: MolarConcentration,
    pub density: MassDensity,
    pub molar_mass: MolarMass,
}

/// Evaluates every mixture property at `temperature` and `pressure`.
///
/// # Errors
///
/// Returns [`PropertyError`] if the temperature or pressure is not strictly
/// positive and finite, the mixture has no mass, or a property is not finite.
pub fn mixture_state(
    mixture: &Mixture,
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
) -> Result<MixtureResults, PropertyError> {
    Ok(MixtureResults {
        temperature,
        pressure,
        heat_capacity: mixture.heat_capacity(temperature)?,
        specific_heat_capacity: mixture.specific_heat_capacity(temperature)?,
        partial_enthalpies: mixture.partial_enthalpies_kj_mol(temperature)?,
        partial_concentrations: mixture.partial_concentrations(temperature, pressure)?,
        concentration: mixture.total_concentration(temperature, pressure)?,
        density: mixture.density(temperature, pressure)?,
        molar_mass: mixture.molar_mass(),
    })
}

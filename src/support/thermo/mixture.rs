//! Ideal-gas mixture properties from per-species Shomate rows.

use uom::si::{
    f64::{
        MassDensity, MolarConcentration, MolarMass, Pressure, SpecificHeatCapacity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    molar_concentration::mole_per_cubic_meter,
    molar_mass::kilogram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::constraint::{StrictlyPositive, UnitInterval};

use super::{
    PropertyError, Species, input,
    model::{
        nist::table,
        shomate::{dot, enthalpy_basis, specific_heat_basis},
    },
};

/// Gas constant in bar·m³/mol·K.
const GAS_CONSTANT_BAR: f64 = 8.314e-5;

/// Tolerance used by [`Mixture::is_normalized`].
const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// A gas mixture: Shomate rows, formation enthalpies, mole fractions, and
/// molar masses, aligned per species.
///
/// Each mole fraction must lie in `[0, 1]`, but the fractions are not required
/// to sum to one. Mixture-level quantities that weight by composition
/// ([`Mixture::molar_mass`], [`Mixture::density`]) are only physically
/// meaningful when [`Mixture::is_normalized`] holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixture {
    coeffs: Vec<[f64; 8]>,
    hf298: Vec<f64>,
    y: Vec<f64>,
    molar_mass: Vec<f64>,
}

impl Mixture {
    /// Creates a mixture from aligned per-species data.
    ///
    /// `hf298` is in kJ/mol and `molar_mass` in kg/mol.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::ShapeMismatch`] if any vector differs in length
    /// from `coeffs`, or [`PropertyError::OutOfDomain`] if a mole fraction is
    /// outside `[0, 1]` or a molar mass is not strictly positive.
    pub fn new(
        coeffs: Vec<[f64; 8]>,
        hf298: Vec<f64>,
        y: Vec<f64>,
        molar_mass: Vec<f64>,
    ) -> Result<Self, PropertyError> {
        let rows = coeffs.len();
        for (context, len) in [
            ("heats of formation per coefficient row", hf298.len()),
            ("mole fractions per coefficient row", y.len()),
            ("molar masses per coefficient row", molar_mass.len()),
        ] {
            if len != rows {
                return Err(PropertyError::shape_mismatch(context, rows, len));
            }
        }

        let y = y
            .into_iter()
            .map(|fraction| UnitInterval::new(fraction).map(|y| y.into_inner()))
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|source| PropertyError::out_of_domain("mole fraction", source))?;
        let molar_mass = molar_mass
            .into_iter()
            .map(|mass| StrictlyPositive::new(mass).map(|m| m.into_inner()))
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|source| PropertyError::out_of_domain("molar mass", source))?;

        Ok(Self {
            coeffs,
            hf298,
            y,
            molar_mass,
        })
    }

    /// Builds a mixture of built-in species using the NIST table and each
    /// species' molar mass.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if a mole fraction is outside `[0, 1]`.
    pub fn from_species(composition: &[(Species, f64)]) -> Result<Self, PropertyError> {
        let records: Vec<_> = composition
            .iter()
            .map(|&(species, _)| table::coefficients(species))
            .collect();

        Self::new(
            records.iter().map(|r| r.shomate_row()).collect(),
            records.iter().map(|r| r.hf298).collect(),
            composition.iter().map(|&(_, y)| y).collect(),
            composition
                .iter()
                .map(|&(species, _)| species.molar_mass().get::<kilogram_per_mole>())
                .collect(),
        )
    }

    #[must_use]
    pub fn mole_fractions(&self) -> &[f64] {
        &self.y
    }

    /// Whether the mole fractions sum to one.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        (self.y.iter().sum::<f64>() - 1.0).abs() <= NORMALIZATION_TOLERANCE
    }

    /// Per-species enthalpy `rowᵢ·H(T) + HF298ᵢ` in kJ/mol.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    pub fn partial_enthalpies_kj_mol(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Vec<f64>, PropertyError> {
        let basis = enthalpy_basis(input::kelvin_of(temperature)?.into_inner());
        let h = self
            .coeffs
            .iter()
            .zip(&self.hf298)
            .map(|(row, hf298)| dot(row, &basis) + hf298)
            .collect();
        PropertyError::ensure_all_finite(h, "partial enthalpies")
    }

    /// Per-species molar heat capacity in J/mol·K.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    pub fn partial_heat_capacities(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Vec<f64>, PropertyError> {
        let basis = specific_heat_basis(input::kelvin_of(temperature)?.into_inner());
        let cp = self.coeffs.iter().map(|row| dot(&row[..5], &basis)).collect();
        PropertyError::ensure_all_finite(cp, "partial heat capacities")
    }

    /// Mixture molar heat capacity `Σ yᵢ cpᵢ` in J/mol·K.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive
    /// and finite, or the result is not finite.
    pub fn heat_capacity(&self, temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
        let cp = self.partial_heat_capacities(temperature)?;
        PropertyError::ensure_finite(dot(&self.y, &cp), "heat capacity")
    }

    /// Mixture heat capacity per unit mass.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is not strictly positive,
    /// or [`PropertyError::Calculation`] if every mole fraction is zero.
    pub fn specific_heat_capacity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        let cp = self.heat_capacity(temperature)? / self.molar_mass_kg();
        let cp = PropertyError::ensure_finite(cp, "specific heat capacity")?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }

    /// Per-species concentration `yᵢ·P/(R·T)`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature or pressure is not
    /// strictly positive and finite, or the result is not finite.
    pub fn partial_concentrations(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Vec<MolarConcentration>, PropertyError> {
        let total = self.molar_density(temperature, pressure)?;
        Ok(self
            .y
            .iter()
            .map(|y| MolarConcentration::new::<mole_per_cubic_meter>(y * total))
            .collect())
    }

    /// Sum of the partial concentrations.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature or pressure is not
    /// strictly positive and finite, or the result is not finite.
    pub fn total_concentration(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MolarConcentration, PropertyError> {
        let c: f64 = self
            .partial_concentrations(temperature, pressure)?
            .iter()
            .map(|c| c.get::<mole_per_cubic_meter>())
            .sum();
        Ok(MolarConcentration::new::<mole_per_cubic_meter>(c))
    }

    /// Mass density `c_total · Σ yᵢ Mrᵢ`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature or pressure is not
    /// strictly positive and finite, or the result is not finite.
    pub fn density(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MassDensity, PropertyError> {
        let c = self
            .total_concentration(temperature, pressure)?
            .get::<mole_per_cubic_meter>();
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(c * self.molar_mass_kg()))
    }

    /// Mole-fraction-weighted molar mass `Σ yᵢ Mrᵢ`.
    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(self.molar_mass_kg())
    }

    fn molar_mass_kg(&self) -> f64 {
        dot(&self.y, &self.molar_mass)
    }

    /// Ideal-gas molar density `P/(R·T)` in mol/m³.
    fn molar_density(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<f64, PropertyError> {
        let t = input::kelvin_of(temperature)?.into_inner();
        let p = input::bar_of(pressure)?.into_inner();
        PropertyError::ensure_finite(p / (GAS_CONSTANT_BAR * t), "molar density")
    }
}

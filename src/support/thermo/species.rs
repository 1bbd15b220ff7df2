//! Gas-phase species of the reforming system.

use std::{fmt, str::FromStr};

use uom::si::{f64::MolarMass, molar_mass::kilogram_per_mole};

use super::model::{
    nist::{NistCoefficients, table as nist_table},
    reid::{ReidCoefficients, table as reid_table},
};

/// A species participating in biogas reforming.
///
/// The declaration order is the stable table order used by the correlation
/// data: `CH4, CO2, H2O, H2, CO, Ar` map to indices `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    /// Methane (CH₄)
    CH4,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Water vapor (H₂O)
    H2O,
    /// Hydrogen (H₂)
    H2,
    /// Carbon monoxide (CO)
    CO,
    /// Argon (Ar), inert diluent
    Ar,
}

impl Species {
    /// All species in table order.
    pub const ALL: [Species; 6] = [
        Species::CH4,
        Species::CO2,
        Species::H2O,
        Species::H2,
        Species::CO,
        Species::Ar,
    ];

    /// Position of this species in the correlation tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical chemical formula.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Species::CH4 => "CH4",
            Species::CO2 => "CO2",
            Species::H2O => "H2O",
            Species::H2 => "H2",
            Species::CO => "CO",
            Species::Ar => "Ar",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Species::CH4 => "Methane",
            Species::CO2 => "Carbon Dioxide",
            Species::H2O => "Water",
            Species::H2 => "Hydrogen",
            Species::CO => "Carbon Monoxide",
            Species::Ar => "Argon",
        }
    }

    /// Molar mass of this species.
    #[must_use]
    pub fn molar_mass(self) -> MolarMass {
        let kg_per_mol = match self {
            Species::CH4 => 16.04e-3,
            Species::CO2 => 44.01e-3,
            Species::H2O => 18.01528e-3,
            Species::H2 => 2.01588e-3,
            Species::CO => 28.01e-3,
            Species::Ar => 39.948e-3,
        };
        MolarMass::new::<kilogram_per_mole>(kg_per_mol)
    }

    /// Shomate coefficients and formation data from the NIST table.
    #[must_use]
    pub fn nist(self) -> &'static NistCoefficients {
        nist_table::coefficients(self)
    }

    /// Cubic coefficients and formation data from the Reid table.
    #[must_use]
    pub fn reid(self) -> &'static ReidCoefficients {
        reid_table::coefficients(self)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CH4" | "METHANE" => Ok(Species::CH4),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "H2O" | "WATER" | "STEAM" => Ok(Species::H2O),
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Species::CO),
            "AR" | "ARGON" => Ok(Species::Ar),
            _ => Err("unknown species"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn indices_follow_table_order() {
        for (i, species) in Species::ALL.iter().enumerate() {
            assert_eq!(species.index(), i);
        }
        assert_eq!(Species::Ar.index(), 5);
    }

    #[test]
    fn canonical_key_roundtrip() {
        for species in Species::ALL {
            let parsed = species
                .key()
                .parse::<Species>()
                .expect("canonical key should parse");
            assert_eq!(parsed, species);
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("methane".parse::<Species>(), Ok(Species::CH4));
        assert_eq!(" Steam ".parse::<Species>(), Ok(Species::H2O));
        assert_eq!("Carbon Monoxide".parse::<Species>(), Ok(Species::CO));
        assert!("N2".parse::<Species>().is_err());
    }

    #[test]
    fn molar_masses() {
        assert_relative_eq!(
            Species::CO2.molar_mass().get::<kilogram_per_mole>(),
            0.04401
        );
        assert_relative_eq!(
            Species::Ar.molar_mass().get::<kilogram_per_mole>(),
            0.039948
        );
    }

    #[test]
    fn table_lookups_are_stable() {
        for species in Species::ALL {
            assert_eq!(species.nist(), species.nist());
            assert!(std::ptr::eq(species.reid(), species.reid()));
        }
        assert_eq!(Species::H2O.nist().hf298, -242.0);
        assert_eq!(Species::H2O.reid().hf298, -242.0e3);
    }
}

//! Built-in reforming reactions.

use std::{fmt, str::FromStr};

use super::{
    Species,
    model::{
        nist::{NistDeltas, table as nist_table},
        reid::{ReidDeltas, table as reid_table},
    },
};

/// A gas-phase reaction of the biogas reforming network.
///
/// Each reaction lists four participants and a signed stoichiometric
/// coefficient for each: negative for reactants, positive for products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
    /// Dry reforming of methane: `CO2 + CH4 ⇌ 2CO + 2H2`.
    Drm,
    /// Steam reforming to CO: `CH4 + H2O ⇌ CO + 3H2`.
    Srm1,
    /// Steam reforming to CO2: `CH4 + 2H2O ⇌ CO2 + 4H2`.
    Srm2,
    /// Water-gas shift: `CO + H2O ⇌ CO2 + H2`.
    Wgs,
}

impl Reaction {
    pub const ALL: [Reaction; 4] = [Reaction::Drm, Reaction::Srm1, Reaction::Srm2, Reaction::Wgs];

    /// Participating species, in the order matching [`Reaction::stoichiometry`].
    #[must_use]
    pub fn participants(self) -> [Species; 4] {
        use Species::{CH4, CO, CO2, H2, H2O};
        match self {
            Reaction::Drm => [CO2, CH4, CO, H2],
            Reaction::Srm1 => [CH4, H2O, CO, H2],
            Reaction::Srm2 => [CH4, H2O, CO2, H2],
            Reaction::Wgs => [CO, H2O, CO2, H2],
        }
    }

    /// Signed stoichiometric coefficients.
    #[must_use]
    pub fn stoichiometry(self) -> [f64; 4] {
        match self {
            Reaction::Drm => [-1.0, -1.0, 2.0, 2.0],
            Reaction::Srm1 => [-1.0, -1.0, 1.0, 3.0],
            Reaction::Srm2 => [-1.0, -2.0, 1.0, 4.0],
            Reaction::Wgs => [-1.0, -1.0, 1.0, 1.0],
        }
    }

    /// Participants paired with their stoichiometric coefficients.
    #[must_use]
    pub fn terms(self) -> [(Species, f64); 4] {
        let species = self.participants();
        let weights = self.stoichiometry();
        std::array::from_fn(|i| (species[i], weights[i]))
    }

    /// Delta-of-reaction coefficients under the NIST convention.
    ///
    /// Built once per process and shared.
    #[must_use]
    pub fn nist_deltas(self) -> &'static NistDeltas {
        nist_table::deltas(self)
    }

    /// Delta-of-reaction coefficients under the Reid convention.
    #[must_use]
    pub fn reid_deltas(self) -> &'static ReidDeltas {
        reid_table::deltas(self)
    }

    /// Short label, e.g. `"DRM"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Reaction::Drm => "DRM",
            Reaction::Srm1 => "SRM1",
            Reaction::Srm2 => "SRM2",
            Reaction::Wgs => "WGS",
        }
    }

    /// Balanced chemical equation.
    #[must_use]
    pub fn equation(self) -> &'static str {
        match self {
            Reaction::Drm => "CO2 + CH4 ⇌ 2CO + 2H2",
            Reaction::Srm1 => "CH4 + H2O ⇌ CO + 3H2",
            Reaction::Srm2 => "CH4 + 2H2O ⇌ CO2 + 4H2",
            Reaction::Wgs => "CO + H2O ⇌ CO2 + H2",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Reaction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DRM" | "DRY REFORMING" => Ok(Reaction::Drm),
            "SRM1" => Ok(Reaction::Srm1),
            "SRM2" => Ok(Reaction::Srm2),
            "WGS" | "WATER-GAS SHIFT" | "WATER GAS SHIFT" => Ok(Reaction::Wgs),
            _ => Err("unknown reaction"),
        }
    }
}

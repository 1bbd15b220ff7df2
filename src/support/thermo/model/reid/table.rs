//! Reid et al. (1987) heat capacity coefficients and formation data.

use std::sync::LazyLock;

use tracing::debug;

use crate::support::thermo::{
    REFERENCE_TEMPERATURE, Reaction, Species,
    delta::{Column, columns_over},
};

/// Cubic heat capacity coefficients and formation data for one species.
///
/// `hf298` and `gf298` are in J/mol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReidCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub hf298: f64,
    pub gf298: f64,
}

impl ReidCoefficients {
    /// Entropy of formation derived as `(HF298 − GF298) / 298.15`, in J/mol·K.
    #[must_use]
    pub fn sf298(&self) -> f64 {
        (self.hf298 - self.gf298) / REFERENCE_TEMPERATURE
    }
}

const TABLE: [ReidCoefficients; 6] = [
    // CH4
    ReidCoefficients {
        a: 19.3,
        b: 52.1e-3,
        c: 12.0e-6,
        d: -11.3e-9,
        hf298: -74.9e3,
        gf298: -50.9e3,
    },
    // CO2
    ReidCoefficients {
        a: 19.8,
        b: 73.4e-3,
        c: -56.0e-6,
        d: 17.2e-9,
        hf298: -393.8e3,
        gf298: -394.6e3,
    },
    // H2O
    ReidCoefficients {
        a: 32.2,
        b: 1.9e-3,
        c: 10.6e-6,
        d: -3.6e-9,
        hf298: -242.0e3,
        gf298: -228.8e3,
    },
    // H2
    ReidCoefficients {
        a: 27.1,
        b: 9.3e-3,
        c: -13.8e-6,
        d: 7.65e-9,
        hf298: 0.0,
        gf298: 0.0,
    },
    // CO
    ReidCoefficients {
        a: 30.9,
        b: -12.9e-3,
        c: 27.9e-6,
        d: -12.7e-9,
        hf298: -110.6e3,
        gf298: -137.4e3,
    },
    // Ar
    ReidCoefficients {
        a: 20.8,
        b: 0.0,
        c: 51.7e-6,
        d: 0.0,
        hf298: 0.0,
        gf298: 0.0,
    },
];

/// Returns the Reid record for `species`.
#[must_use]
pub fn coefficients(species: Species) -> &'static ReidCoefficients {
    &TABLE[species.index()]
}

/// Delta-of-reaction coefficients under the Reid convention.
///
/// `hr298` and `gr298` are in J/mol, `sr298` in J/mol·K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReidDeltas {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub hr298: f64,
    pub gr298: f64,
    pub sr298: f64,
}

const COLUMNS: [Column; 7] = [
    |s| coefficients(s).a,
    |s| coefficients(s).b,
    |s| coefficients(s).c,
    |s| coefficients(s).d,
    |s| coefficients(s).hf298,
    |s| coefficients(s).gf298,
    |s| coefficients(s).sf298(),
];

impl ReidDeltas {
    /// Combines the table columns over an arbitrary set of weighted species.
    #[must_use]
    pub fn from_terms(terms: &[(Species, f64)]) -> Self {
        let [a, b, c, d, hr298, gr298, sr298] = columns_over(&COLUMNS, terms);
        Self {
            a,
            b,
            c,
            d,
            hr298,
            gr298,
            sr298,
        }
    }

    /// All deltas in table order: `[Δa..Δd, ΔHr298, ΔGr298, ΔSr298]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.a, self.b, self.c, self.d, self.hr298, self.gr298, self.sr298,
        ]
    }
}

static DELTAS: LazyLock<[ReidDeltas; 4]> = LazyLock::new(|| {
    let deltas = Reaction::ALL.map(|reaction| ReidDeltas::from_terms(&reaction.terms()));
    debug!(reactions = deltas.len(), "built Reid delta-of-reaction table");
    deltas
});

/// Returns the precomputed Reid deltas for a built-in reaction.
#[must_use]
pub fn deltas(reaction: Reaction) -> &'static ReidDeltas {
    &DELTAS[reaction as usize]
}

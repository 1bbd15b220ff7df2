//! NIST Shomate coefficients and reference-state data.

use std::sync::LazyLock;

use tracing::debug;

use crate::support::thermo::{
    REFERENCE_TEMPERATURE, Reaction, Species,
    delta::{Column, columns_over},
};

/// Shomate coefficients and formation data for one species.
///
/// `hf298` and `gf298` are in kJ/mol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NistCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub hf298: f64,
    pub gf298: f64,
}

impl NistCoefficients {
    /// Entropy of formation derived as `(HF298 − GF298) / 298.15`, in kJ/mol·K.
    #[must_use]
    pub fn sf298(&self) -> f64 {
        (self.hf298 - self.gf298) / REFERENCE_TEMPERATURE
    }

    /// The eight Shomate coefficients `[a, b, c, d, e, f, g, h]`.
    #[must_use]
    pub fn shomate_row(&self) -> [f64; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }
}

const TABLE: [NistCoefficients; 6] = [
    // CH4
    NistCoefficients {
        a: -7.03029e-1,
        b: 1.084773e2,
        c: -4.252157e1,
        d: 5.862788,
        e: 6.78565e-1,
        f: -7.684376e1,
        g: 1.587163e2,
        h: -7.48731e1,
        hf298: -74.9,
        gf298: -50.9,
    },
    // CO2
    NistCoefficients {
        a: 2.499735e1,
        b: 5.518696e1,
        c: -3.369137e1,
        d: 7.948387,
        e: -1.36638e-1,
        f: -4.036075e2,
        g: 2.282431e2,
        h: -3.935224e2,
        hf298: -393.8,
        gf298: -394.6,
    },
    // H2O
    NistCoefficients {
        a: 3.0092e1,
        b: 6.832514,
        c: 6.793435,
        d: -2.53448,
        e: 8.2139e-2,
        f: -2.50881e2,
        g: 2.233967e2,
        h: -2.418264e2,
        hf298: -242.0,
        gf298: -228.8,
    },
    // H2
    NistCoefficients {
        a: 3.3066178e1,
        b: -1.1363417e1,
        c: 1.1432816e1,
        d: -2.772874,
        e: -1.58558e-1,
        f: -9.980797,
        g: 1.72707974e2,
        h: 0.0,
        hf298: 0.0,
        gf298: 0.0,
    },
    // CO
    NistCoefficients {
        a: 2.556759e1,
        b: 6.09613,
        c: 4.054656,
        d: -2.671301,
        e: 1.31021e-1,
        f: -1.180089e2,
        g: 2.273665e2,
        h: -1.105271e2,
        hf298: -110.6,
        gf298: -137.4,
    },
    // Ar
    NistCoefficients {
        a: 2.0786e1,
        b: 2.825911e-7,
        c: -1.464191e-7,
        d: 1.092131e-8,
        e: -3.661371e-8,
        f: -6.19735,
        g: 1.79999e2,
        h: 0.0,
        hf298: 0.0,
        gf298: 0.0,
    },
];

/// Returns the NIST record for `species`.
#[must_use]
pub fn coefficients(species: Species) -> &'static NistCoefficients {
    &TABLE[species.index()]
}

/// Delta-of-reaction coefficients under the NIST convention.
///
/// `hr298` and `gr298` are in kJ/mol, `sr298` in kJ/mol·K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NistDeltas {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub hr298: f64,
    pub gr298: f64,
    pub sr298: f64,
}

const COLUMNS: [Column; 11] = [
    |s| coefficients(s).a,
    |s| coefficients(s).b,
    |s| coefficients(s).c,
    |s| coefficients(s).d,
    |s| coefficients(s).e,
    |s| coefficients(s).f,
    |s| coefficients(s).g,
    |s| coefficients(s).h,
    |s| coefficients(s).hf298,
    |s| coefficients(s).gf298,
    |s| coefficients(s).sf298(),
];

impl NistDeltas {
    /// Combines the table columns over an arbitrary set of weighted species.
    #[must_use]
    pub fn from_terms(terms: &[(Species, f64)]) -> Self {
        let [a, b, c, d, e, f, g, h, hr298, gr298, sr298] = columns_over(&COLUMNS, terms);
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            hr298,
            gr298,
            sr298,
        }
    }

    /// All deltas in table order: `[Δa..Δh, ΔHr298, ΔGr298, ΔSr298]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 11] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h, self.hr298,
            self.gr298, self.sr298,
        ]
    }
}

static DELTAS: LazyLock<[NistDeltas; 4]> = LazyLock::new(|| {
    let deltas = Reaction::ALL.map(|reaction| NistDeltas::from_terms(&reaction.terms()));
    debug!(reactions = deltas.len(), "built NIST delta-of-reaction table");
    deltas
});

/// Returns the precomputed NIST deltas for a built-in reaction.
#[must_use]
pub fn deltas(reaction: Reaction) -> &'static NistDeltas {
    &DELTAS[reaction as usize]
}

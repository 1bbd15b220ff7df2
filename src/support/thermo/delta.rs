//! Delta-of-reaction combinator.
//!
//! A reaction-level coefficient is the stoichiometry-weighted sum of the
//! corresponding per-species coefficient:
//!
//! ```text
//! ΔX = Σ νᵢ · Xᵢ
//! ```
//!
//! The same combinator is applied to every coefficient column of a
//! correlation (Shomate `a..h`, Reid `a..d`) and to the reference-state
//! scalars, so the weighted sum is written once here.
//!
//! Mass balance is not checked. Species may repeat (their weights accumulate)
//! and species absent from the participant list contribute nothing.

use super::{PropertyError, Species};

/// A per-species quantity, such as one coefficient column of a correlation table.
pub type Column = fn(Species) -> f64;

/// Computes `Σ wᵢ · column(speciesᵢ)` over paired terms.
pub fn weighted_sum<F>(column: F, terms: impl IntoIterator<Item = (Species, f64)>) -> f64
where
    F: Fn(Species) -> f64,
{
    terms
        .into_iter()
        .map(|(species, weight)| weight * column(species))
        .sum()
}

/// Computes the delta of one quantity over a participant list and matching weights.
///
/// # Errors
///
/// Returns [`PropertyError::ShapeMismatch`] if `participants` and `weights`
/// differ in length.
///
/// # Example
///
/// ```
/// use twine_reforming::support::thermo::{Species, delta::delta};
///
/// // Identity column: every species contributes its weight.
/// let d = delta(|_| 1.0, &[Species::CO2, Species::CH4, Species::CO, Species::H2], &[-1.0, -1.0, 2.0, 2.0]).unwrap();
/// assert_eq!(d, 2.0);
/// ```
pub fn delta<F>(column: F, participants: &[Species], weights: &[f64]) -> Result<f64, PropertyError>
where
    F: Fn(Species) -> f64,
{
    check_aligned(participants, weights)?;
    Ok(weighted_sum(
        column,
        participants.iter().copied().zip(weights.iter().copied()),
    ))
}

/// Computes the deltas of several columns in one pass, in column order.
///
/// # Errors
///
/// Returns [`PropertyError::ShapeMismatch`] if `participants` and `weights`
/// differ in length.
pub fn deltas<const N: usize>(
    columns: &[Column; N],
    participants: &[Species],
    weights: &[f64],
) -> Result<[f64; N], PropertyError> {
    check_aligned(participants, weights)?;
    let terms: Vec<(Species, f64)> = participants
        .iter()
        .copied()
        .zip(weights.iter().copied())
        .collect();
    Ok(columns_over(columns, &terms))
}

/// Applies [`weighted_sum`] to each column over already-paired terms.
pub(crate) fn columns_over<const N: usize>(
    columns: &[Column; N],
    terms: &[(Species, f64)],
) -> [f64; N] {
    std::array::from_fn(|i| weighted_sum(columns[i], terms.iter().copied()))
}

fn check_aligned(participants: &[Species], weights: &[f64]) -> Result<(), PropertyError> {
    if participants.len() == weights.len() {
        Ok(())
    } else {
        Err(PropertyError::shape_mismatch(
            "stoichiometric weights per participant",
            participants.len(),
            weights.len(),
        ))
    }
}

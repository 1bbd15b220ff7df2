//! Validation of caller-supplied temperatures and pressures.

use tracing::trace;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::PropertyError;

/// Returns the absolute temperature in K, rejecting `T ≤ 0`, NaN, and infinity.
pub(crate) fn kelvin_of(
    temperature: ThermodynamicTemperature,
) -> Result<Constrained<f64, StrictlyPositive>, PropertyError> {
    let t = temperature.get::<kelvin>();
    positive_and_finite(t).map_err(|source| {
        trace!(kelvin = t, "rejected temperature");
        PropertyError::out_of_domain("temperature", source)
    })
}

/// Returns the absolute pressure in bar, rejecting `P ≤ 0`, NaN, and infinity.
pub(crate) fn bar_of(pressure: Pressure) -> Result<Constrained<f64, StrictlyPositive>, PropertyError> {
    let p = pressure.get::<bar>();
    positive_and_finite(p).map_err(|source| {
        trace!(bar = p, "rejected pressure");
        PropertyError::out_of_domain("pressure", source)
    })
}

fn positive_and_finite(value: f64) -> Result<Constrained<f64, StrictlyPositive>, ConstraintError> {
    let value = StrictlyPositive::new(value)?;
    if value.into_inner().is_finite() {
        Ok(value)
    } else {
        Err(ConstraintError::NotFinite)
    }
}

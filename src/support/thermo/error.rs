use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input is outside the correlation's valid domain.
    ///
    /// For example, a non-positive absolute temperature.
    #[error("out of domain: {context}: {source}")]
    OutOfDomain {
        context: String,
        source: ConstraintError,
    },

    /// Aligned vectors (coefficients, stoichiometry, composition) differ in length.
    #[error("shape mismatch: {context} (expected {expected}, found {found})")]
    ShapeMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    /// The calculation produced a non-finite value.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}

impl PropertyError {
    pub(crate) fn out_of_domain(context: impl Into<String>, source: ConstraintError) -> Self {
        Self::OutOfDomain {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn shape_mismatch(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Returns `value` if it is finite, otherwise a [`PropertyError::Calculation`].
    pub(crate) fn ensure_finite(value: f64, context: &str) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::Calculation {
                context: format!("{context} is not finite ({value})"),
            })
        }
    }

    /// Returns `values` if every entry is finite, otherwise a [`PropertyError::Calculation`].
    pub(crate) fn ensure_all_finite(values: Vec<f64>, context: &str) -> Result<Vec<f64>, Self> {
        match values.iter().find(|value| !value.is_finite()) {
            Some(&value) => Err(Self::Calculation {
                context: format!("{context} contains a non-finite value ({value})"),
            }),
            None => Ok(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = PropertyError::out_of_domain("temperature", ConstraintError::Zero);
        let msg = err.to_string();
        assert!(msg.contains("temperature"));
        assert!(msg.contains("zero"));

        let err = PropertyError::shape_mismatch("stoichiometry", 4, 3);
        assert_eq!(
            err.to_string(),
            "shape mismatch: stoichiometry (expected 4, found 3)"
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(PropertyError::ensure_finite(1.5, "cp"), Ok(1.5));
        assert!(matches!(
            PropertyError::ensure_finite(f64::INFINITY, "equilibrium constant"),
            Err(PropertyError::Calculation { .. })
        ));

        assert_eq!(
            PropertyError::ensure_all_finite(vec![1.0, -2.0], "partial enthalpies"),
            Ok(vec![1.0, -2.0])
        );
        assert!(matches!(
            PropertyError::ensure_all_finite(vec![1.0, f64::NAN], "partial enthalpies"),
            Err(PropertyError::Calculation { .. })
        ));
    }
}

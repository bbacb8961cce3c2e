//! Error types for seakeeping computations.

use thiserror::Error;

/// Errors raised by the response computations.
///
/// Invalid inputs are rejected when the value objects are constructed, so
/// the numerical routines only ever see physically meaningful parameters.
/// Conditions with no defined mathematical limit are reported as singular
/// conditions instead of leaking `NaN`/`inf` into the output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parameter is outside its physical domain.
    ///
    /// Examples: a non-positive period, a block coefficient outside `(0, 1]`,
    /// a negative damping ratio, or a non-finite value.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value that was supplied.
        value: f64,
        /// What the parameter must satisfy.
        reason: &'static str,
    },

    /// The frequency of encounter is zero.
    ///
    /// The wave pattern is stationary relative to the ship, which makes the
    /// steady-state amplitude and phase formulas divide by zero.
    #[error("frequency of encounter is zero (wave pattern stationary relative to the ship)")]
    ZeroEncounterFrequency,

    /// An undamped mode is driven exactly at its natural frequency.
    ///
    /// The steady-state amplitude is unbounded.
    #[error("undamped {mode} mode driven exactly at resonance")]
    UndampedResonance {
        /// Motion mode that resonates.
        mode: &'static str,
    },
}

impl Error {
    /// Returns `true` for conditions where the inputs were valid but the
    /// closed-form solution has no finite value.
    #[must_use]
    pub const fn is_singular(&self) -> bool {
        matches!(
            self,
            Self::ZeroEncounterFrequency | Self::UndampedResonance { .. }
        )
    }
}

/// A specialized [`Result`] type for seakeeping operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite and greater than zero",
        })
    }
}

/// Checks that `value` is finite and not negative.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite and not negative",
        })
    }
}

/// Checks that `value` is finite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

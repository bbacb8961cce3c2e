//! Single-degree-of-freedom damped harmonic oscillator.
//!
//! Each ship motion mode (heave, roll, pitch) is modelled as a linear
//! mass-spring-damper system described by its undamped natural frequency
//! `ω_n` and relative damping ratio `ζ`:
//!
//! ```text
//! ẍ + 2ζω_n ẋ + ω_n² x = f(t)
//! ```
//!
//! Two impedance forms are used. [`ModalParameters::impedance`] is the
//! magnitude of the transfer-function denominator at a driving frequency
//! `ω`; [`SteadyState`] is the normalised form used for wave-driven motion,
//! where the response is divided by the encounter frequency.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::error::{Result, ensure_non_negative, ensure_positive};

/// Natural frequency and damping ratio of one motion mode.
///
/// # Example
///
/// ```rust
/// use seakeeping::ModalParameters;
///
/// let heave = ModalParameters::from_period(8.0, 0.1)?;
/// assert!((heave.natural_period() - 8.0).abs() < 1e-12);
///
/// // Static limit: r = 0 gives 1/ω_n².
/// let unit = ModalParameters::new(1.0, 0.1)?;
/// assert!((unit.normalized_amplitude(0.0) - 1.0).abs() < 1e-12);
/// # Ok::<(), seakeeping::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModalParameters {
    natural_frequency: f64,
    damping_ratio: f64,
}

impl ModalParameters {
    /// Creates modal parameters from a natural frequency (rad/s) and a
    /// relative damping ratio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// when the frequency is not strictly positive or the damping ratio is
    /// negative.
    pub fn new(natural_frequency: f64, damping_ratio: f64) -> Result<Self> {
        Ok(Self {
            natural_frequency: ensure_positive("natural frequency", natural_frequency)?,
            damping_ratio: ensure_non_negative("damping ratio", damping_ratio)?,
        })
    }

    /// Creates modal parameters from a natural period (s), using
    /// `ω_n = 2π / T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// when the period is not strictly positive or the damping ratio is
    /// negative.
    pub fn from_period(natural_period: f64, damping_ratio: f64) -> Result<Self> {
        let period = ensure_positive("natural period", natural_period)?;
        Self::new(TAU / period, damping_ratio)
    }

    /// Undamped natural frequency `ω_n` in rad/s.
    #[inline]
    pub fn natural_frequency(&self) -> f64 {
        self.natural_frequency
    }

    /// Relative damping ratio `ζ`.
    #[inline]
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Natural period `2π / ω_n` in seconds.
    #[inline]
    pub fn natural_period(&self) -> f64 {
        TAU / self.natural_frequency
    }

    /// Returns a copy with the damping ratio scaled by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// if the scaled ratio is negative or not finite.
    pub fn with_scaled_damping(&self, factor: f64) -> Result<Self> {
        Self::new(self.natural_frequency, self.damping_ratio * factor)
    }

    /// Impedance magnitude at driving frequency `omega`:
    ///
    /// ```text
    /// Z(ω) = sqrt( ω²·(2ζω_n)² + (ω_n² − ω²)² )
    /// ```
    pub fn impedance(&self, omega: f64) -> f64 {
        let wn = self.natural_frequency;
        let damping = 2.0 * self.damping_ratio * wn;
        let stiffness = wn * wn - omega * omega;
        (omega * omega * damping * damping + stiffness * stiffness).sqrt()
    }

    /// Normalised response amplitude `1 / Z(ω_n·r)` at frequency ratio `r`.
    ///
    /// An undamped mode at `r = 1` has zero impedance; the amplitude is then
    /// `+∞`, the mathematical limit.
    pub fn normalized_amplitude(&self, ratio: f64) -> f64 {
        let z = self.impedance(self.natural_frequency * ratio);
        if z == 0.0 {
            f64::INFINITY
        } else {
            1.0 / z
        }
    }
}

/// Steady-state impedance and phase of a mode driven at the encounter
/// frequency `ω_e`.
///
/// ```text
/// Z = sqrt( (2ω_nζ)² + (ω_n² − ω_e²)² / ω_e² )
/// ε = atan( 2ω_eω_nζ / (ω_n² − ω_e²) )
/// ```
///
/// At exact resonance the phase argument is `±∞` and `atan` returns `±π/2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SteadyState {
    /// Impedance magnitude `Z`.
    pub impedance: f64,
    /// Phase lag `ε` in radians.
    pub phase: f64,
}

impl SteadyState {
    /// Evaluates the steady state for natural frequency `natural_frequency`,
    /// damping ratio `damping_ratio` and encounter frequency
    /// `encounter_frequency`.
    ///
    /// The encounter frequency must be non-zero; callers check this first.
    pub fn driven(natural_frequency: f64, damping_ratio: f64, encounter_frequency: f64) -> Self {
        let wn = natural_frequency;
        let we = encounter_frequency;
        let damping = 2.0 * wn * damping_ratio;
        let detuning = wn * wn - we * we;

        let impedance = (damping * damping + detuning * detuning / (we * we)).sqrt();
        let phase = (we * damping / detuning).atan();

        Self { impedance, phase }
    }
}

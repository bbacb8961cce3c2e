//! Regular-wave kinematics and the closed-form heave/pitch excitation.
//!
//! Deep-water linear wave theory gives the wave number from the wave
//! frequency; the ship's forward speed shifts the frequency it experiences.
//! Heave and pitch excitation follow the closed-form expressions of Jensen,
//! Mansour & Olsen (2004), where a Smith correction accounts for the pressure
//! decay with depth over a box-shaped hull.

use std::f64::consts::TAU;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result, ensure_finite, ensure_positive};
use crate::hull::ShipGeometry;

/// Acceleration of gravity (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Density of sea water (kg/m³).
pub const SEAWATER_DENSITY: f64 = 1025.0;

/// Below this `|x|` the `sin x / x` family is evaluated by its Taylor series.
const SERIES_THRESHOLD: f64 = 1e-4;

/// `|ω_e|` at or below this fraction of `ω₀` counts as a stationary wave
/// pattern; rounding in `ω₀ − k·U·cos β` leaves residues near 1e-16.
const ENCOUNTER_TOLERANCE: f64 = 1e-9;

/// A regular (monochromatic) incident wave and the ship's forward speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveInput {
    amplitude: f64,
    heading: f64,
    period: f64,
    speed: f64,
}

impl WaveInput {
    /// Creates a wave input.
    ///
    /// * `amplitude` - wave amplitude `a` in metres, `> 0`
    /// * `heading` - wave heading `β` in radians; `0` is following seas,
    ///   `π` head seas
    /// * `period` - wave period `T₀` in seconds, `> 0`
    /// * `speed` - ship forward speed `U` in m/s; may be negative
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a non-positive amplitude or
    /// period, or any non-finite value.
    pub fn new(amplitude: f64, heading: f64, period: f64, speed: f64) -> Result<Self> {
        Ok(Self {
            amplitude: ensure_positive("wave amplitude", amplitude)?,
            heading: ensure_finite("wave heading", heading)?,
            period: ensure_positive("wave period", period)?,
            speed: ensure_finite("ship speed", speed)?,
        })
    }

    /// Same as [`WaveInput::new`] with the heading given in degrees.
    ///
    /// # Errors
    ///
    /// See [`WaveInput::new`].
    pub fn with_heading_degrees(
        amplitude: f64,
        heading_deg: f64,
        period: f64,
        speed: f64,
    ) -> Result<Self> {
        Self::new(amplitude, heading_deg.to_radians(), period, speed)
    }

    /// Wave amplitude `a` (m).
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Heading `β` (rad).
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Wave period `T₀` (s).
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Forward speed `U` (m/s).
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

/// Quantities derived from the wave and the hull's length and draft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedWaveQuantities {
    /// Wave frequency `ω₀ = 2π/T₀` (rad/s).
    pub wave_frequency: f64,
    /// Deep-water wave number `k = ω₀²/g` (1/m).
    pub wave_number: f64,
    /// Frequency of encounter `ω_e = ω₀ − k·U·cos β` (rad/s).
    pub encounter_frequency: f64,
    /// Effective wave number `k_e = |k·cos β|` (1/m).
    pub effective_wave_number: f64,
    /// Half-length parameter `σ = k_e·L/2`.
    pub sigma: f64,
    /// Depth attenuation `κ = exp(−k_e·T)`.
    pub attenuation: f64,
}

impl DerivedWaveQuantities {
    /// Derives the wave quantities for `wave` acting on `ship`.
    ///
    /// Pure: the same inputs always yield bit-identical output.
    ///
    /// ```rust
    /// use std::f64::consts::PI;
    /// use seakeeping::{DerivedWaveQuantities, ShipGeometry, WaveInput};
    ///
    /// let wave = WaveInput::new(1.0, PI, 10.0, 0.0)?;
    /// let derived = DerivedWaveQuantities::derive(&wave, &ShipGeometry::default());
    /// assert_eq!(derived.encounter_frequency, 2.0 * PI / 10.0);
    /// # Ok::<(), seakeeping::Error>(())
    /// ```
    pub fn derive(wave: &WaveInput, ship: &ShipGeometry) -> Self {
        let wave_frequency = TAU / wave.period;
        let wave_number = wave_frequency * wave_frequency / GRAVITY;
        let cos_heading = wave.heading.cos();
        let encounter_frequency = wave_frequency - wave_number * wave.speed * cos_heading;
        let effective_wave_number = (wave_number * cos_heading).abs();
        let sigma = effective_wave_number * ship.length() / 2.0;
        let attenuation = (-effective_wave_number * ship.draft()).exp();

        let derived = Self {
            wave_frequency,
            wave_number,
            encounter_frequency,
            effective_wave_number,
            sigma,
            attenuation,
        };
        debug!(
            omega_0 = derived.wave_frequency,
            k = derived.wave_number,
            omega_e = derived.encounter_frequency,
            k_e = derived.effective_wave_number,
            sigma = derived.sigma,
            kappa = derived.attenuation,
            "Derived wave quantities"
        );
        derived
    }

    /// Ensures the encounter frequency is distinguishable from zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroEncounterFrequency`] when
    /// `|ω_e| <= 1e-9·ω₀`.
    pub fn check_encounter(&self) -> Result<f64> {
        if self.encounter_frequency.abs() <= ENCOUNTER_TOLERANCE * self.wave_frequency {
            Err(Error::ZeroEncounterFrequency)
        } else {
            Ok(self.encounter_frequency)
        }
    }
}

/// `sin x / x`, equal to `1` at `x = 0`.
pub fn sinc(x: f64) -> f64 {
    if x.abs() < SERIES_THRESHOLD {
        let x2 = x * x;
        1.0 - x2 / 6.0 + x2 * x2 / 120.0
    } else {
        x.sin() / x
    }
}

/// `(sin x / x − cos x) / x`, the pitch moment shape factor. Tends to `x/3`
/// as `x → 0`.
pub fn pitch_shape(x: f64) -> f64 {
    if x.abs() < SERIES_THRESHOLD {
        let x2 = x * x;
        x / 3.0 - x * x2 / 30.0 + x * x2 * x2 / 840.0
    } else {
        (sinc(x) - x.cos()) / x
    }
}

/// Heave and pitch excitation with the Smith correction, plus the
/// approximate heave/pitch natural frequency and damping.
///
/// The natural frequency `ω_n = sqrt(g/(2T))` and damping
/// `ζ = (A²/(Bα³))·sqrt(1/(8k³T))` are closed-form approximations for a
/// box-shaped hull, not solutions of the radiation problem. Heave and pitch
/// share them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmithCorrection {
    /// Frequency ratio `α = ω_e/ω₀`.
    pub frequency_ratio: f64,
    /// Sectional amplitude factor `A = 2·sin(kBα²/2)·exp(−kTα²)`.
    pub amplitude_factor: f64,
    /// Combined forcing factor `f = sqrt((1−kT)² + (A²/(kBα³))²)`.
    pub forcing_factor: f64,
    /// Heave forcing `F = κ·f·sin σ/σ`.
    pub heave_force: f64,
    /// Pitch forcing `G = κ·f·(6/L)·(sin σ/σ − cos σ)/σ`.
    pub pitch_force: f64,
    /// Approximate heave/pitch natural frequency (rad/s).
    pub natural_frequency: f64,
    /// Approximate heave/pitch damping ratio.
    pub damping_ratio: f64,
}

impl SmithCorrection {
    /// Evaluates the correction for the derived wave quantities and hull.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroEncounterFrequency`] when `ω_e == 0`, where
    /// `α = 0` makes the forcing and damping terms divide by zero.
    pub fn evaluate(derived: &DerivedWaveQuantities, ship: &ShipGeometry) -> Result<Self> {
        derived.check_encounter()?;

        let k = derived.wave_number;
        let beam = ship.beam();
        let draft = ship.draft();
        let alpha = derived.encounter_frequency / derived.wave_frequency;
        let alpha2 = alpha * alpha;
        let alpha3 = alpha2 * alpha;

        let amplitude_factor = 2.0 * (k * beam * alpha2 / 2.0).sin() * (-k * draft * alpha2).exp();
        let a2 = amplitude_factor * amplitude_factor;
        let radiation = a2 / (k * beam * alpha3);
        let forcing_factor = ((1.0 - k * draft).powi(2) + radiation * radiation).sqrt();

        let kf = derived.attenuation * forcing_factor;
        let heave_force = kf * sinc(derived.sigma);
        let pitch_force = kf * (6.0 / ship.length()) * pitch_shape(derived.sigma);

        let natural_frequency = (GRAVITY / (2.0 * draft)).sqrt();
        let damping_ratio = a2 / (beam * alpha3) * (1.0 / (8.0 * k.powi(3) * draft)).sqrt();

        let correction = Self {
            frequency_ratio: alpha,
            amplitude_factor,
            forcing_factor,
            heave_force,
            pitch_force,
            natural_frequency,
            damping_ratio,
        };
        debug!(
            alpha,
            a = amplitude_factor,
            f = forcing_factor,
            heave_force,
            pitch_force,
            omega_n = natural_frequency,
            zeta = damping_ratio,
            "Smith correction"
        );
        Ok(correction)
    }
}

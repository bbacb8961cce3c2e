//! Steady-state heave, roll and pitch of a ship in a regular wave.
//!
//! Each mode responds as a damped oscillator driven at the frequency of
//! encounter. Heave and pitch share the approximate natural frequency and
//! damping from [`SmithCorrection`]; roll uses the natural roll period and
//! damping from [`RollHydrodynamics`].

use serde::Serialize;
use tracing::{trace_span, warn};

use crate::error::{Error, Result, ensure_positive};
use crate::hull::{RollCoefficients, RollHydrodynamics, ShipGeometry};
use crate::oscillator::SteadyState;
use crate::wave::{DerivedWaveQuantities, SmithCorrection, WaveInput};

/// Sampling instants `0, Δt, 2Δt, …` up to and including the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeGrid {
    step: f64,
    horizon: f64,
}

impl TimeGrid {
    /// Default time step (s).
    pub const DEFAULT_STEP: f64 = 0.1;
    /// Default horizon (s).
    pub const DEFAULT_HORIZON: f64 = 20.0;

    /// Creates a grid with time step `step` over `[0, horizon]` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless both values are finite and
    /// strictly positive.
    pub fn new(step: f64, horizon: f64) -> Result<Self> {
        Ok(Self {
            step: ensure_positive("time step", step)?,
            horizon: ensure_positive("time horizon", horizon)?,
        })
    }

    /// Time step (s).
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Horizon (s).
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of samples, both ends included.
    ///
    /// ```rust
    /// use seakeeping::TimeGrid;
    ///
    /// assert_eq!(TimeGrid::default().len(), 201);
    /// ```
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::len_without_is_empty
    )]
    pub fn len(&self) -> usize {
        // Tolerate the rounding in horizon/step, e.g. 20.0/0.1.
        (self.horizon / self.step + 1e-9).floor() as usize + 1
    }

    /// Sampling instants.
    #[allow(clippy::cast_precision_loss)]
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| i as f64 * self.step)
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self {
            step: Self::DEFAULT_STEP,
            horizon: Self::DEFAULT_HORIZON,
        }
    }
}

/// What to do when the closed-form solution has no finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SingularPolicy {
    /// Return the singular-condition error.
    #[default]
    Fail,
    /// Return series filled with `NaN`.
    Sentinel,
}

/// Shape of a mode's time signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Waveform {
    /// `A·cos(ω_e t + ε)`
    Cosine,
    /// `A·sin(ω_e t + ε)`
    Sine,
}

/// Amplitude and phase of one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeResponse {
    /// Signed amplitude (m for heave, degrees for roll and pitch).
    pub amplitude: f64,
    /// Impedance `Z`.
    pub impedance: f64,
    /// Phase lag `ε` (rad).
    pub phase: f64,
    /// Signal shape.
    pub waveform: Waveform,
}

impl ModeResponse {
    fn driven(
        mode: &'static str,
        natural_frequency: f64,
        damping_ratio: f64,
        encounter_frequency: f64,
        force: f64,
        waveform: Waveform,
    ) -> Result<Self> {
        let state = SteadyState::driven(natural_frequency, damping_ratio, encounter_frequency);
        if state.impedance == 0.0 {
            return Err(Error::UndampedResonance { mode });
        }
        let amplitude = force * natural_frequency * natural_frequency
            / (state.impedance * encounter_frequency);
        Ok(Self {
            amplitude,
            impedance: state.impedance,
            phase: state.phase,
            waveform,
        })
    }

    fn in_degrees(self) -> Self {
        Self {
            amplitude: self.amplitude.to_degrees(),
            ..self
        }
    }

    /// Value at time `t` for encounter frequency `encounter_frequency`.
    pub fn value(&self, encounter_frequency: f64, t: f64) -> f64 {
        let angle = encounter_frequency * t + self.phase;
        match self.waveform {
            Waveform::Cosine => self.amplitude * angle.cos(),
            Waveform::Sine => self.amplitude * angle.sin(),
        }
    }
}

/// Motions at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionSample {
    /// Time (s).
    pub time: f64,
    /// Heave `z` (m).
    pub heave: f64,
    /// Roll `φ` (deg).
    pub roll: f64,
    /// Pitch `θ` (deg).
    pub pitch: f64,
}

/// Closed-form steady-state response of a ship to a regular wave.
///
/// ```rust
/// use seakeeping::{RollHydrodynamics, ShipGeometry, TimeGrid, WaveInput, WaveResponse};
///
/// let wave = WaveInput::with_heading_degrees(2.0, 45.0, 10.0, 5.0)?;
/// let ship = ShipGeometry::default();
/// let response = WaveResponse::new(&wave, &ship, &RollHydrodynamics::default())?;
/// let series = response.series(&TimeGrid::default());
/// assert_eq!(series.len(), 201);
/// assert!(series.heave.iter().all(|z| z.is_finite()));
/// # Ok::<(), seakeeping::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveResponse {
    /// Wave kinematics.
    pub derived: DerivedWaveQuantities,
    /// Heave/pitch excitation and modal approximation.
    pub smith: SmithCorrection,
    /// Roll coefficients.
    pub roll_coefficients: RollCoefficients,
    /// Heave response (m).
    pub heave: ModeResponse,
    /// Roll response (deg).
    pub roll: ModeResponse,
    /// Pitch response (deg).
    pub pitch: ModeResponse,
}

impl WaveResponse {
    /// Computes the response amplitudes and phases.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroEncounterFrequency`] when the wave pattern is
    /// stationary relative to the ship, and [`Error::UndampedResonance`] when
    /// an undamped mode is driven exactly at its natural frequency.
    pub fn new(
        wave: &WaveInput,
        ship: &ShipGeometry,
        roll: &RollHydrodynamics,
    ) -> Result<Self> {
        let _span = trace_span!("wave_response", period = wave.period(), speed = wave.speed())
            .entered();
        Self::from_derived(wave, ship, roll, DerivedWaveQuantities::derive(wave, ship))
    }

    pub(crate) fn from_derived(
        wave: &WaveInput,
        ship: &ShipGeometry,
        roll_data: &RollHydrodynamics,
        derived: DerivedWaveQuantities,
    ) -> Result<Self> {
        let encounter = derived.check_encounter()?;
        let smith = SmithCorrection::evaluate(&derived, ship)?;
        let roll_coefficients =
            RollCoefficients::evaluate(roll_data, ship, wave.heading(), &derived)?;

        let heave = ModeResponse::driven(
            "heave",
            smith.natural_frequency,
            smith.damping_ratio,
            encounter,
            wave.amplitude() * smith.heave_force,
            Waveform::Cosine,
        )?;
        let pitch = ModeResponse::driven(
            "pitch",
            smith.natural_frequency,
            smith.damping_ratio,
            encounter,
            wave.amplitude() * smith.pitch_force,
            Waveform::Sine,
        )?
        .in_degrees();
        let roll = ModeResponse::driven(
            "roll",
            roll_coefficients.natural_frequency,
            roll_data.damping_ratio(),
            encounter,
            roll_coefficients.moment_amplitude / roll_coefficients.restoring,
            Waveform::Cosine,
        )?
        .in_degrees();

        Ok(Self {
            derived,
            smith,
            roll_coefficients,
            heave,
            roll,
            pitch,
        })
    }

    /// Frequency of encounter (rad/s).
    pub fn encounter_frequency(&self) -> f64 {
        self.derived.encounter_frequency
    }

    /// Motions at time `t` (s).
    pub fn at(&self, t: f64) -> MotionSample {
        let we = self.encounter_frequency();
        MotionSample {
            time: t,
            heave: self.heave.value(we, t),
            roll: self.roll.value(we, t),
            pitch: self.pitch.value(we, t),
        }
    }

    /// Samples the motions on `grid`.
    pub fn series(&self, grid: &TimeGrid) -> ResponseSeries {
        let mut series = ResponseSeries::with_capacity(grid.len());
        for t in grid.times() {
            series.push(self.at(t));
        }
        series
    }
}

/// Sampled heave, roll and pitch time series.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResponseSeries {
    /// Time (s).
    pub time: Vec<f64>,
    /// Heave (m).
    pub heave: Vec<f64>,
    /// Roll (deg).
    pub roll: Vec<f64>,
    /// Pitch (deg).
    pub pitch: Vec<f64>,
}

impl ResponseSeries {
    fn with_capacity(n: usize) -> Self {
        Self {
            time: Vec::with_capacity(n),
            heave: Vec::with_capacity(n),
            roll: Vec::with_capacity(n),
            pitch: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, sample: MotionSample) {
        self.time.push(sample.time);
        self.heave.push(sample.heave);
        self.roll.push(sample.roll);
        self.pitch.push(sample.pitch);
    }

    /// Series on `grid` with every motion set to `NaN`.
    pub fn sentinel(grid: &TimeGrid) -> Self {
        let mut series = Self::with_capacity(grid.len());
        for t in grid.times() {
            series.push(MotionSample {
                time: t,
                heave: f64::NAN,
                roll: f64::NAN,
                pitch: f64::NAN,
            });
        }
        series
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterates over the samples in time order.
    pub fn samples(&self) -> impl Iterator<Item = MotionSample> + '_ {
        (0..self.len()).map(|i| MotionSample {
            time: self.time[i],
            heave: self.heave[i],
            roll: self.roll[i],
            pitch: self.pitch[i],
        })
    }
}

/// Computes heave (m), roll (deg) and pitch (deg) time series of a ship in a
/// regular wave.
///
/// With [`SingularPolicy::Sentinel`] a singular condition yields `NaN`
/// series instead of an error; invalid parameters are always rejected when
/// the inputs are constructed.
///
/// # Errors
///
/// With [`SingularPolicy::Fail`], returns the errors of [`WaveResponse::new`].
pub fn steady_state_wave_response(
    wave: &WaveInput,
    ship: &ShipGeometry,
    roll: &RollHydrodynamics,
    grid: &TimeGrid,
    policy: SingularPolicy,
) -> Result<ResponseSeries> {
    match WaveResponse::new(wave, ship, roll) {
        Ok(response) => Ok(response.series(grid)),
        Err(err) if err.is_singular() && policy == SingularPolicy::Sentinel => {
            warn!(error = %err, "Singular wave response; returning NaN series");
            Ok(ResponseSeries::sentinel(grid))
        }
        Err(err) => Err(err),
    }
}

//! Hull geometry and roll hydrodynamics.

use std::f64::consts::TAU;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result, ensure_non_negative, ensure_positive};
use crate::wave::{DerivedWaveQuantities, GRAVITY, SEAWATER_DENSITY};

/// Main dimensions of the hull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipGeometry {
    length: f64,
    beam: f64,
    draft: f64,
}

impl ShipGeometry {
    /// Creates a hull from length `L`, beam `B` and draft `T`, all in metres.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any dimension is not strictly
    /// positive.
    pub fn new(length: f64, beam: f64, draft: f64) -> Result<Self> {
        Ok(Self {
            length: ensure_positive("ship length", length)?,
            beam: ensure_positive("ship beam", beam)?,
            draft: ensure_positive("ship draft", draft)?,
        })
    }

    /// Length `L` (m).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Beam `B` (m).
    pub fn beam(&self) -> f64 {
        self.beam
    }

    /// Draft `T` (m).
    pub fn draft(&self) -> f64 {
        self.draft
    }
}

impl Default for ShipGeometry {
    /// An 82.8 m × 19.2 m hull at 6 m draft.
    fn default() -> Self {
        Self {
            length: 82.8,
            beam: 19.2,
            draft: 6.0,
        }
    }
}

/// Roll damping, roll period, metacentric height and block coefficient.
///
/// Defaults: `ζ₄ = 0.2`, `T₄ = 6 s`, `GM_T = 1 m`, `Cb = 0.65`.
///
/// ```rust
/// use seakeeping::RollHydrodynamics;
///
/// let roll = RollHydrodynamics::default().with_damping_ratio(0.1)?;
/// assert_eq!(roll.natural_period(), 6.0);
/// assert_eq!(roll.damping_ratio(), 0.1);
/// # Ok::<(), seakeeping::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollHydrodynamics {
    damping_ratio: f64,
    natural_period: f64,
    metacentric_height: f64,
    block_coefficient: f64,
}

impl RollHydrodynamics {
    /// Default relative roll damping `ζ₄`.
    pub const DEFAULT_DAMPING_RATIO: f64 = 0.2;
    /// Default natural roll period `T₄` (s).
    pub const DEFAULT_NATURAL_PERIOD: f64 = 6.0;
    /// Default transverse metacentric height `GM_T` (m).
    pub const DEFAULT_METACENTRIC_HEIGHT: f64 = 1.0;
    /// Default block coefficient `Cb`.
    pub const DEFAULT_BLOCK_COEFFICIENT: f64 = 0.65;

    /// Creates a validated record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a negative damping ratio, a
    /// non-positive period or metacentric height, or a block coefficient
    /// outside `(0, 1]`.
    pub fn new(
        damping_ratio: f64,
        natural_period: f64,
        metacentric_height: f64,
        block_coefficient: f64,
    ) -> Result<Self> {
        let block_coefficient = ensure_positive("block coefficient", block_coefficient)?;
        if block_coefficient > 1.0 {
            return Err(Error::InvalidParameter {
                name: "block coefficient",
                value: block_coefficient,
                reason: "must not exceed 1",
            });
        }
        Ok(Self {
            damping_ratio: ensure_non_negative("roll damping ratio", damping_ratio)?,
            natural_period: ensure_positive("roll natural period", natural_period)?,
            metacentric_height: ensure_positive("metacentric height", metacentric_height)?,
            block_coefficient,
        })
    }

    /// Replaces the roll damping ratio.
    ///
    /// # Errors
    ///
    /// See [`RollHydrodynamics::new`].
    pub fn with_damping_ratio(self, damping_ratio: f64) -> Result<Self> {
        Self::new(
            damping_ratio,
            self.natural_period,
            self.metacentric_height,
            self.block_coefficient,
        )
    }

    /// Replaces the natural roll period.
    ///
    /// # Errors
    ///
    /// See [`RollHydrodynamics::new`].
    pub fn with_natural_period(self, natural_period: f64) -> Result<Self> {
        Self::new(
            self.damping_ratio,
            natural_period,
            self.metacentric_height,
            self.block_coefficient,
        )
    }

    /// Relative roll damping `ζ₄`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Natural roll period `T₄` (s).
    pub fn natural_period(&self) -> f64 {
        self.natural_period
    }

    /// Transverse metacentric height `GM_T` (m).
    pub fn metacentric_height(&self) -> f64 {
        self.metacentric_height
    }

    /// Block coefficient `Cb`.
    pub fn block_coefficient(&self) -> f64 {
        self.block_coefficient
    }
}

impl Default for RollHydrodynamics {
    fn default() -> Self {
        Self {
            damping_ratio: Self::DEFAULT_DAMPING_RATIO,
            natural_period: Self::DEFAULT_NATURAL_PERIOD,
            metacentric_height: Self::DEFAULT_METACENTRIC_HEIGHT,
            block_coefficient: Self::DEFAULT_BLOCK_COEFFICIENT,
        }
    }
}

/// Roll restoring, inertia and damping coefficients and the wave-induced
/// roll moment amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollCoefficients {
    /// Natural roll frequency `ω₄ = 2π/T₄` (rad/s).
    pub natural_frequency: f64,
    /// Displaced volume `∇ = Cb·L·B·T` (m³).
    pub displacement_volume: f64,
    /// Restoring coefficient `C44 = ρ·g·∇·GM_T` (N·m/rad).
    pub restoring: f64,
    /// Effective inertia `M44 = C44/ω₄²` (kg·m²).
    pub inertia: f64,
    /// Damping coefficient `B44 = 2·ζ₄·ω₄·M44` (N·m·s/rad).
    pub damping: f64,
    /// Roll moment amplitude `M = sin β·sqrt(B44·ρ·g²/ω_e)` (N·m).
    ///
    /// For `ω_e < 0` the radicand is negative; the square root is taken of
    /// its magnitude and the sign of `ω_e` carried onto the moment.
    pub moment_amplitude: f64,
}

impl RollCoefficients {
    /// Evaluates the coefficients for the given hull, roll data and wave.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroEncounterFrequency`] when `ω_e == 0`.
    pub fn evaluate(
        roll: &RollHydrodynamics,
        ship: &ShipGeometry,
        heading: f64,
        derived: &DerivedWaveQuantities,
    ) -> Result<Self> {
        let encounter = derived.check_encounter()?;

        let natural_frequency = TAU / roll.natural_period;
        let displacement_volume = roll.block_coefficient * ship.length * ship.beam * ship.draft;
        let restoring =
            SEAWATER_DENSITY * GRAVITY * displacement_volume * roll.metacentric_height;
        let inertia = restoring / (natural_frequency * natural_frequency);
        let damping = 2.0 * roll.damping_ratio * natural_frequency * inertia;

        let radicand = damping * SEAWATER_DENSITY * GRAVITY * GRAVITY / encounter;
        if radicand < 0.0 {
            debug!(
                radicand,
                omega_e = encounter,
                "Negative roll moment radicand; carrying sign of encounter frequency"
            );
        }
        let moment_amplitude = heading.sin() * radicand.signum() * radicand.abs().sqrt();

        let coefficients = Self {
            natural_frequency,
            displacement_volume,
            restoring,
            inertia,
            damping,
            moment_amplitude,
        };
        debug!(
            omega_4 = natural_frequency,
            volume = displacement_volume,
            c44 = restoring,
            m44 = inertia,
            b44 = damping,
            moment = moment_amplitude,
            "Roll coefficients"
        );
        Ok(coefficients)
    }
}

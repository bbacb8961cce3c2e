//! Non-dimensional amplitude-response curves for heave, roll and pitch.
//!
//! Every mode is swept over the same frequency ratios `r = ω / ω_n`. Roll is
//! evaluated a second time with doubled damping: roll damping is the least
//! certain of the three, and the pair of curves shows how much the resonance
//! peak depends on it.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result, ensure_finite};
use crate::oscillator::ModalParameters;
use crate::provider::{Dof, ModalDataProvider};

/// Heave, roll and pitch modal parameters of one vessel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModalSet {
    /// Heave (vertical) mode.
    pub heave: ModalParameters,
    /// Roll mode.
    pub roll: ModalParameters,
    /// Pitch mode.
    pub pitch: ModalParameters,
}

impl ModalSet {
    /// Builds the set from natural periods and damping ratios supplied by a
    /// vessel-parameter provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the provider reports a
    /// non-positive period or a negative damping ratio.
    pub fn from_provider<P: ModalDataProvider + ?Sized>(provider: &P) -> Result<Self> {
        let mode = |dof: Dof| {
            ModalParameters::from_period(provider.natural_period(dof), provider.damping_ratio(dof))
        };
        Ok(Self {
            heave: mode(Dof::Heave)?,
            roll: mode(Dof::Roll)?,
            pitch: mode(Dof::Pitch)?,
        })
    }
}

/// Ordered, non-negative frequency ratios `r = ω / ω_n`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencySweep {
    ratios: Vec<f64>,
}

impl FrequencySweep {
    /// Evenly spaced ratios from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `start` is negative, `end` is
    /// below `start`, or fewer than two points are requested.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seakeeping::FrequencySweep;
    ///
    /// let sweep = FrequencySweep::linear(0.0, 3.0, 301)?;
    /// assert_eq!(sweep.len(), 301);
    /// assert_eq!(sweep.ratios()[100], 1.0);
    /// # Ok::<(), seakeeping::Error>(())
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn linear(start: f64, end: f64, points: usize) -> Result<Self> {
        if points < 2 {
            return Err(Error::InvalidParameter {
                name: "sweep points",
                value: points as f64,
                reason: "need at least two points",
            });
        }
        let start = ensure_finite("sweep start", start)?;
        let end = ensure_finite("sweep end", end)?;
        if start < 0.0 {
            return Err(Error::InvalidParameter {
                name: "sweep start",
                value: start,
                reason: "frequency ratios cannot be negative",
            });
        }
        if end <= start {
            return Err(Error::InvalidParameter {
                name: "sweep end",
                value: end,
                reason: "must be greater than the sweep start",
            });
        }

        let span = end - start;
        let last = (points - 1) as f64;
        let ratios = (0..points)
            .map(|i| start + span * i as f64 / last)
            .collect();
        Ok(Self { ratios })
    }

    /// Uses an explicit list of ratios.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any ratio is negative or not
    /// finite, or if the list is not in ascending order.
    pub fn from_ratios(ratios: Vec<f64>) -> Result<Self> {
        for &r in &ratios {
            ensure_finite("frequency ratio", r)?;
            if r < 0.0 {
                return Err(Error::InvalidParameter {
                    name: "frequency ratio",
                    value: r,
                    reason: "frequency ratios cannot be negative",
                });
            }
        }
        if let Some(pair) = ratios.windows(2).find(|w| w[1] < w[0]) {
            return Err(Error::InvalidParameter {
                name: "frequency ratio",
                value: pair[1],
                reason: "ratios must be in ascending order",
            });
        }
        Ok(Self { ratios })
    }

    /// The ratios in sweep order.
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Number of ratios.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Returns `true` if the sweep has no points.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

/// One response curve together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseCurve {
    /// Parameters of the mode.
    pub mode: ModalParameters,
    /// Normalised amplitude `1/Z` per ratio of the sweep.
    pub amplitude: Vec<f64>,
}

impl ResponseCurve {
    fn sweep(mode: ModalParameters, sweep: &FrequencySweep) -> Self {
        let amplitude = sweep
            .ratios()
            .iter()
            .map(|&r| mode.normalized_amplitude(r))
            .collect();
        Self { mode, amplitude }
    }

    /// Largest amplitude on the curve and the ratio where it occurs.
    ///
    /// Returns `None` for an empty curve.
    pub fn peak(&self, sweep: &FrequencySweep) -> Option<(f64, f64)> {
        sweep
            .ratios()
            .iter()
            .zip(&self.amplitude)
            .map(|(&r, &a)| (r, a))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// The four amplitude-response curves over a shared sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpedanceCurves {
    /// Frequency ratios.
    pub ratios: FrequencySweep,
    /// Heave response.
    pub heave: ResponseCurve,
    /// Roll response with nominal damping `ζ₄`.
    pub roll: ResponseCurve,
    /// Roll response with doubled damping `2ζ₄`.
    pub roll_doubled_damping: ResponseCurve,
    /// Pitch response.
    pub pitch: ResponseCurve,
}

/// Computes normalised amplitude `1/Z(ω_n·r)` for heave, roll, roll with
/// doubled damping, and pitch.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] only if doubling the roll damping
/// overflows to a non-finite value.
///
/// # Example
///
/// ```rust
/// use seakeeping::{impedance_curves, FrequencySweep, ModalParameters, ModalSet};
///
/// let modes = ModalSet {
///     heave: ModalParameters::from_period(8.0, 0.2)?,
///     roll: ModalParameters::from_period(12.0, 0.05)?,
///     pitch: ModalParameters::from_period(7.5, 0.25)?,
/// };
/// let sweep = FrequencySweep::linear(0.0, 3.0, 301)?;
/// let curves = impedance_curves(&modes, &sweep)?;
///
/// // Doubling roll damping lowers the resonance peak.
/// assert!(curves.roll_doubled_damping.amplitude[100] < curves.roll.amplitude[100]);
/// # Ok::<(), seakeeping::Error>(())
/// ```
pub fn impedance_curves(modes: &ModalSet, sweep: &FrequencySweep) -> Result<ImpedanceCurves> {
    let roll_doubled = modes.roll.with_scaled_damping(2.0)?;

    debug!(
        points = sweep.len(),
        heave_wn = modes.heave.natural_frequency(),
        roll_wn = modes.roll.natural_frequency(),
        pitch_wn = modes.pitch.natural_frequency(),
        "Sweeping impedance curves"
    );

    Ok(ImpedanceCurves {
        ratios: sweep.clone(),
        heave: ResponseCurve::sweep(modes.heave, sweep),
        roll: ResponseCurve::sweep(modes.roll, sweep),
        roll_doubled_damping: ResponseCurve::sweep(roll_doubled, sweep),
        pitch: ResponseCurve::sweep(modes.pitch, sweep),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes() -> ModalSet {
        ModalSet {
            heave: ModalParameters::new(1.0, 0.1).unwrap(),
            roll: ModalParameters::new(0.5, 0.05).unwrap(),
            pitch: ModalParameters::new(1.2, 0.2).unwrap(),
        }
    }

    #[test]
    fn linear_sweep_is_inclusive() {
        let sweep = FrequencySweep::linear(0.0, 2.0, 5).unwrap();
        assert_eq!(sweep.ratios(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
        assert!(!sweep.is_empty());
    }

    #[test]
    fn linear_sweep_rejects_bad_bounds() {
        assert!(FrequencySweep::linear(-0.1, 2.0, 5).is_err());
        assert!(FrequencySweep::linear(1.0, 1.0, 5).is_err());
        assert!(FrequencySweep::linear(0.0, 2.0, 1).is_err());
        assert!(FrequencySweep::linear(0.0, f64::INFINITY, 5).is_err());
    }

    #[test]
    fn explicit_ratios_must_be_ordered_and_non_negative() {
        assert!(FrequencySweep::from_ratios(vec![0.0, 0.5, 1.0]).is_ok());
        assert!(FrequencySweep::from_ratios(vec![0.0, 1.0, 0.5]).is_err());
        assert!(FrequencySweep::from_ratios(vec![-1.0, 0.5]).is_err());
        assert!(FrequencySweep::from_ratios(vec![0.0, f64::NAN]).is_err());
        assert!(FrequencySweep::from_ratios(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn produces_four_curves_of_sweep_length() {
        let sweep = FrequencySweep::linear(0.0, 3.0, 31).unwrap();
        let curves = impedance_curves(&modes(), &sweep).unwrap();
        for curve in [
            &curves.heave,
            &curves.roll,
            &curves.roll_doubled_damping,
            &curves.pitch,
        ] {
            assert_eq!(curve.amplitude.len(), 31);
        }
    }

    #[test]
    fn roll_curves_share_frequency_with_distinct_damping() {
        let sweep = FrequencySweep::linear(0.0, 3.0, 31).unwrap();
        let curves = impedance_curves(&modes(), &sweep).unwrap();
        assert_eq!(
            curves.roll.mode.natural_frequency(),
            curves.roll_doubled_damping.mode.natural_frequency()
        );
        assert!(
            (curves.roll_doubled_damping.mode.damping_ratio()
                - 2.0 * curves.roll.mode.damping_ratio())
            .abs()
                < 1e-15
        );
    }

    #[test]
    fn static_limit_for_every_mode() {
        let sweep = FrequencySweep::from_ratios(vec![0.0]).unwrap();
        let m = modes();
        let curves = impedance_curves(&m, &sweep).unwrap();
        let wn = m.roll.natural_frequency();
        assert!((curves.roll.amplitude[0] - 1.0 / (wn * wn)).abs() < 1e-12);
        assert!((curves.roll_doubled_damping.amplitude[0] - 1.0 / (wn * wn)).abs() < 1e-12);
        assert!((curves.heave.amplitude[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn lightly_damped_peak_sits_at_resonance() {
        let sweep = FrequencySweep::linear(0.0, 3.0, 301).unwrap();
        let curves = impedance_curves(&modes(), &sweep).unwrap();
        let (ratio, _) = curves.roll.peak(&sweep).unwrap();
        assert!((ratio - 1.0).abs() < 0.02, "peak at r = {ratio}");
    }

    #[test]
    fn modal_set_serializes() {
        let json = serde_json::to_string(&modes()).unwrap();
        assert!(json.contains("\"heave\":{\"natural_frequency\":1.0,\"damping_ratio\":0.1}"));
    }
}

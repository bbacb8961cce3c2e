//! Vessel modal data: natural periods and damping ratios per motion mode.
//!
//! The hydrodynamic analysis that produces these numbers lives outside this
//! crate. [`ModalDataProvider`] is the seam it plugs into; [`ModalTable`] is
//! a plain record that can be deserialized from a JSON file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rigid-body degrees of freedom, numbered 1–6 in the usual seakeeping
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dof {
    /// Longitudinal translation (1).
    Surge,
    /// Transverse translation (2).
    Sway,
    /// Vertical translation (3).
    Heave,
    /// Rotation about the longitudinal axis (4).
    Roll,
    /// Rotation about the transverse axis (5).
    Pitch,
    /// Rotation about the vertical axis (6).
    Yaw,
}

impl Dof {
    /// All six degrees of freedom in index order.
    pub const ALL: [Self; 6] = [
        Self::Surge,
        Self::Sway,
        Self::Heave,
        Self::Roll,
        Self::Pitch,
        Self::Yaw,
    ];

    /// Conventional 1-based index (heave = 3, roll = 4, pitch = 5).
    pub const fn index(self) -> usize {
        match self {
            Self::Surge => 1,
            Self::Sway => 2,
            Self::Heave => 3,
            Self::Roll => 4,
            Self::Pitch => 5,
            Self::Yaw => 6,
        }
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surge => "surge",
            Self::Sway => "sway",
            Self::Heave => "heave",
            Self::Roll => "roll",
            Self::Pitch => "pitch",
            Self::Yaw => "yaw",
        }
    }
}

impl fmt::Display for Dof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of natural periods and relative damping ratios per mode.
///
/// Values are returned raw; [`ModalSet::from_provider`](crate::ModalSet::from_provider)
/// validates them.
pub trait ModalDataProvider {
    /// Natural period of `dof` in seconds.
    fn natural_period(&self, dof: Dof) -> f64;

    /// Relative damping ratio of `dof`.
    fn damping_ratio(&self, dof: Dof) -> f64;
}

/// Natural period and damping ratio of one mode as stored in a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeEntry {
    /// Natural period in seconds.
    pub natural_period: f64,
    /// Relative damping ratio.
    pub damping_ratio: f64,
}

/// Tabulated modal data for one vessel.
///
/// Heave, roll and pitch are required; the horizontal modes are optional
/// because the response computations never use them.
///
/// ```rust
/// use seakeeping::{Dof, ModalDataProvider, ModalTable};
///
/// let table: ModalTable = serde_json::from_str(r#"{
///     "heave": { "natural_period": 8.0, "damping_ratio": 0.2 },
///     "roll":  { "natural_period": 12.0, "damping_ratio": 0.05 },
///     "pitch": { "natural_period": 7.5, "damping_ratio": 0.25 }
/// }"#)?;
/// assert_eq!(table.natural_period(Dof::Roll), 12.0);
/// assert!(table.natural_period(Dof::Surge).is_nan());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModalTable {
    /// Surge (index 1), optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surge: Option<ModeEntry>,
    /// Sway (index 2), optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sway: Option<ModeEntry>,
    /// Heave (index 3).
    pub heave: ModeEntry,
    /// Roll (index 4).
    pub roll: ModeEntry,
    /// Pitch (index 5).
    pub pitch: ModeEntry,
    /// Yaw (index 6), optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaw: Option<ModeEntry>,
}

impl ModalTable {
    /// Entry for `dof`, if present.
    pub const fn entry(&self, dof: Dof) -> Option<ModeEntry> {
        match dof {
            Dof::Surge => self.surge,
            Dof::Sway => self.sway,
            Dof::Heave => Some(self.heave),
            Dof::Roll => Some(self.roll),
            Dof::Pitch => Some(self.pitch),
            Dof::Yaw => self.yaw,
        }
    }
}

impl ModalDataProvider for ModalTable {
    fn natural_period(&self, dof: Dof) -> f64 {
        self.entry(dof).map_or(f64::NAN, |e| e.natural_period)
    }

    fn damping_ratio(&self, dof: Dof) -> f64 {
        self.entry(dof).map_or(f64::NAN, |e| e.damping_ratio)
    }
}

#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]

//! # Seakeeping
//!
//! Closed-form ship motion tools for teaching and quick estimates.
//!
//! Seakeeping provides:
//! - **Impedance curves**: non-dimensional amplitude response of heave, roll
//!   and pitch modelled as damped oscillators
//! - **Wave response**: steady-state heave, roll and pitch time series for a
//!   ship in a regular wave
//!
//! Everything is a pure function of its inputs. Inputs are validated when
//! the value objects are built; singular conditions are reported as
//! [`Error`]s rather than `NaN`.
//!
//! ## Impedance Curves Example
//!
//! ```rust
//! use seakeeping::{impedance_curves, FrequencySweep, ModalParameters, ModalSet};
//!
//! let modes = ModalSet {
//!     heave: ModalParameters::from_period(8.0, 0.2)?,
//!     roll: ModalParameters::from_period(12.0, 0.05)?,
//!     pitch: ModalParameters::from_period(7.5, 0.25)?,
//! };
//! let sweep = FrequencySweep::linear(0.0, 3.0, 301)?;
//! let curves = impedance_curves(&modes, &sweep)?;
//! assert_eq!(curves.heave.amplitude.len(), 301);
//! # Ok::<(), seakeeping::Error>(())
//! ```
//!
//! ## Wave Response Example
//!
//! ```rust
//! use seakeeping::prelude::*;
//!
//! // 2 m wave, 45°, 10 s, ship at 5 m/s.
//! let wave = WaveInput::with_heading_degrees(2.0, 45.0, 10.0, 5.0)?;
//! let ship = ShipGeometry::new(82.8, 19.2, 6.0)?;
//!
//! let series = steady_state_wave_response(
//!     &wave,
//!     &ship,
//!     &RollHydrodynamics::default(),
//!     &TimeGrid::default(),
//!     SingularPolicy::Fail,
//! )?;
//! assert_eq!(series.len(), 201);
//! # Ok::<(), seakeeping::Error>(())
//! ```
//!
//! ## Units
//!
//! Metres, seconds and radians on input; heave in metres, roll and pitch in
//! degrees on output.
//!
//! ## Reference
//!
//! J. J. Jensen, A. E. Mansour, A. S. Olsen, "Estimation of ship motions
//! using closed-form expressions", Ocean Engineering 31 (2004) 61–85.

mod error;
mod hull;
mod impedance;
mod oscillator;
mod provider;
mod response;
mod wave;

pub use error::{Error, Result};
pub use hull::{RollCoefficients, RollHydrodynamics, ShipGeometry};
pub use impedance::{FrequencySweep, ImpedanceCurves, ModalSet, ResponseCurve, impedance_curves};
pub use oscillator::{ModalParameters, SteadyState};
pub use provider::{Dof, ModalDataProvider, ModalTable, ModeEntry};
pub use response::{
    ModeResponse, MotionSample, ResponseSeries, SingularPolicy, TimeGrid, WaveResponse, Waveform,
    steady_state_wave_response,
};
pub use wave::{
    DerivedWaveQuantities, GRAVITY, SEAWATER_DENSITY, SmithCorrection, WaveInput, pitch_shape, sinc,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hull::{RollHydrodynamics, ShipGeometry};
    pub use crate::impedance::{FrequencySweep, ImpedanceCurves, ModalSet, impedance_curves};
    pub use crate::oscillator::ModalParameters;
    pub use crate::provider::{Dof, ModalDataProvider, ModalTable};
    pub use crate::response::{
        ResponseSeries, SingularPolicy, TimeGrid, WaveResponse, steady_state_wave_response,
    };
    pub use crate::wave::{GRAVITY, SEAWATER_DENSITY, WaveInput};
}

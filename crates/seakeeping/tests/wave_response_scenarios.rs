#![allow(clippy::doc_markdown)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

//! Scenario tests for the wave response: the 45° example hull checked
//! against hand-evaluated formulas, beam and head seas, and the singular
//! conditions.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use seakeeping::{
    DerivedWaveQuantities, Error, RollHydrodynamics, ShipGeometry, SingularPolicy, TimeGrid,
    WaveInput, WaveResponse, steady_state_wave_response,
};

fn rel_close(actual: f64, expected: f64, tol: f64) -> bool {
    (actual - expected).abs() <= tol * expected.abs().max(f64::MIN_POSITIVE)
}

/// Expected (heave, roll, pitch) at t = 0, evaluated straight from the
/// closed-form expressions.
fn hand_evaluated_initial_motions(
    a: f64,
    beta: f64,
    t0: f64,
    u: f64,
    (l, b, t): (f64, f64, f64),
    (zeta4, t4, gm, cb): (f64, f64, f64, f64),
) -> (f64, f64, f64) {
    let g = 9.81;
    let rho = 1025.0;
    let volume = cb * l * b * t;

    let w0 = 2.0 * PI / t0;
    let k = w0 * w0 / g;
    let we = w0 - k * u * beta.cos();
    let ke = (k * beta.cos()).abs();
    let sigma = ke * l / 2.0;
    let kappa = (-ke * t).exp();

    let alpha = we / w0;
    let amp = 2.0 * (k * b * alpha.powi(2) / 2.0).sin() * (-k * t * alpha.powi(2)).exp();
    let f = ((1.0 - k * t).powi(2) + (amp.powi(2) / (k * b * alpha.powi(3))).powi(2)).sqrt();
    let heave_force = kappa * f * sigma.sin() / sigma;
    let pitch_force =
        kappa * f * (6.0 / l) * (1.0 / sigma) * (sigma.sin() / sigma - sigma.cos());

    let wn = (g / (2.0 * t)).sqrt();
    let zeta = amp.powi(2) / (b * alpha.powi(3)) * (1.0 / (8.0 * k.powi(3) * t)).sqrt();

    let w4 = 2.0 * PI / t4;
    let c44 = rho * g * volume * gm;
    let m44 = c44 / w4.powi(2);
    let b44 = 2.0 * zeta4 * w4 * m44;
    let moment = beta.sin() * (b44 * rho * g.powi(2) / we).sqrt();

    let z = |wn: f64, zeta: f64| {
        ((2.0 * wn * zeta).powi(2) + (1.0 / we.powi(2)) * (wn.powi(2) - we.powi(2)).powi(2)).sqrt()
    };
    let eps = |wn: f64, zeta: f64| (2.0 * we * wn * zeta / (wn.powi(2) - we.powi(2))).atan();

    let heave = a * heave_force * wn.powi(2) / (z(wn, zeta) * we) * eps(wn, zeta).cos();
    let pitch = (180.0 / PI) * (a * pitch_force * wn.powi(2) / (z(wn, zeta) * we))
        * eps(wn, zeta).sin();
    let roll = (180.0 / PI) * ((moment / c44) * w4.powi(2) / (z(w4, zeta4) * we))
        * eps(w4, zeta4).cos();

    (heave, roll, pitch)
}

// =============================================================================
// Documented example: a = 2 m, β = 45°, T₀ = 10 s, U = 5 m/s
// =============================================================================

#[test]
fn documented_example_matches_closed_form_at_t0() {
    let wave = WaveInput::new(2.0, FRAC_PI_4, 10.0, 5.0).unwrap();
    let ship = ShipGeometry::new(82.8, 19.2, 6.0).unwrap();
    let roll = RollHydrodynamics::default();

    let series = steady_state_wave_response(
        &wave,
        &ship,
        &roll,
        &TimeGrid::new(0.1, 20.0).unwrap(),
        SingularPolicy::Fail,
    )
    .unwrap();

    assert_eq!(series.len(), 201);
    assert_eq!(series.time[0], 0.0);
    assert!((series.time[200] - 20.0).abs() < 1e-9);
    for s in series.samples() {
        assert!(s.heave.is_finite(), "heave at t={}", s.time);
        assert!(s.roll.is_finite(), "roll at t={}", s.time);
        assert!(s.pitch.is_finite(), "pitch at t={}", s.time);
    }

    let (heave, roll_deg, pitch) = hand_evaluated_initial_motions(
        2.0,
        FRAC_PI_4,
        10.0,
        5.0,
        (82.8, 19.2, 6.0),
        (0.2, 6.0, 1.0, 0.65),
    );
    assert!(
        rel_close(series.heave[0], heave, 1e-9),
        "heave {} vs {heave}",
        series.heave[0]
    );
    assert!(
        rel_close(series.roll[0], roll_deg, 1e-9),
        "roll {} vs {roll_deg}",
        series.roll[0]
    );
    assert!(
        rel_close(series.pitch[0], pitch, 1e-9),
        "pitch {} vs {pitch}",
        series.pitch[0]
    );
}

#[test]
fn documented_example_motions_are_plausible() {
    let wave = WaveInput::with_heading_degrees(2.0, 45.0, 10.0, 5.0).unwrap();
    let response =
        WaveResponse::new(&wave, &ShipGeometry::default(), &RollHydrodynamics::default())
            .unwrap();

    // Long waves relative to the draft: heave of the order of the wave.
    assert!(response.heave.amplitude.abs() > 0.1);
    assert!(response.heave.amplitude.abs() < 10.0);
    assert!(response.pitch.amplitude.abs() < 30.0);
    assert!(response.roll.amplitude.abs() < 90.0);
    assert!(response.encounter_frequency() < TAU / 10.0);
}

// =============================================================================
// Beam and head seas
// =============================================================================

#[test]
fn beam_seas_use_sigma_limit() {
    let wave = WaveInput::new(1.0, FRAC_PI_2, 8.0, 4.0).unwrap();
    let ship = ShipGeometry::default();
    let derived = DerivedWaveQuantities::derive(&wave, &ship);
    assert!(derived.sigma < 1e-6);

    let response = WaveResponse::new(&wave, &ship, &RollHydrodynamics::default()).unwrap();
    assert!(!response.smith.heave_force.is_nan());
    assert!((response.smith.heave_force - derived.attenuation * response.smith.forcing_factor)
        .abs()
        < 1e-9);
    assert!(response.pitch.amplitude.abs() < 1e-9);

    let series = response.series(&TimeGrid::default());
    assert!(series.heave.iter().all(|v| v.is_finite()));
    assert!(series.pitch.iter().all(|v| v.abs() < 1e-9));
}

#[test]
fn head_seas_at_rest_encounter_wave_frequency() {
    let wave = WaveInput::new(1.0, PI, 10.0, 0.0).unwrap();
    let response =
        WaveResponse::new(&wave, &ShipGeometry::default(), &RollHydrodynamics::default())
            .unwrap();
    assert_eq!(response.encounter_frequency(), 2.0 * PI / 10.0);
    assert_eq!(response.smith.frequency_ratio, 1.0);
    // sin(π) is not exactly zero; roll is negligible rather than absent.
    assert!(response.roll.amplitude.abs() < 1e-9);
}

#[test]
fn short_hull_limit_is_finite() {
    // σ = k_e·L/2 below 1e-6 through a tiny length.
    let wave = WaveInput::new(1.0, PI, 10.0, 0.0).unwrap();
    let ship = ShipGeometry::new(1e-5, 19.2, 6.0).unwrap();
    let derived = DerivedWaveQuantities::derive(&wave, &ship);
    assert!(derived.sigma < 1e-6);
    let response = WaveResponse::new(&wave, &ship, &RollHydrodynamics::default()).unwrap();
    assert!(response.heave.amplitude.is_finite());
    assert!(response.pitch.amplitude.is_finite());
}

// =============================================================================
// Singular and invalid conditions
// =============================================================================

#[test]
fn undamped_roll_resonance_is_reported_then_sentineled() {
    let wave = WaveInput::new(1.0, 2.0, 6.0, 0.0).unwrap();
    let roll = RollHydrodynamics::new(0.0, 6.0, 1.0, 0.65).unwrap();
    let ship = ShipGeometry::default();
    let grid = TimeGrid::default();

    let err = steady_state_wave_response(&wave, &ship, &roll, &grid, SingularPolicy::Fail)
        .unwrap_err();
    assert!(matches!(err, Error::UndampedResonance { mode: "roll" }));

    let series =
        steady_state_wave_response(&wave, &ship, &roll, &grid, SingularPolicy::Sentinel).unwrap();
    assert_eq!(series.len(), grid.len());
    assert!(series.heave.iter().all(|v| v.is_nan()));
}

#[test]
fn oblique_seas_at_celerity_are_stationary() {
    // U·cos 30° equals the celerity of a 10 s wave; ω_e is a rounding residue.
    let speed = 9.81 * 10.0 / (TAU * 30.0_f64.to_radians().cos());
    let wave = WaveInput::with_heading_degrees(1.0, 30.0, 10.0, speed).unwrap();
    let ship = ShipGeometry::default();
    let roll = RollHydrodynamics::default();
    let grid = TimeGrid::default();

    assert_eq!(
        WaveResponse::new(&wave, &ship, &roll),
        Err(Error::ZeroEncounterFrequency)
    );
    assert_eq!(
        steady_state_wave_response(&wave, &ship, &roll, &grid, SingularPolicy::Fail),
        Err(Error::ZeroEncounterFrequency)
    );
    let series =
        steady_state_wave_response(&wave, &ship, &roll, &grid, SingularPolicy::Sentinel).unwrap();
    assert_eq!(series.len(), 201);
    assert!(series.roll.iter().all(|v| v.is_nan()));
}

#[test]
fn invalid_inputs_are_rejected_at_construction() {
    assert!(matches!(
        WaveInput::new(-2.0, PI, 10.0, 0.0),
        Err(Error::InvalidParameter {
            name: "wave amplitude",
            ..
        })
    ));
    assert!(matches!(
        RollHydrodynamics::new(0.2, 6.0, 1.0, 1.5),
        Err(Error::InvalidParameter {
            name: "block coefficient",
            ..
        })
    ));
    assert!(ShipGeometry::new(82.8, 0.0, 6.0).is_err());
    assert!(TimeGrid::new(-0.1, 20.0).is_err());
}

#[test]
fn overtaking_seas_stay_finite() {
    // ω_e < 0: roll moment radicand is negative.
    let wave = WaveInput::new(1.0, 0.3, 6.0, 20.0).unwrap();
    let response =
        WaveResponse::new(&wave, &ShipGeometry::default(), &RollHydrodynamics::default())
            .unwrap();
    assert!(response.encounter_frequency() < 0.0);
    let series = response.series(&TimeGrid::default());
    assert!(series.roll.iter().all(|v| v.is_finite()));
    assert!(series.heave.iter().all(|v| v.is_finite()));
}

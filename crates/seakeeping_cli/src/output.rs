//! Running a [`Job`] and rendering its result.

use seakeeping::{
    ImpedanceCurves, ResponseCurve, ResponseSeries, impedance_curves, steady_state_wave_response,
};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::cli::OutputFormat;
use crate::config::Job;

/// Result of a computation, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Amplitude-response curves.
    Impedance(ImpedanceCurves),
    /// Wave-response time series.
    Response(ResponseSeries),
}

/// Rendering error.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// JSON serialization failed.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing CSV records failed.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// CSV output was not valid UTF-8.
    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Runs the computation described by `job`.
///
/// # Errors
///
/// Returns the library error for singular conditions when the job's policy
/// does not substitute a sentinel.
pub fn run(job: &Job) -> seakeeping::Result<Report> {
    match job {
        Job::Impedance { modes, sweep } => {
            let _span = info_span!("impedance", points = sweep.len()).entered();
            impedance_curves(modes, sweep).map(Report::Impedance)
        }
        Job::Response {
            wave,
            ship,
            roll,
            grid,
            policy,
        } => {
            let _span = info_span!("response", samples = grid.len()).entered();
            steady_state_wave_response(wave, ship, roll, grid, *policy).map(Report::Response)
        }
    }
}

/// Renders `report` in the requested format.
///
/// # Errors
///
/// Returns [`OutputError`] if encoding fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, OutputError> {
    debug!(?format, "Rendering report");
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => match report {
            Report::Impedance(curves) => impedance_csv(curves),
            Report::Response(series) => response_csv(series),
        },
    }
}

fn legend(label: &str, curve: &ResponseCurve) -> String {
    format!(
        "# {label}: zeta={}, omega_n={} rad/s\n",
        curve.mode.damping_ratio(),
        curve.mode.natural_frequency()
    )
}

fn into_text(out: Vec<u8>) -> Result<String, OutputError> {
    Ok(String::from_utf8(out)?)
}

fn impedance_csv(curves: &ImpedanceCurves) -> Result<String, OutputError> {
    let mut out = [
        legend("heave", &curves.heave),
        legend("roll", &curves.roll),
        legend("roll_doubled_damping", &curves.roll_doubled_damping),
        legend("pitch", &curves.pitch),
    ]
    .concat()
    .into_bytes();
    {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut out);
        writer.write_record(["ratio", "heave", "roll", "roll_doubled_damping", "pitch"])?;
        for (i, ratio) in curves.ratios.ratios().iter().enumerate() {
            writer.write_record([
                ratio.to_string(),
                curves.heave.amplitude[i].to_string(),
                curves.roll.amplitude[i].to_string(),
                curves.roll_doubled_damping.amplitude[i].to_string(),
                curves.pitch.amplitude[i].to_string(),
            ])?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    into_text(out)
}

fn response_csv(series: &ResponseSeries) -> Result<String, OutputError> {
    let mut out = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut out);
        writer.write_record(["time", "heave_m", "roll_deg", "pitch_deg"])?;
        for s in series.samples() {
            writer.write_record([
                s.time.to_string(),
                s.heave.to_string(),
                s.roll.to_string(),
                s.pitch.to_string(),
            ])?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    into_text(out)
}

//! Command-line interface for `seakeeping`.
//!
//! Defines the CLI contract using clap derive macros. Every parameter has a
//! documented default and most can also be set from a `SEAKEEPING_*`
//! environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Response curves from a modal table
//! seakeeping impedance vessel.json
//!
//! # Wave response with the default hull: a = 2 m, β = 45°, T₀ = 10 s, U = 5 m/s
//! seakeeping response
//!
//! # Head seas, 8 s waves, ship at 6 m/s, as JSON
//! seakeeping --format json response 1.5 180 8 6
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Closed-form ship motion tools.
///
/// Computes non-dimensional amplitude-response curves for heave, roll and
/// pitch, or steady-state heave, roll and pitch time series for a ship in a
/// regular wave. Results are written to stdout for plotting elsewhere.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "seakeeping",
    author,
    version,
    about = "Closed-form heave, roll and pitch responses",
    long_about = "Computes oscillator amplitude-response curves and steady-state \
                  regular-wave responses for a ship, writing CSV or JSON to stdout."
)]
pub struct Cli {
    /// Output format
    #[arg(
        long,
        short = 'f',
        value_enum,
        default_value_t = OutputFormat::Csv,
        env = "SEAKEEPING_FORMAT",
        global = true
    )]
    pub format: OutputFormat,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Computation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available computations.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Amplitude-response curves 1/Z over a frequency-ratio sweep
    Impedance(ImpedanceArgs),

    /// Steady-state heave, roll and pitch in a regular wave
    Response(ResponseArgs),
}

/// Arguments for the impedance curves.
#[derive(Args, Debug, Clone)]
pub struct ImpedanceArgs {
    /// JSON table of natural periods and damping ratios per mode
    pub modal_file: PathBuf,

    /// Upper end of the frequency-ratio sweep
    #[arg(long, default_value_t = 3.0, env = "SEAKEEPING_RATIO_MAX")]
    pub ratio_max: f64,

    /// Number of sweep points, both ends included
    #[arg(long, default_value_t = 301, env = "SEAKEEPING_POINTS")]
    pub points: usize,
}

/// Arguments for the wave response.
///
/// Positional parameters follow the order amplitude, heading, period, speed,
/// length, beam, draft.
#[derive(Args, Debug, Clone)]
#[command(allow_negative_numbers = true)]
pub struct ResponseArgs {
    /// Wave amplitude a (m)
    #[arg(default_value_t = 2.0)]
    pub amplitude: f64,

    /// Wave heading β (deg); 0 following seas, 180 head seas
    #[arg(default_value_t = 45.0)]
    pub heading: f64,

    /// Wave period T₀ (s)
    #[arg(default_value_t = 10.0)]
    pub period: f64,

    /// Ship speed U (m/s)
    #[arg(default_value_t = 5.0)]
    pub speed: f64,

    /// Ship length L (m)
    #[arg(default_value_t = 82.8)]
    pub length: f64,

    /// Ship beam B (m)
    #[arg(default_value_t = 19.2)]
    pub beam: f64,

    /// Ship draft T (m)
    #[arg(default_value_t = 6.0)]
    pub draft: f64,

    /// Relative roll damping ζ₄
    #[arg(long, default_value_t = 0.2, env = "SEAKEEPING_ROLL_DAMPING")]
    pub roll_damping: f64,

    /// Natural roll period T₄ (s)
    #[arg(long, default_value_t = 6.0, env = "SEAKEEPING_ROLL_PERIOD")]
    pub roll_period: f64,

    /// Transverse metacentric height GM_T (m)
    #[arg(long, default_value_t = 1.0, env = "SEAKEEPING_GM")]
    pub gm: f64,

    /// Block coefficient Cb
    #[arg(long, default_value_t = 0.65, env = "SEAKEEPING_BLOCK_COEFFICIENT")]
    pub block_coefficient: f64,

    /// Time step (s)
    #[arg(long, default_value_t = 0.1, env = "SEAKEEPING_STEP")]
    pub step: f64,

    /// Time horizon (s)
    #[arg(long, default_value_t = 20.0, env = "SEAKEEPING_HORIZON")]
    pub horizon: f64,

    /// Write NaN series instead of failing on singular conditions
    #[arg(long)]
    pub sentinel: bool,
}

/// Output formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated columns with a commented legend
    #[default]
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Log level for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only show warnings and errors
    Warn,
    /// Show info messages
    Info,
    /// Show debug messages
    Debug,
    /// Show all messages including trace
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

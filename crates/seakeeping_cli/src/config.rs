//! Runtime configuration for `seakeeping`.
//!
//! [`Config`] is the validated form of the command line: every number has
//! been turned into the library's value objects, so running a job can only
//! fail on singular physics, never on bad input.

use std::fs;
use std::path::{Path, PathBuf};

use seakeeping::{
    FrequencySweep, ModalSet, ModalTable, RollHydrodynamics, ShipGeometry, SingularPolicy, TimeGrid,
    WaveInput,
};
use tracing::info;

use crate::cli::{Cli, Command, ImpedanceArgs, OutputFormat, ResponseArgs};

/// A fully validated computation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    /// Amplitude-response curves.
    Impedance {
        /// Heave, roll and pitch modal parameters.
        modes: ModalSet,
        /// Frequency ratios to evaluate.
        sweep: FrequencySweep,
    },
    /// Regular-wave time series.
    Response {
        /// Incident wave and ship speed.
        wave: WaveInput,
        /// Hull dimensions.
        ship: ShipGeometry,
        /// Roll hydrodynamics.
        roll: RollHydrodynamics,
        /// Sampling grid.
        grid: TimeGrid,
        /// Singular-condition handling.
        policy: SingularPolicy,
    },
}

/// Runtime configuration resolved from the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// What to compute.
    pub job: Job,
    /// Output format.
    pub format: OutputFormat,
}

impl Config {
    /// Create config from CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the modal table cannot be read or parsed,
    /// or if any parameter is outside its physical domain.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let job = match &cli.command {
            Command::Impedance(args) => impedance_job(args)?,
            Command::Response(args) => response_job(args)?,
        };
        Ok(Self {
            job,
            format: cli.format,
        })
    }
}

fn impedance_job(args: &ImpedanceArgs) -> Result<Job, ConfigError> {
    let table = load_modal_table(&args.modal_file)?;
    let modes = ModalSet::from_provider(&table)?;
    let sweep = FrequencySweep::linear(0.0, args.ratio_max, args.points)?;
    info!(
        path = %args.modal_file.display(),
        points = sweep.len(),
        "Loaded modal table"
    );
    Ok(Job::Impedance { modes, sweep })
}

fn response_job(args: &ResponseArgs) -> Result<Job, ConfigError> {
    let wave =
        WaveInput::with_heading_degrees(args.amplitude, args.heading, args.period, args.speed)?;
    let ship = ShipGeometry::new(args.length, args.beam, args.draft)?;
    let roll = RollHydrodynamics::new(
        args.roll_damping,
        args.roll_period,
        args.gm,
        args.block_coefficient,
    )?;
    let grid = TimeGrid::new(args.step, args.horizon)?;
    let policy = if args.sentinel {
        SingularPolicy::Sentinel
    } else {
        SingularPolicy::Fail
    };
    Ok(Job::Response {
        wave,
        ship,
        roll,
        grid,
        policy,
    })
}

/// Reads a JSON modal table from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::ModalFileRead`] or [`ConfigError::ModalFileParse`].
pub fn load_modal_table(path: &Path) -> Result<ModalTable, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::ModalFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::ModalFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Modal table could not be read.
    #[error("cannot read modal table {}: {source}", path.display())]
    ModalFileRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Modal table is not valid JSON of the expected shape.
    #[error("invalid modal table {}: {source}", path.display())]
    ModalFileParse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// A parameter is outside its physical domain.
    #[error(transparent)]
    Parameter(#[from] seakeeping::Error),
}

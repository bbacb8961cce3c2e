#![forbid(unsafe_code)]

//! # Seakeeping
//!
//! Closed-form heave, roll and pitch responses on the command line.
//!
//! ## Usage
//!
//! ```bash
//! seakeeping impedance vessel.json          # Response curves as CSV
//! seakeeping response                       # 45° example wave response
//! seakeeping -f json response 1 180 8 6     # Head seas as JSON
//! ```

use anyhow::Context;
use seakeeping_cli::cli::Cli;
use seakeeping_cli::config::Config;
use seakeeping_cli::{init_logging, output};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_level())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let config = Config::from_cli(&cli)?;
    let report = output::run(&config.job).context("computation failed")?;
    let text = output::render(&report, config.format)?;

    print!("{text}");
    Ok(())
}

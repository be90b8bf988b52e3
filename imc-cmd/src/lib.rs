//! Command implementations for the campaign CLI.
//!
//! Provides subcommands for exporting the channel-performance report and
//! dumping generated daily series, both built from the same reference
//! scenario as the dashboard.

use clap::Subcommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

pub mod report;
pub mod series;

#[derive(Subcommand)]
pub enum Command {
    /// Export the channel-performance report CSV
    ExportReport {
        /// Output path; defaults to campaign-report.csv in the working directory
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// RNG seed for reproducible generated series
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Dump the generated campaign-wide daily totals as CSV
    DumpSeries {
        /// Output path for the daily totals CSV
        #[arg(short = 'o', long)]
        output: String,

        /// RNG seed for reproducible generated series
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::ExportReport { output, seed } => report::run_export(output.as_deref(), seed),
        Command::DumpSeries { output, seed } => series::run_dump(&output, seed),
    }
}

/// Seeded RNG for reproducible output, or a wall-clock seed when no seed
/// is given.
pub(crate) fn rng_for(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::debug!("rng seed: {seed}");
    StdRng::seed_from_u64(seed)
}

//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use patient_loader::INSTRUCTIONS_FILE_NAME;

use crate::report::ReportFormat;

/// Replays a patient instruction file and lists the resulting patients.
#[derive(Debug, Clone, Parser)]
#[command(name = "patient-records", version, about)]
pub struct Config {
    /// Instruction file, or a directory containing `instructions.txt`.
    #[arg(env = "PATIENT_INSTRUCTIONS_PATH", default_value = INSTRUCTIONS_FILE_NAME)]
    pub path: PathBuf,

    /// Output format of the patient listing.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Parse instruction lines in parallel.
    #[cfg(feature = "parallel")]
    #[arg(long)]
    pub parallel: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Default log filter for this configuration.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

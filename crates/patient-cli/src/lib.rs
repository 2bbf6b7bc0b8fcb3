//! # patient-cli
//!
//! Command-line driver for replaying patient instruction files.
//!
//! The `patient-records` binary locates an instruction file, replays it into
//! a [`Registry`] and prints one line per remaining patient:
//!
//! ```text
//! Name: John Doe, Id: 1, Exam Count: 0
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod report;

use std::io::Write;

use patient_loader::{locate_instructions, LoadResult, Registry, ReplayStats};

pub use config::Config;
pub use report::{write_report, ReportFormat};

/// Replays the configured instruction file into a new registry.
///
/// Fails only if the file cannot be located or read, in which case nothing
/// has been applied.
pub fn load_registry(config: &Config) -> LoadResult<(Registry, ReplayStats)> {
    let path = locate_instructions(&config.path)?;
    tracing::info!("Loading instructions from: {}", path.display());

    let mut registry = Registry::new();

    #[cfg(feature = "parallel")]
    let stats = if config.parallel {
        registry.load_instructions_parallel(&path)?
    } else {
        registry.load_instructions(&path)?
    };
    #[cfg(not(feature = "parallel"))]
    let stats = registry.load_instructions(&path)?;

    tracing::info!(
        "Replayed {} lines: {} applied, {} ignored, {} skipped, {} blank ({} ms)",
        stats.total_lines,
        stats.applied,
        stats.ignored,
        stats.skipped_lines,
        stats.blank_lines,
        stats.elapsed_ms
    );

    Ok((registry, stats))
}

/// Loads the configured file and writes the final listing to `writer`.
pub fn run<W: Write>(config: &Config, writer: W) -> Result<ReplayStats, Box<dyn std::error::Error>> {
    let (registry, stats) = load_registry(config)?;
    tracing::info!("Registry holds {} patients", registry.patient_count());

    write_report(writer, &registry.snapshot(), config.format)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(path: std::path::PathBuf, format: ReportFormat) -> Config {
        Config {
            path,
            format,
            #[cfg(feature = "parallel")]
            parallel: false,
            verbose: false,
        }
    }

    #[test]
    fn test_run_writes_listing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("instructions.txt"),
            "ADD PATIENT 1 John Doe\nADD EXAM 1 101\nADD PATIENT 2 Jane Doe\nDEL EXAM 101\n",
        )
        .unwrap();

        let mut out = Vec::new();
        let stats = run(&config_for(dir.path().to_path_buf(), ReportFormat::Text), &mut out).unwrap();

        assert_eq!(stats.applied, 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name: John Doe, Id: 1, Exam Count: 0\nName: Jane Doe, Id: 2, Exam Count: 0\n"
        );
    }

    #[test]
    fn test_run_missing_file_writes_nothing() {
        let dir = TempDir::new().unwrap();

        let mut out = Vec::new();
        let result = run(
            &config_for(dir.path().join("missing.txt"), ReportFormat::Text),
            &mut out,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
        assert!(out.is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_run_parallel() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("instructions.txt");
        fs::write(&file, "ADD PATIENT 3 Ann\nADD EXAM 3 9\nADD EXAM 3 9\n").unwrap();

        let mut config = config_for(file, ReportFormat::Text);
        config.parallel = true;

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Name: Ann, Id: 3, Exam Count: 1\n");
    }
}

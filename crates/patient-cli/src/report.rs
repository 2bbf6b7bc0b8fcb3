//! Final patient listing.

use std::io::{self, Write};

use clap::ValueEnum;
use patient_types::PatientSummary;

/// Output format of the final listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One `Name: <name>, Id: <id>, Exam Count: <count>` line per patient.
    #[default]
    Text,
    /// A JSON array of patient summaries.
    Json,
}

/// Writes the snapshot to `writer` in the given format.
///
/// The text format writes nothing for an empty snapshot.
pub fn write_report<W: Write>(
    mut writer: W,
    snapshot: &[PatientSummary],
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => {
            for summary in snapshot {
                writeln!(writer, "{}", summary)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, snapshot)?;
            writeln!(writer)?;
        }
    }
    writer.flush()
}

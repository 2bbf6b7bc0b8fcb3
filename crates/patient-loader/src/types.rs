//! Loader-specific error and statistics types.

use thiserror::Error;

/// Errors that make an instruction file unusable.
///
/// These are fatal for a run: nothing is applied to the registry.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error reading the instruction file.
    #[error("IO error reading instruction file: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory searched but no instruction file inside it.
    #[error("No instruction file found in {directory}")]
    InstructionsNotFound {
        /// The directory that was searched.
        directory: String,
    },
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Reasons a line is not an instruction.
///
/// Line errors are never fatal; the line is skipped and replay continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Empty or whitespace-only line.
    #[error("blank line")]
    Blank,

    /// Not enough tokens for the instruction form.
    #[error("too few tokens: expected at least {expected}, found {found}")]
    TooFewTokens {
        /// Minimum token count for the instruction.
        expected: usize,
        /// Token count on the line.
        found: usize,
    },

    /// First token is not `ADD` or `DEL`.
    #[error("unknown operation: {keyword}")]
    UnknownOperation {
        /// The unrecognized keyword.
        keyword: String,
    },

    /// Second token is not `PATIENT` or `EXAM`.
    #[error("unknown record type: {keyword}")]
    UnknownRecordType {
        /// The unrecognized keyword.
        keyword: String,
    },

    /// An id token is not a base-10 integer.
    #[error("invalid integer value: {value}")]
    InvalidInteger {
        /// The invalid token.
        value: String,
    },
}

/// Statistics from replaying instruction lines into a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Total lines read.
    pub total_lines: usize,
    /// Empty or whitespace-only lines.
    pub blank_lines: usize,
    /// Non-blank lines that were not instructions.
    pub skipped_lines: usize,
    /// Lines parsed into instructions.
    pub instructions: usize,
    /// Instructions that changed the registry.
    pub applied: usize,
    /// Instructions that were no-ops (duplicate adds, unknown targets).
    pub ignored: usize,
    /// Time taken to replay in milliseconds.
    pub elapsed_ms: u64,
}

impl ReplayStats {
    /// Returns the percentage of parsed instructions that changed the registry.
    pub fn apply_rate(&self) -> f64 {
        if self.instructions == 0 {
            0.0
        } else {
            (self.applied as f64 / self.instructions as f64) * 100.0
        }
    }

    /// Records the outcome of one line.
    pub(crate) fn record(&mut self, outcome: LineOutcome) {
        self.total_lines += 1;
        match outcome {
            LineOutcome::Blank => self.blank_lines += 1,
            LineOutcome::Skipped => self.skipped_lines += 1,
            LineOutcome::Applied => {
                self.instructions += 1;
                self.applied += 1;
            }
            LineOutcome::Ignored => {
                self.instructions += 1;
                self.ignored += 1;
            }
        }
    }
}

/// What happened to a single line during replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineOutcome {
    Blank,
    Skipped,
    Applied,
    Ignored,
}

//! # patient-loader
//!
//! Instruction parser and in-memory registry for patient and exam records.
//!
//! An instruction file is a sequence of lines such as `ADD PATIENT 1 John Doe`
//! or `DEL EXAM 101`. Each line is parsed into an
//! [`Instruction`](patient_types::Instruction) and applied to a [`Registry`]
//! in file order. Malformed lines are skipped; only a missing or unreadable
//! file is an error.
//!
//! ## Features
//!
//! - `parallel` (default): Enables [`Registry::load_instructions_parallel`],
//!   which parses lines with rayon before applying them serially.
//!
//! ## Usage
//!
//! ```no_run
//! use patient_loader::{locate_instructions, Registry};
//!
//! # fn main() -> patient_loader::LoadResult<()> {
//! let path = locate_instructions("instructions.txt")?;
//! let mut registry = Registry::new();
//! let stats = registry.load_instructions(&path)?;
//!
//! println!("{} of {} lines applied", stats.applied, stats.total_lines);
//! for summary in registry.snapshot() {
//!     println!("{}", summary);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod loader;
pub mod parser;
pub mod registry;
pub mod types;

pub use loader::{locate_instructions, read_instruction_lines, INSTRUCTIONS_FILE_NAME};
pub use parser::{parse_line, try_parse_line};
pub use registry::Registry;
pub use types::{LineError, LoadError, LoadResult, ReplayStats};

// Re-export patient-types for convenience
pub use patient_types;

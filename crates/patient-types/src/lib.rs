//! # patient-types
//!
//! Type definitions for patient and exam instruction records.
//!
//! This crate provides the plain data types shared by the loader and the
//! command-line driver: identifiers, the [`Patient`] record, parsed
//! [`Instruction`] values and the [`PatientSummary`] rows of a registry
//! snapshot.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use patient_types::{Instruction, Operation, Patient, PatientSummary, RecordType};
//!
//! let instruction = Instruction::AddPatient { id: 1, name: "John Doe".to_string() };
//! assert_eq!(instruction.operation(), Operation::Add);
//! assert_eq!(instruction.record_type(), RecordType::Patient);
//!
//! let mut patient = Patient::new(1, "John Doe");
//! patient.insert_exam(101);
//!
//! let summary = PatientSummary::from(&patient);
//! assert_eq!(summary.to_string(), "Name: John Doe, Id: 1, Exam Count: 1");
//! ```

#![warn(missing_docs)]

mod enums;
mod ids;
mod instruction;
mod patient;
mod summary;

// Re-export all public types at crate root
pub use enums::{Operation, RecordType};
pub use ids::{is_valid_patient_id, ExamId, PatientId};
pub use instruction::Instruction;
pub use patient::Patient;
pub use summary::PatientSummary;

//! Parsed instruction type.

use crate::{ExamId, Operation, PatientId, RecordType};

/// One directive parsed from an instruction line.
///
/// Instructions are produced by the loader's parser and consumed once by the
/// registry.
///
/// # Examples
///
/// ```
/// use patient_types::{Instruction, Operation, RecordType};
///
/// let instruction = Instruction::AddExam { patient_id: 1, exam_id: 101 };
/// assert_eq!(instruction.operation(), Operation::Add);
/// assert_eq!(instruction.record_type(), RecordType::Exam);
/// assert_eq!(instruction.to_string(), "ADD EXAM 1 101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// `ADD PATIENT <id> <name...>`
    AddPatient {
        /// Patient id.
        id: PatientId,
        /// Patient name, words joined by single spaces.
        name: String,
    },
    /// `ADD EXAM <patient_id> <exam_id>`
    AddExam {
        /// Patient that receives the exam.
        patient_id: PatientId,
        /// Exam id.
        exam_id: ExamId,
    },
    /// `DEL PATIENT <id>`
    DeletePatient {
        /// Patient id.
        id: PatientId,
    },
    /// `DEL EXAM <exam_id>`
    DeleteExam {
        /// Exam id, removed from every patient holding it.
        exam_id: ExamId,
    },
}

impl Instruction {
    /// Returns the operation of this instruction.
    pub fn operation(&self) -> Operation {
        match self {
            Self::AddPatient { .. } | Self::AddExam { .. } => Operation::Add,
            Self::DeletePatient { .. } | Self::DeleteExam { .. } => Operation::Delete,
        }
    }

    /// Returns the record type this instruction targets.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::AddPatient { .. } | Self::DeletePatient { .. } => RecordType::Patient,
            Self::AddExam { .. } | Self::DeleteExam { .. } => RecordType::Exam,
        }
    }
}

/// Formats the instruction in its canonical line form.
impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.operation(), self.record_type())?;
        match self {
            Self::AddPatient { id, name } => write!(f, " {} {}", id, name),
            Self::AddExam {
                patient_id,
                exam_id,
            } => write!(f, " {} {}", patient_id, exam_id),
            Self::DeletePatient { id } => write!(f, " {}", id),
            Self::DeleteExam { exam_id } => write!(f, " {}", exam_id),
        }
    }
}

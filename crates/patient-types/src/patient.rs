//! Patient record type.
//!
//! A patient's identity and name are fixed at creation; only its exam set
//! changes afterwards.

use std::collections::BTreeSet;

use crate::{ExamId, PatientId};

/// A patient held by the registry.
///
/// # Examples
///
/// ```
/// use patient_types::Patient;
///
/// let mut patient = Patient::new(1, "John Doe");
/// assert!(patient.insert_exam(101));
/// assert!(!patient.insert_exam(101));
/// assert_eq!(patient.exam_count(), 1);
/// ```
///
/// Serialize-only; construct with [`Patient::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Patient {
    id: PatientId,
    name: String,
    exams: BTreeSet<ExamId>,
}

impl Patient {
    /// Creates a patient with an empty exam set.
    pub fn new(id: PatientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            exams: BTreeSet::new(),
        }
    }

    /// Returns the patient id.
    pub fn id(&self) -> PatientId {
        self.id
    }

    /// Returns the patient name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the exam ids held by this patient, in ascending order.
    pub fn exams(&self) -> &BTreeSet<ExamId> {
        &self.exams
    }

    /// Returns the number of exams held by this patient.
    pub fn exam_count(&self) -> usize {
        self.exams.len()
    }

    /// Returns true if this patient holds `exam_id`.
    pub fn has_exam(&self, exam_id: ExamId) -> bool {
        self.exams.contains(&exam_id)
    }

    /// Adds an exam. Returns false if the exam was already present.
    pub fn insert_exam(&mut self, exam_id: ExamId) -> bool {
        self.exams.insert(exam_id)
    }

    /// Removes an exam. Returns false if the exam was not present.
    pub fn remove_exam(&mut self, exam_id: ExamId) -> bool {
        self.exams.remove(&exam_id)
    }
}

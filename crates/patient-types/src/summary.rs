//! Snapshot row type.

use crate::{Patient, PatientId};

/// A read-only summary of one patient, as reported at the end of a run.
///
/// The `Display` form is the report line.
///
/// ```
/// use patient_types::PatientSummary;
///
/// let summary = PatientSummary { id: 1, name: "John Doe".into(), exam_count: 2 };
/// assert_eq!(summary.to_string(), "Name: John Doe, Id: 1, Exam Count: 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientSummary {
    /// Patient id.
    pub id: PatientId,
    /// Patient name.
    pub name: String,
    /// Number of exams held by the patient.
    pub exam_count: usize,
}

impl From<&Patient> for PatientSummary {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id(),
            name: patient.name().to_string(),
            exam_count: patient.exam_count(),
        }
    }
}

impl std::fmt::Display for PatientSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Id: {}, Exam Count: {}",
            self.name, self.id, self.exam_count
        )
    }
}

//! Patient and exam identifier types.
//!
//! Identifiers are signed so that instruction lines such as `ADD PATIENT -1 X`
//! still parse; the registry is responsible for rejecting non-positive ids.

/// A patient identifier.
///
/// # Examples
///
/// ```
/// use patient_types::PatientId;
///
/// let id: PatientId = 1;
/// assert!(patient_types::is_valid_patient_id(id));
/// ```
pub type PatientId = i64;

/// An exam identifier.
///
/// Exam ids are shared identifiers: the same id may be held by several
/// patients at once.
pub type ExamId = i64;

/// Returns true if `id` may identify a patient (ids start at 1).
pub fn is_valid_patient_id(id: PatientId) -> bool {
    id >= 1
}

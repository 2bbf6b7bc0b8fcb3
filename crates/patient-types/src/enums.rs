//! Instruction keyword enumerations.
//!
//! Keywords are matched exactly, including case: `add` is not an operation.

/// The operation keyword of an instruction line (`ADD` or `DEL`).
///
/// # Examples
///
/// ```
/// use patient_types::Operation;
///
/// assert_eq!(Operation::from_keyword("ADD"), Some(Operation::Add));
/// assert_eq!(Operation::from_keyword("add"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Create a record.
    Add,
    /// Remove a record.
    Delete,
}

impl Operation {
    /// Keyword for [`Operation::Add`].
    pub const ADD_KEYWORD: &'static str = "ADD";
    /// Keyword for [`Operation::Delete`].
    pub const DELETE_KEYWORD: &'static str = "DEL";

    /// Creates an Operation from its keyword.
    ///
    /// Returns `None` if the keyword is not recognized.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            Self::ADD_KEYWORD => Some(Self::Add),
            Self::DELETE_KEYWORD => Some(Self::Delete),
            _ => None,
        }
    }

    /// Returns the keyword for this operation.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Add => Self::ADD_KEYWORD,
            Self::Delete => Self::DELETE_KEYWORD,
        }
    }
}

/// The record type keyword of an instruction line (`PATIENT` or `EXAM`).
///
/// # Examples
///
/// ```
/// use patient_types::RecordType;
///
/// assert_eq!(RecordType::from_keyword("EXAM"), Some(RecordType::Exam));
/// assert_eq!(RecordType::from_keyword("Exam"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordType {
    /// A patient record.
    Patient,
    /// An exam associated with a patient.
    Exam,
}

impl RecordType {
    /// Keyword for [`RecordType::Patient`].
    pub const PATIENT_KEYWORD: &'static str = "PATIENT";
    /// Keyword for [`RecordType::Exam`].
    pub const EXAM_KEYWORD: &'static str = "EXAM";

    /// Creates a RecordType from its keyword.
    ///
    /// Returns `None` if the keyword is not recognized.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            Self::PATIENT_KEYWORD => Some(Self::Patient),
            Self::EXAM_KEYWORD => Some(Self::Exam),
            _ => None,
        }
    }

    /// Returns the keyword for this record type.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Patient => Self::PATIENT_KEYWORD,
            Self::Exam => Self::EXAM_KEYWORD,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

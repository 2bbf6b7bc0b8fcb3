//! Instruction line parser.
//!
//! Converts one line of text into a typed [`Instruction`]. Lines that are not
//! instructions are rejected with a [`LineError`] describing why; callers that
//! only need the instruction use [`parse_line`].
//!
//! Grammar (tokens separated by runs of spaces; tabs are not separators):
//!
//! ```text
//! ADD PATIENT <id> <name words...>
//! ADD EXAM    <patient_id> <exam_id>
//! DEL PATIENT <id>
//! DEL EXAM    <exam_id>
//! ```

use patient_types::{Instruction, Operation, RecordType};

use crate::types::LineError;

/// Minimum token count of an `ADD` line.
const ADD_MIN_TOKENS: usize = 4;
/// Minimum token count of a `DEL` line.
const DELETE_MIN_TOKENS: usize = 3;

/// Parses one line, returning `None` if it is not an instruction.
///
/// # Examples
///
/// ```
/// use patient_loader::parse_line;
/// use patient_types::Instruction;
///
/// assert_eq!(
///     parse_line("ADD PATIENT 1 John Doe"),
///     Some(Instruction::AddPatient { id: 1, name: "John Doe".to_string() })
/// );
/// assert_eq!(parse_line("add patient 1 John"), None);
/// ```
pub fn parse_line(line: &str) -> Option<Instruction> {
    try_parse_line(line).ok()
}

/// Parses one line, keeping the reason it was rejected.
pub fn try_parse_line(line: &str) -> Result<Instruction, LineError> {
    let tokens: Vec<&str> = line.split(' ').filter(|token| !token.is_empty()).collect();

    match tokens.len() {
        0 => return Err(LineError::Blank),
        1 => {
            return Err(LineError::TooFewTokens {
                expected: 2,
                found: 1,
            })
        }
        _ => {}
    }

    let operation =
        Operation::from_keyword(tokens[0]).ok_or_else(|| LineError::UnknownOperation {
            keyword: tokens[0].to_string(),
        })?;
    let record_type =
        RecordType::from_keyword(tokens[1]).ok_or_else(|| LineError::UnknownRecordType {
            keyword: tokens[1].to_string(),
        })?;

    let min_tokens = match operation {
        Operation::Add => ADD_MIN_TOKENS,
        Operation::Delete => DELETE_MIN_TOKENS,
    };
    if tokens.len() < min_tokens {
        return Err(LineError::TooFewTokens {
            expected: min_tokens,
            found: tokens.len(),
        });
    }

    let instruction = match (operation, record_type) {
        (Operation::Add, RecordType::Patient) => Instruction::AddPatient {
            id: parse::integer(tokens[2])?,
            name: tokens[3..].join(" "),
        },
        (Operation::Add, RecordType::Exam) => Instruction::AddExam {
            patient_id: parse::integer(tokens[2])?,
            exam_id: parse::integer(tokens[3])?,
        },
        (Operation::Delete, RecordType::Patient) => Instruction::DeletePatient {
            id: parse::integer(tokens[2])?,
        },
        (Operation::Delete, RecordType::Exam) => Instruction::DeleteExam {
            exam_id: parse::integer(tokens[2])?,
        },
    };

    Ok(instruction)
}

/// Helper functions for parsing instruction tokens.
pub mod parse {
    use crate::types::LineError;

    /// Parses a base-10 integer token with an optional sign.
    pub fn integer<T: std::str::FromStr>(value: &str) -> Result<T, LineError> {
        value.parse::<T>().map_err(|_| LineError::InvalidInteger {
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_patient() {
        assert_eq!(
            parse_line("ADD PATIENT 1 John Doe"),
            Some(Instruction::AddPatient {
                id: 1,
                name: "John Doe".to_string()
            })
        );
    }

    #[test]
    fn test_parse_add_patient_collapses_whitespace_in_name() {
        assert_eq!(
            parse_line("  ADD   PATIENT  2   Mary   Ann  Smith  "),
            Some(Instruction::AddPatient {
                id: 2,
                name: "Mary Ann Smith".to_string()
            })
        );
    }

    #[test]
    fn test_parse_add_patient_negative_id() {
        assert_eq!(
            parse_line("ADD PATIENT -1 X"),
            Some(Instruction::AddPatient {
                id: -1,
                name: "X".to_string()
            })
        );
    }

    #[test]
    fn test_parse_add_exam() {
        assert_eq!(
            parse_line("ADD EXAM 1 101"),
            Some(Instruction::AddExam {
                patient_id: 1,
                exam_id: 101
            })
        );
    }

    #[test]
    fn test_parse_delete_forms() {
        assert_eq!(
            parse_line("DEL PATIENT 4"),
            Some(Instruction::DeletePatient { id: 4 })
        );
        assert_eq!(
            parse_line("DEL EXAM 101"),
            Some(Instruction::DeleteExam { exam_id: 101 })
        );
        assert_eq!(
            parse_line("DEL EXAM 101 trailing words"),
            Some(Instruction::DeleteExam { exam_id: 101 })
        );
    }

    #[test]
    fn test_rejects_unknown_keywords() {
        assert_eq!(
            try_parse_line("FOO PATIENT 1 Name"),
            Err(LineError::UnknownOperation {
                keyword: "FOO".to_string()
            })
        );
        assert_eq!(
            try_parse_line("add PATIENT 1 Name"),
            Err(LineError::UnknownOperation {
                keyword: "add".to_string()
            })
        );
        assert_eq!(
            try_parse_line("ADD DOCTOR 1 Name"),
            Err(LineError::UnknownRecordType {
                keyword: "DOCTOR".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_too_few_tokens() {
        assert_eq!(try_parse_line(""), Err(LineError::Blank));
        assert_eq!(try_parse_line("   "), Err(LineError::Blank));
        assert_eq!(
            try_parse_line("ADD"),
            Err(LineError::TooFewTokens {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            try_parse_line("ADD EXAM 1"),
            Err(LineError::TooFewTokens {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            try_parse_line("ADD PATIENT 1"),
            Err(LineError::TooFewTokens {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            try_parse_line("DEL PATIENT"),
            Err(LineError::TooFewTokens {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_rejects_non_numeric_ids() {
        assert_eq!(
            try_parse_line("ADD PATIENT abc Name"),
            Err(LineError::InvalidInteger {
                value: "abc".to_string()
            })
        );
        assert_eq!(parse_line("ADD EXAM 1 x101"), None);
        assert_eq!(parse_line("DEL EXAM 1.5"), None);
        assert_eq!(parse_line("DEL PATIENT 99999999999999999999"), None);
    }

    #[test]
    fn test_tab_is_not_a_separator() {
        assert_eq!(parse_line("ADD\tPATIENT 1 Bob"), None);
        assert_eq!(
            try_parse_line("\t"),
            Err(LineError::TooFewTokens {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_name_keeps_non_space_whitespace() {
        assert_eq!(
            parse_line("ADD PATIENT 2 John\tDoe"),
            Some(Instruction::AddPatient {
                id: 2,
                name: "John\tDoe".to_string()
            })
        );
        assert_eq!(
            parse_line("ADD PATIENT 3 Jos\u{a0}Doe  Smith"),
            Some(Instruction::AddPatient {
                id: 3,
                name: "Jos\u{a0}Doe Smith".to_string()
            })
        );
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse::integer::<i64>("42").unwrap(), 42);
        assert_eq!(parse::integer::<i64>("-7").unwrap(), -7);
        assert!(parse::integer::<i64>("").is_err());
        assert!(parse::integer::<i64>("12a").is_err());
    }
}

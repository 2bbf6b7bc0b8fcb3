//! In-memory patient registry.
//!
//! Holds the current set of patients and their exams, and applies parsed
//! instructions to it in arrival order.
//!
//! ## Application rules
//!
//! Every mutation is total: instructions that cannot apply are silently
//! ignored so a bad line never stops a replay.
//!
//! - `AddPatient` ignores non-positive ids and ids already present (first
//!   writer wins, the name is never updated).
//! - `AddExam` ignores unknown patients and exams the patient already holds.
//! - `DeletePatient` drops the patient with all of its exams.
//! - `DeleteExam` removes the exam id from *every* patient holding it; exam
//!   ids are shared, not scoped to one patient.
//!
//! ```
//! use patient_loader::Registry;
//!
//! let mut registry = Registry::new();
//! registry.replay_lines(["ADD PATIENT 1 John Doe", "ADD EXAM 1 101"]);
//!
//! let snapshot = registry.snapshot();
//! assert_eq!(snapshot[0].to_string(), "Name: John Doe, Id: 1, Exam Count: 1");
//! ```

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use patient_types::{is_valid_patient_id, ExamId, Instruction, Patient, PatientId, PatientSummary};

use crate::loader::read_instruction_lines;
use crate::parser::try_parse_line;
use crate::types::{LineError, LineOutcome, LoadResult, ReplayStats};

/// In-memory store of patients keyed by id.
///
/// The registry exclusively owns its patients; callers only get shared
/// references or [`PatientSummary`] values.
#[derive(Default)]
pub struct Registry {
    /// Patients indexed by id.
    patients: HashMap<PatientId, Patient>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("patients", &self.patients.len())
            .field("exams", &self.exam_count())
            .finish()
    }
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with pre-allocated capacity.
    pub fn with_capacity(patient_count: usize) -> Self {
        Self {
            patients: HashMap::with_capacity(patient_count),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // MUTATIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Applies one instruction. Returns true if the registry changed.
    pub fn apply(&mut self, instruction: &Instruction) -> bool {
        match instruction {
            Instruction::AddPatient { id, name } => self.apply_add_patient(*id, name),
            Instruction::AddExam {
                patient_id,
                exam_id,
            } => self.apply_add_exam(*patient_id, *exam_id),
            Instruction::DeletePatient { id } => self.apply_delete_patient(*id),
            Instruction::DeleteExam { exam_id } => self.apply_delete_exam(*exam_id),
        }
    }

    /// Adds a patient unless the id is non-positive or already taken.
    pub fn apply_add_patient(&mut self, id: PatientId, name: &str) -> bool {
        if !is_valid_patient_id(id) {
            tracing::trace!(id, "ignoring patient with non-positive id");
            return false;
        }

        if self.patients.contains_key(&id) {
            tracing::trace!(id, "patient already exists");
            return false;
        }

        self.patients.insert(id, Patient::new(id, name));
        true
    }

    /// Adds an exam to an existing patient.
    pub fn apply_add_exam(&mut self, patient_id: PatientId, exam_id: ExamId) -> bool {
        let Some(patient) = self.patients.get_mut(&patient_id) else {
            tracing::trace!(patient_id, exam_id, "exam for unknown patient");
            return false;
        };

        patient.insert_exam(exam_id)
    }

    /// Removes a patient and all of its exams.
    pub fn apply_delete_patient(&mut self, id: PatientId) -> bool {
        self.patients.remove(&id).is_some()
    }

    /// Removes an exam from every patient that holds it.
    pub fn apply_delete_exam(&mut self, exam_id: ExamId) -> bool {
        let mut removed = 0;
        for patient in self.patients.values_mut() {
            if patient.remove_exam(exam_id) {
                removed += 1;
            }
        }

        if removed > 1 {
            tracing::trace!(exam_id, patients = removed, "exam removed from several patients");
        }
        removed > 0
    }

    // ═══════════════════════════════════════════════════════════════════════
    // REPLAY
    // ═══════════════════════════════════════════════════════════════════════

    /// Parses and applies each line in order.
    pub fn replay_lines<I>(&mut self, lines: I) -> ReplayStats
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let start = Instant::now();
        let mut stats = ReplayStats::default();

        for (index, line) in lines.into_iter().enumerate() {
            let outcome = self.apply_parsed(index + 1, try_parse_line(line.as_ref()));
            stats.record(outcome);
        }

        stats.elapsed_ms = start.elapsed().as_millis() as u64;
        stats
    }

    /// Reads every line from `reader`, then replays them.
    ///
    /// If reading fails the registry is left untouched.
    pub fn replay_reader<R: BufRead>(&mut self, reader: R) -> LoadResult<ReplayStats> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(self.replay_lines(lines))
    }

    /// Loads and replays an instruction file.
    ///
    /// The whole file is read before any instruction is applied, so a read
    /// failure leaves the registry untouched.
    pub fn load_instructions<P: AsRef<Path>>(&mut self, path: P) -> LoadResult<ReplayStats> {
        let lines = read_instruction_lines(path)?;
        Ok(self.replay_lines(lines))
    }

    /// Loads an instruction file, parsing lines in parallel.
    ///
    /// Parsing is spread over rayon's pool; application is still serial and
    /// in line order, so the result is identical to [`Self::load_instructions`].
    #[cfg(feature = "parallel")]
    pub fn load_instructions_parallel<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> LoadResult<ReplayStats> {
        let start = Instant::now();
        let lines = read_instruction_lines(path)?;

        let parsed: Vec<Result<Instruction, LineError>> =
            lines.par_iter().map(|line| try_parse_line(line)).collect();

        let mut stats = ReplayStats::default();
        for (index, result) in parsed.into_iter().enumerate() {
            let outcome = self.apply_parsed(index + 1, result);
            stats.record(outcome);
        }

        stats.elapsed_ms = start.elapsed().as_millis() as u64;
        Ok(stats)
    }

    fn apply_parsed(
        &mut self,
        line_number: usize,
        parsed: Result<Instruction, LineError>,
    ) -> LineOutcome {
        match parsed {
            Ok(instruction) => {
                if self.apply(&instruction) {
                    LineOutcome::Applied
                } else {
                    LineOutcome::Ignored
                }
            }
            Err(LineError::Blank) => LineOutcome::Blank,
            Err(reason) => {
                tracing::debug!(line = line_number, %reason, "skipping line");
                LineOutcome::Skipped
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns a summary of every patient, in ascending id order.
    pub fn snapshot(&self) -> Vec<PatientSummary> {
        self.patients().map(PatientSummary::from).collect()
    }

    /// Returns a patient by id.
    pub fn get_patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.get(&id)
    }

    /// Returns true if a patient with `id` exists.
    pub fn has_patient(&self, id: PatientId) -> bool {
        self.patients.contains_key(&id)
    }

    /// Returns the number of patients.
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Returns true if the registry holds no patients.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Returns the total number of patient/exam associations.
    pub fn exam_count(&self) -> usize {
        self.patients.values().map(Patient::exam_count).sum()
    }

    /// Returns an iterator over all patients, in ascending id order.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        let mut patients: Vec<&Patient> = self.patients.values().collect();
        patients.sort_unstable_by_key(|patient| patient.id());
        patients.into_iter()
    }

    /// Returns the ids of patients holding `exam_id`, in ascending order.
    pub fn patients_with_exam(&self, exam_id: ExamId) -> Vec<PatientId> {
        self.patients()
            .filter(|patient| patient.has_exam(exam_id))
            .map(Patient::id)
            .collect()
    }
}

//! Instruction file discovery and reading utilities.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::types::{LoadError, LoadResult};

/// Default instruction file name.
pub const INSTRUCTIONS_FILE_NAME: &str = "instructions.txt";

/// Subdirectory searched when the instruction file is bundled as a resource.
const RESOURCES_DIR: &str = "Resources";

/// Locates the instruction file for `path`.
///
/// A file path is returned as-is. For a directory, `instructions.txt` is
/// looked up directly inside it, then inside its `Resources/` subdirectory.
pub fn locate_instructions<P: AsRef<Path>>(path: P) -> LoadResult<PathBuf> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }

    let candidates = [
        path.join(INSTRUCTIONS_FILE_NAME),
        path.join(RESOURCES_DIR).join(INSTRUCTIONS_FILE_NAME),
    ];

    candidates
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| LoadError::InstructionsNotFound {
            directory: path.display().to_string(),
        })
}

/// Reads a whole instruction file and splits it into lines.
///
/// Both `\n` and `\r\n` line endings are accepted. Nothing is returned unless
/// the entire file was read successfully.
pub fn read_instruction_lines<P: AsRef<Path>>(path: P) -> LoadResult<Vec<String>> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io(e),
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "read instruction file");

    Ok(contents.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_locate_file_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("custom.txt");
        fs::write(&file, "ADD PATIENT 1 John").unwrap();

        assert_eq!(locate_instructions(&file).unwrap(), file);
    }

    #[test]
    fn test_locate_in_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(INSTRUCTIONS_FILE_NAME);
        fs::write(&file, "").unwrap();

        assert_eq!(locate_instructions(dir.path()).unwrap(), file);
    }

    #[test]
    fn test_locate_in_resources_directory() {
        let dir = TempDir::new().unwrap();
        let resources = dir.path().join("Resources");
        fs::create_dir(&resources).unwrap();
        let file = resources.join(INSTRUCTIONS_FILE_NAME);
        fs::write(&file, "").unwrap();

        assert_eq!(locate_instructions(dir.path()).unwrap(), file);
    }

    #[test]
    fn test_locate_missing() {
        let dir = TempDir::new().unwrap();

        let err = locate_instructions(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));

        let err = locate_instructions(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::InstructionsNotFound { .. }));
    }

    #[test]
    fn test_read_instruction_lines() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(INSTRUCTIONS_FILE_NAME);
        fs::write(&file, "ADD PATIENT 1 John\r\n\nDEL PATIENT 1").unwrap();

        let lines = read_instruction_lines(&file).unwrap();
        assert_eq!(lines, vec!["ADD PATIENT 1 John", "", "DEL PATIENT 1"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_instruction_lines(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(INSTRUCTIONS_FILE_NAME);
        fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_instruction_lines(&file).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}

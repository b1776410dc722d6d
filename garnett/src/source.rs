//! Source loading.
//!
//! Reads input files (or stdin) into memory before they are handed to the
//! lexer. The lexer only ever sees complete UTF-8 strings.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::commands::common::error_messages;
use crate::error::{GarnettError, Result};

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// A source file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name used in output headers: the path as given, or `<stdin>`.
    pub name: String,

    /// Full text of the file.
    pub content: String,
}

impl SourceFile {
    /// Creates a source file from in-memory text.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Loads the file at `path`, or stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self> {
        if path == Path::new(STDIN_PATH) {
            return Self::load_stdin();
        }

        validate_input_file(path)?;
        let bytes = std::fs::read(path)?;
        let content = decode(bytes, path)?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "loaded source");
        Ok(Self::new(path.display().to_string(), content))
    }

    fn load_stdin() -> Result<Self> {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        let content = decode(bytes, Path::new("<stdin>"))?;
        Ok(Self::new("<stdin>", content))
    }
}

/// Validate that an input path exists and is a file.
fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GarnettError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(GarnettError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(())
}

fn decode(bytes: Vec<u8>, path: &Path) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        GarnettError::FileOperation(format!(
            "{} {} ({})",
            error_messages::INPUT_NOT_UTF8,
            path.display(),
            e.utf8_error()
        ))
    })
}

/// Loads every path, stopping at the first failure.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    paths.iter().map(|p| SourceFile::load(p)).collect()
}

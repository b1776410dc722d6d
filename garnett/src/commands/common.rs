//! Common types and utilities for garnett commands.
//!
//! This module provides shared types and message constants used across all
//! command implementations.

use std::path::Path;

use crate::error::{GarnettError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `{type: ..., value: ...}` record per line
    Pretty,
    /// A JSON document
    Json,
    /// One tab-separated `KIND value` pair per line
    Plain,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "pp" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            "plain" | "tsv" => Some(Self::Plain),
            _ => None,
        }
    }

    /// Get the canonical name of this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
            Self::Plain => "plain",
        }
    }

    /// Resolve the format from a command-line flag, falling back to the
    /// configured default.
    pub fn resolve(flag: Option<&str>, configured: &str) -> Result<Self> {
        if let Some(name) = flag {
            return Self::from_name(name).ok_or_else(|| {
                GarnettError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
            });
        }

        Self::from_name(configured).ok_or_else(|| {
            GarnettError::Config(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                configured
            ))
        })
    }
}

// ============================================================================
// Output Writing
// ============================================================================

/// Write rendered output to `path`, or to stdout when no path is given.
///
/// An existing file is only replaced when `force` is set.
pub fn write_output(rendered: &str, path: Option<&Path>, force: bool) -> Result<()> {
    match path {
        Some(path) => {
            if path.exists() && !force {
                return Err(GarnettError::Validation(format!(
                    "{} {}",
                    error_messages::OUTPUT_FILE_EXISTS,
                    path.display()
                )));
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "wrote output");
        },
        None => {
            use std::io::Write;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        },
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when input is not UTF-8 text.
    pub const INPUT_NOT_UTF8: &str = "Input is not valid UTF-8:";

    /// Error when output file already exists.
    pub const OUTPUT_FILE_EXISTS: &str = "Output file already exists (use --force):";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when the job count is zero.
    pub const INVALID_JOBS: &str = "Job count must be at least 1";

    /// Error when the config file to create already exists.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force):";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("pretty"), Some(OutputFormat::Pretty));
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("tsv"), Some(OutputFormat::Plain));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }

    #[test]
    fn test_output_format_name_round_trips() {
        for format in [OutputFormat::Pretty, OutputFormat::Json, OutputFormat::Plain] {
            assert_eq!(OutputFormat::from_name(format.name()), Some(format));
        }
    }

    #[test]
    fn test_resolve_prefers_flag() {
        let format = OutputFormat::resolve(Some("json"), "plain").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_falls_back_to_config() {
        let format = OutputFormat::resolve(None, "plain").unwrap();
        assert_eq!(format, OutputFormat::Plain);
    }

    #[test]
    fn test_resolve_unknown_flag_is_validation_error() {
        let result = OutputFormat::resolve(Some("xml"), "pretty");
        assert!(matches!(result, Err(GarnettError::Validation(_))));
    }

    #[test]
    fn test_resolve_bad_config_is_config_error() {
        let result = OutputFormat::resolve(None, "xml");
        assert!(matches!(result, Err(GarnettError::Config(_))));
    }

    #[test]
    fn test_write_output_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        std::fs::write(&path, "old").unwrap();

        let result = write_output("new", Some(&path), false);
        assert!(matches!(result, Err(GarnettError::Validation(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");

        write_output("new", Some(&path), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("out.json");

        write_output("[]", Some(&path), false).unwrap();
        assert!(path.exists());
    }
}

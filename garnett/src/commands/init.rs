//! Init command implementation.
//!
//! Writes a `garnett.toml` holding the default configuration so it can be
//! edited by hand.

use std::path::{Path, PathBuf};

use crate::commands::common::error_messages;
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{GarnettError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write the configuration into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    fn config_path(&self) -> PathBuf {
        self.args
            .path
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    fn validate_target(&self, config_path: &Path) -> Result<()> {
        if let Some(dir) = &self.args.path {
            if dir.exists() && !dir.is_dir() {
                return Err(GarnettError::Validation(format!(
                    "Target path is not a directory: {}",
                    dir.display()
                )));
            }
        }

        if config_path.exists() && !self.args.force {
            return Err(GarnettError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }
        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let config_path = self.config_path();
        self.validate_target(&config_path)?;

        Config::default().save_to_path(&config_path)?;

        if self.args.verbose {
            tracing::info!(path = %config_path.display(), "created configuration");
        }
        Ok(config_path)
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default garnett.toml"
    }

    fn help() -> &'static str {
        "Creates a garnett.toml with the default settings in the given \
         directory (or the current one). An existing file is kept unless \
         --force is passed."
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    InitCommand::new(args).execute().map(|_| ())
}

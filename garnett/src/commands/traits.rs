//! Command traits and the shared command result type.
//!
//! Every garnett subcommand is a [`Command`] built from its argument struct
//! and describes itself through [`CommandDescription`], which also feeds the
//! clap help text.

use std::time::Duration;

use crate::error::Result;

/// Standard command trait that all garnett commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command without touching stdout or the output file.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name as typed on the command line.
    fn name() -> &'static str;
}

/// Short and long help text for a command.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;

    /// Multi-line help text explaining usage.
    fn help() -> &'static str;
}

/// Command execution result with metadata.
#[derive(Debug, Clone)]
pub struct CommandResult<T = ()> {
    /// The command output data.
    pub data: T,

    /// Number of sources processed.
    pub items_processed: usize,

    /// Number of tokens produced across all sources.
    pub tokens_produced: usize,

    /// Wall-clock time spent executing.
    pub elapsed: Duration,

    /// Warning messages collected during execution.
    pub warnings: Vec<String>,
}

impl<T> CommandResult<T> {
    /// Create a result carrying `data` and no counters.
    pub fn new(data: T) -> Self {
        Self {
            data,
            items_processed: 0,
            tokens_produced: 0,
            elapsed: Duration::ZERO,
            warnings: Vec::new(),
        }
    }

    /// Set the number of sources processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of tokens produced.
    pub fn with_tokens_produced(mut self, count: usize) -> Self {
        self.tokens_produced = count;
        self
    }

    /// Set the execution time.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Add a warning message.
    pub fn with_warning(mut self, warning: String) -> Self {
        self.warnings.push(warning);
        self
    }
}

//! Kinds command implementation.
//!
//! Lists every token kind the lexer can produce together with its fixed
//! spelling, if it has one.

use crate::commands::common::{write_output, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::Result;
use crate::render::render_kinds;

/// Arguments for the kinds command.
#[derive(Debug, Clone, Default)]
pub struct KindsArgs {
    /// Output format overriding the configured one.
    pub format: Option<String>,
    /// Configured default format.
    pub default_format: String,
}

/// Kinds command handler.
pub struct KindsCommand {
    args: KindsArgs,
}

impl KindsCommand {
    /// Execute the command and print the table.
    pub fn run(&self) -> Result<()> {
        let table = self.execute()?;
        write_output(&table, None, false)
    }
}

impl Command for KindsCommand {
    type Args = KindsArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.args.default_format)?;
        tracing::debug!(command = Self::name(), format = format.name(), "starting");
        render_kinds(format)
    }

    fn name() -> &'static str {
        "kinds"
    }
}

impl CommandDescription for KindsCommand {
    fn description() -> &'static str {
        "List every token kind"
    }

    fn help() -> &'static str {
        "Prints each token kind the lexer can emit, in declaration order, \
         with the exact text it matches. WORD, NUMBER and CHAR have no fixed \
         spelling."
    }
}

/// Run the kinds command.
pub fn run_kinds(args: KindsArgs) -> Result<()> {
    KindsCommand::new(args).run()
}

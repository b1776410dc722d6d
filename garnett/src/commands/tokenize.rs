//! Tokenize command implementation.
//!
//! Loads every input, lexes the sources on a rayon thread pool and renders
//! the token streams in input order.

use std::path::PathBuf;
use std::time::Instant;

use garnetc_lex::tokenize;
use rayon::prelude::*;

use crate::commands::common::{error_messages, write_output, OutputFormat};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::TokenizeConfig;
use crate::error::{GarnettError, Result};
use crate::render::{render_tokens, FileTokens};
use crate::source::{load_all, SourceFile};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Source files to tokenize; `-` reads stdin.
    pub inputs: Vec<PathBuf>,
    /// Output file (default: stdout).
    pub output: Option<PathBuf>,
    /// Output format overriding the configured one.
    pub format: Option<String>,
    /// Parallel job count overriding the configured one.
    pub jobs: Option<usize>,
    /// Overwrite an existing output file.
    pub force: bool,
    /// Configured defaults.
    pub config: TokenizeConfig,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl TokenizeCommand {
    /// Execute the command and write its output.
    pub fn run(&self) -> Result<()> {
        let result = self.execute()?;

        for warning in &result.warnings {
            tracing::warn!("{}", warning);
        }
        write_output(&result.data, self.args.output.as_deref(), self.args.force)?;

        tracing::info!(
            files = result.items_processed,
            tokens = result.tokens_produced,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "tokenized"
        );
        Ok(())
    }

    fn validate(&self) -> Result<(OutputFormat, usize)> {
        if self.args.inputs.is_empty() {
            return Err(GarnettError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.args.config.format)?;

        let jobs = self.args.jobs.unwrap_or(self.args.config.jobs);
        if jobs == 0 {
            return Err(GarnettError::Validation(
                error_messages::INVALID_JOBS.to_string(),
            ));
        }

        Ok((format, jobs))
    }

    /// Lex every source on a pool of `jobs` threads, keeping input order.
    fn tokenize_sources<'a>(sources: &'a [SourceFile], jobs: usize) -> Result<Vec<FileTokens<'a>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| {
                GarnettError::CommandExecution(format!("Failed to build thread pool: {}", e))
            })?;

        Ok(pool.install(|| {
            sources
                .par_iter()
                .map(|source| FileTokens {
                    file: &source.name,
                    tokens: tokenize(&source.content),
                })
                .collect()
        }))
    }
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = CommandResult<String>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let start_time = Instant::now();
        let (format, jobs) = self.validate()?;

        tracing::debug!(
            command = Self::name(),
            inputs = self.args.inputs.len(),
            format = format.name(),
            jobs,
            "starting"
        );

        let sources = load_all(&self.args.inputs)?;
        let files = Self::tokenize_sources(&sources, jobs)?;
        let rendered = render_tokens(format, &files)?;

        let tokens_produced = files.iter().map(|f| f.tokens.len()).sum();
        let mut result = CommandResult::new(rendered)
            .with_items_processed(files.len())
            .with_tokens_produced(tokens_produced);

        for file in files.iter().filter(|f| f.tokens.is_empty()) {
            result = result.with_warning(format!("{} produced no tokens", file.file));
        }

        Ok(result.with_elapsed(start_time.elapsed()))
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

impl CommandDescription for TokenizeCommand {
    fn description() -> &'static str {
        "Split Ruby-like source files into tokens"
    }

    fn help() -> &'static str {
        "Reads each input file (or stdin for `-`), splits it into WORD, NUMBER, \
         punctuation and operator tokens, and prints the token streams in the \
         order the inputs were given. Whitespace is discarded; every other \
         character ends up in exactly one token."
    }
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    TokenizeCommand::new(args).run()
}

//! Garnett CLI - a command-line front end for the garnetc lexer.
//!
//! This is the main entry point for the garnett CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;
mod render;
mod source;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::CommandDescription;
use commands::{
    run_init, run_kinds, run_tokenize, InitArgs, InitCommand, KindsArgs, KindsCommand,
    TokenizeArgs, TokenizeCommand,
};
use config::Config;
use error::{GarnettError, Result};

/// Garnett - tokenize Ruby-like source files
#[derive(Parser, Debug)]
#[command(name = "garnett")]
#[command(author = "Garnet Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Ruby-like source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GARNETT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GARNETT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "GARNETT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the garnett CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = TokenizeCommand::description(), long_about = TokenizeCommand::help())]
    Tokenize(TokenizeCli),

    #[command(about = KindsCommand::description(), long_about = KindsCommand::help())]
    Kinds(KindsCli),

    #[command(about = InitCommand::description(), long_about = InitCommand::help())]
    Init(InitCli),
}

#[derive(Args, Debug)]
struct TokenizeCli {
    /// Source files to tokenize (`-` reads stdin)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (pretty, json, plain)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Number of files tokenized in parallel
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Overwrite an existing output file
    #[arg(short, long)]
    force: bool,
}

#[derive(Args, Debug)]
struct KindsCli {
    /// Output format (pretty, json, plain)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

#[derive(Args, Debug)]
struct InitCli {
    /// Directory to write garnett.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing garnett.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the garnett CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging
/// and dispatches to the selected command. Errors are reported on stderr
/// with a non-zero exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output. `RUST_LOG`
/// overrides the level chosen from `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GarnettError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => run_tokenize(TokenizeArgs {
            inputs: args.inputs,
            output: args.output,
            format: args.format,
            jobs: args.jobs,
            force: args.force,
            config: config.tokenize,
        }),
        Commands::Kinds(args) => run_kinds(KindsArgs {
            format: args.format,
            default_format: config.tokenize.format,
        }),
        Commands::Init(args) => run_init(InitArgs {
            verbose,
            force: args.force,
            path: args.path,
        }),
    }
}

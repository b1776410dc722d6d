//! Command modules for the garnett CLI.
//!
//! Each subcommand lives in its own file and follows the same pattern: an
//! `*Args` struct, a command type implementing [`traits::Command`] and a
//! `run_*` convenience function.

pub mod common;
pub mod traits;

pub mod init;
pub mod kinds;
pub mod tokenize;

pub use init::{run_init, InitArgs, InitCommand};
pub use kinds::{run_kinds, KindsArgs, KindsCommand};
pub use tokenize::{run_tokenize, TokenizeArgs, TokenizeCommand};

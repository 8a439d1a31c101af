//! weft command-line front end.
//!
//! Thin layer over `weft_scan` and `weft_subst`: argument parsing, file and
//! stdin input, and logging setup.

pub mod commands;
mod tracing_setup;

pub use commands::{run, CliError, Command};
pub use tracing_setup::init_tracing;

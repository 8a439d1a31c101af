//! CLI commands.
//!
//! Arguments are parsed by hand into a [`Command`]; [`run`] executes it and
//! returns the text to print, so `main` is the only place that touches
//! stdout or the exit code. Each command lives in its own submodule; input
//! reading and the shared error type live here.

use std::io::Read;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use weft_scan::ConfigError;
use weft_subst::{Marker, MissingVariable, PlaceholderError, PropertiesError};

mod bind;
mod check;
mod render;
mod scan;

pub use bind::bind;
pub use check::check;
pub use render::render;
pub use scan::scan;

pub const USAGE: &str = "\
Usage: weft <command> <file|-> [options]

Commands:
  render <file>   Substitute ${...} variables
      --props=<file>       Variable definitions (key=value lines)
      --defaults           Enable ${key:default} values
      --separator=<s>      Key/default separator (implies --defaults)
      --strict             Fail on undefined variables
  bind <file>     Replace #{...} placeholders with positional markers
      --marker=<s>         Marker text (default: ?)
      --numbered=<prefix>  Numbered markers, e.g. --numbered=$ for $1, $2
  check <file>    Print `dynamic` if the text has a span, else `static`
      --open=<s> --close=<s>   Delimiters (default: ${ and })
  scan <file>     List every span expression, one per line
      --open=<s> --close=<s>   Delimiters (default: ${ and })
  help            Show this message

Global options:
  -v, --verbose   Debug logging (RUST_LOG overrides)
";

/// Anything that stops a command from producing output.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Properties(#[from] PropertiesError),
    #[error("invalid delimiters: {0}")]
    Delimiters(#[from] ConfigError),
    #[error(transparent)]
    Placeholder(#[from] PlaceholderError),
    #[error(transparent)]
    MissingVariable(#[from] MissingVariable),
}

fn usage(message: impl Into<String>) -> CliError {
    CliError::Usage(message.into())
}

/// Options for `weft render`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub props: Option<PathBuf>,
    pub defaults: bool,
    pub separator: Option<String>,
    pub strict: bool,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Render { input: String, options: RenderOptions },
    Bind { input: String, marker: Marker },
    Check { input: String, open: String, close: String },
    Scan { input: String, open: String, close: String },
    Help,
}

impl Command {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let Some(name) = args.first() else {
            return Ok(Command::Help);
        };
        if matches!(name.as_str(), "help" | "--help" | "-h") {
            return Ok(Command::Help);
        }

        let mut input = None;
        let mut flags = Vec::new();
        for arg in &args[1..] {
            if arg.starts_with("--") {
                flags.push(arg.as_str());
            } else if input.is_none() {
                input = Some(arg.clone());
            } else {
                return Err(usage(format!("unexpected argument '{arg}'")));
            }
        }
        let Some(input) = input else {
            return Err(usage(format!("missing input file for '{name}'")));
        };

        match name.as_str() {
            "render" => {
                let mut options = RenderOptions::default();
                for flag in flags {
                    if let Some(path) = flag.strip_prefix("--props=") {
                        options.props = Some(PathBuf::from(path));
                    } else if flag == "--defaults" {
                        options.defaults = true;
                    } else if let Some(sep) = flag.strip_prefix("--separator=") {
                        options.separator = Some(sep.to_owned());
                    } else if flag == "--strict" {
                        options.strict = true;
                    } else {
                        return Err(unknown_flag(name, flag));
                    }
                }
                Ok(Command::Render { input, options })
            }
            "bind" => {
                let mut marker = Marker::default();
                for flag in flags {
                    if let Some(text) = flag.strip_prefix("--marker=") {
                        marker = Marker::Literal(text.to_owned());
                    } else if let Some(prefix) = flag.strip_prefix("--numbered=") {
                        marker = Marker::Numbered(prefix.to_owned());
                    } else {
                        return Err(unknown_flag(name, flag));
                    }
                }
                Ok(Command::Bind { input, marker })
            }
            "check" | "scan" => {
                let mut open = "${".to_owned();
                let mut close = "}".to_owned();
                for flag in flags {
                    if let Some(s) = flag.strip_prefix("--open=") {
                        s.clone_into(&mut open);
                    } else if let Some(s) = flag.strip_prefix("--close=") {
                        s.clone_into(&mut close);
                    } else {
                        return Err(unknown_flag(name, flag));
                    }
                }
                if name == "check" {
                    Ok(Command::Check { input, open, close })
                } else {
                    Ok(Command::Scan { input, open, close })
                }
            }
            other => Err(usage(format!("unknown command '{other}'"))),
        }
    }
}

fn unknown_flag(command: &str, flag: &str) -> CliError {
    usage(format!("unknown option '{flag}' for '{command}'"))
}

/// Read a file, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: path.to_owned(),
        source,
    };
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(read_err)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

/// Execute a command, returning what it prints.
pub fn run(command: &Command) -> Result<String, CliError> {
    debug!(?command, "running");
    match command {
        Command::Help => Ok(USAGE.to_owned()),
        Command::Render { input, options } => render(&read_input(input)?, options),
        Command::Bind { input, marker } => bind(&read_input(input)?, marker.clone()),
        Command::Check { input, open, close } => check(&read_input(input)?, open, close),
        Command::Scan { input, open, close } => scan(&read_input(input)?, open, close),
    }
}

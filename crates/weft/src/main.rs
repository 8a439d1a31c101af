//! weft CLI
//!
//! Delimited-token substitution for config files and SQL text.

use weft::commands::USAGE;
use weft::{init_tracing, run, Command};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    args.retain(|a| a != "-v" && a != "--verbose");
    init_tracing(verbose);

    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(1);
        }
    };

    match run(&command) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

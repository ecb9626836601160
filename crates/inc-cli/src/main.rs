//! INC 5000 company list cleaner and explorer.

use std::io;

use clap::Parser;
use inc_cli::cli::{Cli, Command};
use inc_cli::commands::{run_analyze, run_clean};
use inc_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let stdout = io::stdout();
    let result = match &cli.command {
        Command::Analyze(args) => run_analyze(args, &mut stdout.lock()).map(|_| ()),
        Command::Clean(args) => run_clean(args, &mut stdout.lock()).map(|_| ()),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

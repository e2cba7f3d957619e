use std::io;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use palettegen::cli::{run, Cli};
use palettegen::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("{} {:#}", style("warning:").for_stderr().yellow().bold(), err);
    }

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").for_stderr().red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

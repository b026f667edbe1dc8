mod command;
mod logging;

use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;
use command::Command;

/// evaluate integer point operations, points are written as x,y
#[derive(FromArgs)]
struct Cli {
    /// turn debugging information on
    #[argh(switch, short = 'd')]
    debug: bool,

    /// log file, defaults to /tmp/mmpoint.log
    #[argh(option)]
    log_file: Option<PathBuf>,

    #[argh(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli: Cli = argh::from_env();
    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(logging::LOG_FILE));

    if let Err(e) = logging::setup(cli.debug, &log_file) {
        eprintln!("Failed to set up logging to {}: {e}", log_file.display());
    }

    match cli.command.run() {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

use anyhow::Result;
use clap::Parser;

use resumake::cli;
use resumake::commands;
use resumake::logging;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init_subscriber(args.global.verbose);
    let log = logging::Logger::new();

    match args.command {
        cli::Command::Build(opts) => commands::build::run(&args.global, &opts, &log),
        cli::Command::Version => {
            println!("resumake {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

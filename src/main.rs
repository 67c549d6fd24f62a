use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use subnet_calc::logging::init_logging;
use subnet_calc::{run, Cli};

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    if let Err(e) = init_logging(cli.log_level()) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    match run(&cli) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

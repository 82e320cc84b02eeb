use clap::Parser;
use std::process::ExitCode;
use words_cli::args::Args;
use words_cli::config::Config;
use words_cli::logging;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match words_cli::execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use font2png::cli::{self, Args};
use std::process::ExitCode;

pub fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(cli::usage_exit_code(&err));
        }
    };

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("font2png: {err:#}");
            ExitCode::from(cli::exit_code(&err))
        }
    }
}

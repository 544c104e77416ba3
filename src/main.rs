use std::env;
use std::process::ExitCode;

use lz77r::cli;

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().collect();
    let program = argv.get(0).cloned().unwrap_or_else(|| "lz77r".to_string());

    let args = match cli::parse_args(&argv) {
        Ok(args) => args,
        Err(_) => {
            cli::print_usage(&program);
            return ExitCode::FAILURE;
        }
    };

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {}", program, err);
            ExitCode::FAILURE
        }
    }
}

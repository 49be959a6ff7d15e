//! Binary entrypoint for the `mint-release-tasks` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is the common case in CI.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("failed to load .env: {err}");
            return ExitCode::FAILURE;
        }
    }
    mint_release_tasks::logging::init();

    match mint_release_tasks::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

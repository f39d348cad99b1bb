//! Binary entrypoint for the `randuuid` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is fine; settings then come from the real environment.
    let _ = dotenvy::dotenv();
    if let Err(err) = randuuid::logging::init() {
        eprintln!("Warning: {err}");
    }

    // Recording and replay are handled in commands::dispatch via
    // RANDUUID_RECORD=<dir> and RANDUUID_REPLAY=<file>.
    match randuuid::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

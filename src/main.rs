use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    match varchess::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = jotbook::run() {
        eprintln!("error: {err:#}");
        return jotbook::cli::exit_code(&err);
    }
    ExitCode::SUCCESS
}

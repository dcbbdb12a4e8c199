use langcodex::{
    EmbeddedMetadata,
    cli::{self, Parsed},
    commands::lookup,
    infra::logging,
    reporting::console,
    status::ExitStatus,
};
use std::env;

fn main() -> ExitStatus {
    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let (options, settings) = match cli::parse_args(&args) {
        Parsed::Run(options, settings) => (options, settings),
        Parsed::Exit(status) => return status,
    };

    logging::init(&settings);

    match lookup::execute(&options, &settings, &EmbeddedMetadata::new()) {
        Ok(outcome) => {
            console::print_line(&outcome.line);
            outcome.status
        }
        Err(e) => {
            console::print_error(&e, &settings.ui_locale);
            ExitStatus::Failure
        }
    }
}

mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::GenerateParams;

/// Exit status for command line usage errors (`EX_USAGE` from sysexits).
pub const EX_USAGE: i32 = 64;

/// Report a bad invocation and exit.
///
/// `--help` and `--version` keep clap's own behavior; anything else prints
/// clap's message, which includes the usage line, and exits with
/// [`EX_USAGE`].
pub fn exit_usage(err: clap::Error) -> ! {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            let _ = err.print();
            std::process::exit(EX_USAGE);
        }
    }
}

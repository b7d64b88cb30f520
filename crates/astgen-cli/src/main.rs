mod cli;
mod commands;
mod logging;

use cli::{GenerateParams, build_cli, exit_usage};

fn main() {
    logging::init();

    let matches = build_cli().try_get_matches().unwrap_or_else(|err| exit_usage(err));
    let params = GenerateParams::from_matches(&matches);
    commands::generate::run(params.into());
}

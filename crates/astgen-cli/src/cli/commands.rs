//! Command builder for the CLI.

use clap::Command;

use super::args::output_dir_arg;

/// Build the CLI.
pub fn build_cli() -> Command {
    Command::new("astgen")
        .about("Generate the expression and statement AST classes for the Lox interpreter")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(
            r#"EXAMPLES:
  astgen src/            # writes src/expr.h, src/expr.cc, src/stmt.h, src/stmt.cc
  RUST_LOG=debug astgen src/"#,
        )
        .arg(output_dir_arg())
}

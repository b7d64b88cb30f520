//! Argument builders for the CLI.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// Directory the generated files are written to (positional).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .value_name("OUTPUT_DIR")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Directory to write expr.h, expr.cc, stmt.h and stmt.cc into")
}

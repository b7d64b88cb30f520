//! Test helpers for rendering small schemas.

use astgen_core::parse_family;

use crate::emit::{Config, Emitter};
use crate::Hierarchy;

/// Build the hierarchy of `entries`, panicking on malformed input.
pub fn hierarchy(family: &str, entries: &[&str]) -> Hierarchy {
    hierarchy_with(family, entries, &Config::default())
}

pub fn hierarchy_with(family: &str, entries: &[&str], config: &Config) -> Hierarchy {
    let schema = parse_family(family, entries).expect("schema should parse");
    Hierarchy::build(&schema, config)
}

/// Rendered `.h` for `entries` with the default config.
pub fn declaration(family: &str, entries: &[&str]) -> String {
    let config = Config::default();
    Emitter::new(&hierarchy(family, entries), &config).emit_declaration()
}

/// Rendered `.cc` for `entries` with the default config.
pub fn definition(family: &str, entries: &[&str]) -> String {
    let config = Config::default();
    Emitter::new(&hierarchy(family, entries), &config).emit_definition()
}

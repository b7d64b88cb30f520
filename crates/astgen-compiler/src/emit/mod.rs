//! C++ emission.
//!
//! Each family renders into two artifacts: a declaration header holding the
//! class hierarchy and visitor interface, and a definition file holding the
//! out-of-line `accept`/`get_type` bodies.

mod config;
mod declaration;
mod definition;
mod emitter;

#[cfg(test)]
mod emit_tests;

pub use config::Config;
pub use emitter::{Artifact, Emitter};

use crate::Hierarchy;

/// Render both artifacts of a family: `[declaration, definition]`.
pub fn emit(hierarchy: &Hierarchy, config: &Config) -> [Artifact; 2] {
    let family = hierarchy.family;
    [
        Artifact {
            file_name: family.header_file(),
            contents: Emitter::new(hierarchy, config).emit_declaration(),
        },
        Artifact {
            file_name: family.source_file(),
            contents: Emitter::new(hierarchy, config).emit_definition(),
        },
    ]
}

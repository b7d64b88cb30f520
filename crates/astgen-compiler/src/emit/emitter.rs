//! Core emitter struct and shared output helpers.

use super::Config;
use crate::Hierarchy;

/// First line of every artifact when the banner is enabled.
pub const BANNER: &str = "// Auto generated code, don't modify manually.";

/// One rendered output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub file_name: String,
    pub contents: String,
}

/// C++ emitter for one family hierarchy.
pub struct Emitter<'a> {
    pub(super) hierarchy: &'a Hierarchy,
    pub(super) config: &'a Config,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(hierarchy: &'a Hierarchy, config: &'a Config) -> Self {
        Self {
            hierarchy,
            config,
            output: String::new(),
        }
    }

    pub(super) fn line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub(super) fn blank(&mut self) {
        self.output.push('\n');
    }

    pub(super) fn emit_banner(&mut self) {
        if self.config.banner {
            self.line(BANNER);
        }
    }

    /// Ensure exactly one trailing newline and hand back the buffer.
    pub(super) fn finish(mut self) -> String {
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}

//! astgen compiler: visitor hierarchy derivation and C++ emission.
//!
//! This crate turns parsed family schemas into source artifacts:
//! - `hierarchy` - base class, node types, ownership and visitor contract
//! - `emit` - declaration (`.h`) and definition (`.cc`) rendering
//! - `grammar` - the built-in Lox expression and statement descriptors

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod grammar;
pub mod hierarchy;

#[cfg(test)]
pub mod test_utils;

use astgen_core::{Family, FamilySchema, SchemaError};

pub use emit::{Artifact, Config};
pub use hierarchy::Hierarchy;

/// Errors that can occur during generation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("malformed schema: {0}")]
    Schema(#[from] SchemaError),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Generate the declaration and definition artifacts for one family.
pub fn generate_family<I, S>(family: &str, entries: I, config: &Config) -> Result<[Artifact; 2]>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let schema = astgen_core::parse_family(family, entries)?;
    Ok(emit_schema(&schema, config))
}

/// Generate all four artifacts for the built-in grammar.
///
/// Every family is parsed before anything is rendered, so a bad descriptor
/// yields no artifacts at all.
pub fn generate(config: &Config) -> Result<Vec<Artifact>> {
    let schemas = Family::ALL
        .into_iter()
        .map(|family| FamilySchema::parse(family, grammar::descriptors(family)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(schemas
        .iter()
        .flat_map(|schema| emit_schema(schema, config))
        .collect())
}

fn emit_schema(schema: &FamilySchema, config: &Config) -> [Artifact; 2] {
    tracing::debug!(
        family = %schema.family(),
        types = schema.len(),
        "deriving hierarchy"
    );
    let hierarchy = Hierarchy::build(schema, config);
    emit::emit(&hierarchy, config)
}

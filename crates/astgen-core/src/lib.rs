#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for astgen.
//!
//! - `family` - the two node families (expressions, statements)
//! - `schema` - descriptor parsing into ordered type definitions
//! - `value` - the tagged value an expression evaluates to
//! - `utils` - identifier helpers shared by the emitters

pub mod family;
pub mod schema;
pub mod utils;
pub mod value;

#[cfg(test)]
mod family_tests;
#[cfg(test)]
mod utils_tests;

pub use family::Family;
pub use schema::{
    FamilySchema, Field, FieldType, NAME_SEPARATOR, SchemaError, TOKEN_TYPE, TypeDefinition,
    kind_tag, parse_family,
};
pub use value::{Value, ValueKind};

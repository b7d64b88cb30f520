//! Hierarchy derivation.
//!
//! Turns a [`FamilySchema`] into everything the emitter renders: the
//! abstract base, the kind enumeration (expressions only), one concrete
//! node type per definition with its release list, the visitor contract and
//! the include set. Names are fixed here so the emitter only formats text.

use std::collections::BTreeSet;

use astgen_core::utils::param_name;
use astgen_core::{Family, FamilySchema, Field, FieldType, TypeDefinition, ValueKind, kind_tag};

use crate::emit::Config;

/// Derived description of one family.
#[derive(Clone, Debug)]
pub struct Hierarchy {
    pub family: Family,
    /// Abstract base class name.
    pub base: String,
    /// Return type of `accept` and of every visitor method.
    pub return_type: String,
    /// Kind enumeration, expressions only.
    pub kinds: Option<KindEnum>,
    /// Value struct name, expressions only.
    pub value_type: Option<String>,
    pub nodes: Vec<NodeType>,
    pub visitor: VisitorContract,
    pub includes: Includes,
}

/// Closed enumeration with one tag per node type.
#[derive(Clone, Debug)]
pub struct KindEnum {
    pub name: String,
    pub tags: Vec<String>,
}

/// A concrete node type.
#[derive(Clone, Debug)]
pub struct NodeType {
    pub name: String,
    /// Constructor parameters and stored members, in declaration order.
    pub fields: Vec<Field>,
    /// Fields released by the destructor. Empty means no destructor.
    pub releases: Vec<Release>,
    /// Visitor method `accept` delegates to.
    pub visit_method: String,
    /// Tag returned by `get_type`, expressions only.
    pub kind_tag: Option<String>,
}

impl NodeType {
    pub fn has_destructor(&self) -> bool {
        !self.releases.is_empty()
    }
}

/// How a destructor releases one owned field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// `delete field;`
    Node { field: String },
    /// Delete every element of a node vector.
    Each { field: String, element: String },
}

/// Visitor interface: one abstract method per node type.
#[derive(Clone, Debug)]
pub struct VisitorContract {
    pub name: String,
    pub methods: Vec<VisitMethod>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitMethod {
    pub name: String,
    /// Concrete node type the method receives a pointer to.
    pub node: String,
    pub param: String,
}

/// Headers a declaration artifact needs, derived from field types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Includes {
    /// `#include <...>`
    pub system: BTreeSet<String>,
    /// `#include "..."`
    pub local: BTreeSet<String>,
}

impl Hierarchy {
    pub fn build(schema: &FamilySchema, config: &Config) -> Self {
        let family = schema.family();
        let base = family.base_name().to_string();

        let return_type = if family.returns_value() {
            config.value_type.clone()
        } else {
            "void".to_string()
        };

        let kinds = family.has_kind_tags().then(|| KindEnum {
            name: config.kind_enum.clone(),
            tags: schema.names().map(kind_tag).collect(),
        });

        let nodes: Vec<NodeType> = schema
            .types()
            .map(|def| build_node(family, def))
            .collect();

        let visitor = VisitorContract {
            name: family.visitor_name(),
            methods: nodes
                .iter()
                .map(|node| VisitMethod {
                    name: node.visit_method.clone(),
                    node: node.name.clone(),
                    param: param_name(&node.name),
                })
                .collect(),
        };

        let includes = collect_includes(schema, config);

        Self {
            family,
            base,
            return_type,
            kinds,
            value_type: family.returns_value().then(|| config.value_type.clone()),
            nodes,
            visitor,
            includes,
        }
    }
}

/// Visitor method for a type, e.g. `visit_BinaryExpr`.
pub fn visit_method(family: Family, type_name: &str) -> String {
    format!("visit_{}{}", type_name, family.base_name())
}

fn build_node(family: Family, def: &TypeDefinition) -> NodeType {
    let releases = def
        .owned_fields()
        .filter_map(|field| match field.kind {
            FieldType::Node(_) => Some(Release::Node {
                field: field.name.clone(),
            }),
            FieldType::NodeList(pointee) => Some(Release::Each {
                field: field.name.clone(),
                element: format!("{}*", pointee.base_name()),
            }),
            _ => None,
        })
        .collect();

    NodeType {
        name: def.name.clone(),
        fields: def.fields.clone(),
        releases,
        visit_method: visit_method(family, &def.name),
        kind_tag: family.has_kind_tags().then(|| kind_tag(&def.name)),
    }
}

fn collect_includes(schema: &FamilySchema, config: &Config) -> Includes {
    let family = schema.family();
    let mut includes = Includes::default();

    if family.returns_value() {
        includes
            .system
            .extend(ValueKind::ALL.iter().filter_map(|k| k.cpp_header()).map(String::from));
    }

    for field in schema.types().flat_map(|def| &def.fields) {
        match field.kind {
            FieldType::Token => {
                includes.local.insert(config.token_header.clone());
            }
            FieldType::Primitive(kind) => {
                includes.system.extend(kind.cpp_header().map(String::from));
            }
            FieldType::NodeList(_) => {
                includes.system.insert("vector".to_string());
            }
            FieldType::Node(_) | FieldType::Opaque => {}
        }
        if let Some(other) = field.kind.referenced_family().filter(|f| *f != family) {
            includes.local.insert(other.header_file());
        }
    }

    includes
}

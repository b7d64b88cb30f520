//! Descriptor parsing.
//!
//! A descriptor has the form `Name := type1 field1, type2 field2`. Each
//! field's written type is kept verbatim for rendering and classified into
//! a [`FieldType`] that drives ownership.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{Family, ValueKind};

/// Separates a type name from its field list.
pub const NAME_SEPARATOR: &str = ":=";

/// Written type of the opaque lexer token.
pub const TOKEN_TYPE: &str = "Token";

/// Malformed or inconsistent schema input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("unknown family `{0}`")]
    UnknownFamily(String),

    #[error("descriptor `{entry}` is missing `:=`")]
    MissingNameSeparator { entry: String },

    #[error("descriptor `{entry}` has no type name")]
    EmptyName { entry: String },

    #[error("field `{field}` of `{type_name}` needs both a type and a name")]
    MalformedField { type_name: String, field: String },

    #[error("type `{name}` is defined more than once in the {family} family")]
    DuplicateType { family: Family, name: String },

    #[error("kind tag `{tag}` of type `{name}` is already taken in the {family} family")]
    DuplicateTag {
        family: Family,
        name: String,
        tag: String,
    },
}

/// Semantic type of a field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FieldType {
    /// Literal value held by copy.
    Primitive(ValueKind),
    /// Lexer token held by copy.
    Token,
    /// `Expr*` or `Stmt*`, owned by the containing node.
    Node(Family),
    /// `std::vector<Expr*>` or `std::vector<Stmt*>`; every element is owned
    /// by the containing node.
    NodeList(Family),
    /// Any other type, held by copy.
    Opaque,
}

impl FieldType {
    /// Classify a written type.
    pub fn classify(ty: &str) -> Self {
        if ty == TOKEN_TYPE {
            return Self::Token;
        }
        if let Some(kind) = ValueKind::from_cpp_type(ty) {
            return Self::Primitive(kind);
        }
        if let Some(family) = node_pointee(ty) {
            return Self::Node(family);
        }
        if let Some(family) = ty
            .strip_prefix("std::vector<")
            .and_then(|rest| rest.strip_suffix('>'))
            .and_then(|inner| node_pointee(inner.trim()))
        {
            return Self::NodeList(family);
        }
        Self::Opaque
    }

    /// Whether the containing node must release this field.
    pub fn is_owned(self) -> bool {
        matches!(self, Self::Node(_) | Self::NodeList(_))
    }

    /// Family of the node(s) this field points to.
    pub fn referenced_family(self) -> Option<Family> {
        match self {
            Self::Node(family) | Self::NodeList(family) => Some(family),
            _ => None,
        }
    }
}

fn node_pointee(ty: &str) -> Option<Family> {
    let base = ty.strip_suffix('*')?.trim_end();
    Family::ALL.into_iter().find(|f| f.base_name() == base)
}

/// One declared field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Type exactly as written in the descriptor.
    pub ty: String,
    pub name: String,
    pub kind: FieldType,
}

impl Field {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        let ty = ty.into();
        let kind = FieldType::classify(&ty);
        Self {
            ty,
            name: name.into(),
            kind,
        }
    }

    /// `type name`, as used in parameter lists and member declarations.
    pub fn declaration(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }
}

/// A concrete node type: name plus fields in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub fields: Vec<Field>,
}

impl TypeDefinition {
    /// Parse one descriptor entry.
    pub fn parse(entry: &str) -> Result<Self, SchemaError> {
        let (name, field_list) =
            entry
                .split_once(NAME_SEPARATOR)
                .ok_or_else(|| SchemaError::MissingNameSeparator {
                    entry: entry.to_string(),
                })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(SchemaError::EmptyName {
                entry: entry.to_string(),
            });
        }

        let fields = field_list
            .split(',')
            .map(|raw| parse_field(name, raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            fields,
        })
    }

    /// Fields the node releases when destroyed, in declaration order.
    pub fn owned_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.kind.is_owned())
    }

    pub fn has_owned_fields(&self) -> bool {
        self.owned_fields().next().is_some()
    }
}

fn parse_field(type_name: &str, raw: &str) -> Result<Field, SchemaError> {
    let malformed = || SchemaError::MalformedField {
        type_name: type_name.to_string(),
        field: raw.trim().to_string(),
    };

    let (ty, name) = raw.trim().split_once(' ').ok_or_else(malformed)?;
    let name = name.trim();
    if ty.is_empty() || name.is_empty() || name.contains(char::is_whitespace) {
        return Err(malformed());
    }
    Ok(Field::new(ty, name))
}

/// Kind tag of a type: its name, uppercased.
pub fn kind_tag(type_name: &str) -> String {
    type_name.to_ascii_uppercase()
}

/// All type definitions of one family, keyed by name in descriptor order.
#[derive(Clone, Debug)]
pub struct FamilySchema {
    family: Family,
    types: IndexMap<String, TypeDefinition>,
}

impl FamilySchema {
    /// Parse every descriptor of `family`. Fails on the first bad entry.
    ///
    /// Kind tags share one unscoped C++ namespace with the value tags, so a
    /// tag must differ from every earlier tag and from every `ValueKind` tag.
    pub fn parse<I, S>(family: Family, entries: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = IndexMap::new();
        let mut tags: HashSet<String> = ValueKind::ALL
            .iter()
            .map(|kind| kind.tag().to_string())
            .collect();
        for entry in entries {
            let def = TypeDefinition::parse(entry.as_ref())?;
            if types.contains_key(&def.name) {
                return Err(SchemaError::DuplicateType {
                    family,
                    name: def.name,
                });
            }
            if family.has_kind_tags() {
                let tag = kind_tag(&def.name);
                if !tags.insert(tag.clone()) {
                    return Err(SchemaError::DuplicateTag {
                        family,
                        name: def.name,
                        tag,
                    });
                }
            }
            types.insert(def.name.clone(), def);
        }
        Ok(Self { family, types })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Type definitions in descriptor order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// Type names in descriptor order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Parse the descriptors of the family called `family`.
pub fn parse_family<I, S>(family: &str, entries: I) -> Result<FamilySchema, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let resolved =
        Family::from_name(family).ok_or_else(|| SchemaError::UnknownFamily(family.to_string()))?;
    FamilySchema::parse(resolved, entries)
}

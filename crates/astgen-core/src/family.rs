//! Node families.
//!
//! Every generated type belongs to exactly one family. A family owns one
//! abstract base class, one visitor interface and one pair of output files.

use std::fmt;

/// Node family.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Family {
    /// Expressions. Visitors return a value.
    Expression,
    /// Statements. Visitors return nothing.
    Statement,
}

impl Family {
    /// All families, in generation order.
    pub const ALL: [Family; 2] = [Family::Expression, Family::Statement];

    /// Resolve a family from its long name or its base class name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Expression" | "Expr" => Some(Self::Expression),
            "Statement" | "Stmt" => Some(Self::Statement),
            _ => None,
        }
    }

    /// Name of the abstract base class.
    pub fn base_name(self) -> &'static str {
        match self {
            Self::Expression => "Expr",
            Self::Statement => "Stmt",
        }
    }

    /// Name of the visitor interface, e.g. `ExprVisitor`.
    pub fn visitor_name(self) -> String {
        format!("{}Visitor", self.base_name())
    }

    /// Lowercased base name shared by both output files.
    pub fn file_stem(self) -> String {
        self.base_name().to_ascii_lowercase()
    }

    pub fn header_file(self) -> String {
        format!("{}.h", self.file_stem())
    }

    pub fn source_file(self) -> String {
        format!("{}.cc", self.file_stem())
    }

    /// Include guard macro, e.g. `EXPR_H_`.
    pub fn include_guard(self) -> String {
        format!("{}_H_", self.base_name().to_ascii_uppercase())
    }

    /// Whether visitors of this family produce a value.
    pub fn returns_value(self) -> bool {
        matches!(self, Self::Expression)
    }

    /// Whether concrete types carry a kind tag and a `get_type` operation.
    pub fn has_kind_tags(self) -> bool {
        matches!(self, Self::Expression)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression => f.write_str("Expression"),
            Self::Statement => f.write_str("Statement"),
        }
    }
}

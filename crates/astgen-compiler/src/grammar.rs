//! Built-in Lox grammar.

use astgen_core::Family;

/// Expression node descriptors.
pub const EXPRESSIONS: &[&str] = &[
    "Assign := Token name, Expr* value",
    "Binary := Expr* left, Token op, Expr* right",
    "Grouping := Expr* expression",
    "Unary := Token op, Expr* right",
    "PrimitiveString := std::string value",
    "PrimitiveNumber := double value",
    "PrimitiveBool := bool value",
    "PrimitiveNil := std::nullptr_t value",
    "Variable := Token name",
];

/// Statement node descriptors.
pub const STATEMENTS: &[&str] = &[
    "Block := std::vector<Stmt*> statements",
    "Expression := Expr* expression",
    "Print := Expr* expression",
    "Var := Token name, Expr* initializer",
];

pub fn descriptors(family: Family) -> &'static [&'static str] {
    match family {
        Family::Expression => EXPRESSIONS,
        Family::Statement => STATEMENTS,
    }
}

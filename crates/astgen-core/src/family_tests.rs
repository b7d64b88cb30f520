use crate::Family;

#[test]
fn from_name_accepts_long_and_base_names() {
    assert_eq!(Family::from_name("Expression"), Some(Family::Expression));
    assert_eq!(Family::from_name("Expr"), Some(Family::Expression));
    assert_eq!(Family::from_name("Statement"), Some(Family::Statement));
    assert_eq!(Family::from_name("Stmt"), Some(Family::Statement));
}

#[test]
fn from_name_rejects_unknown() {
    assert_eq!(Family::from_name("expr"), None);
    assert_eq!(Family::from_name("Decl"), None);
    assert_eq!(Family::from_name(""), None);
}

#[test]
fn output_names() {
    assert_eq!(Family::Expression.header_file(), "expr.h");
    assert_eq!(Family::Expression.source_file(), "expr.cc");
    assert_eq!(Family::Statement.header_file(), "stmt.h");
    assert_eq!(Family::Statement.source_file(), "stmt.cc");
}

#[test]
fn include_guard_and_visitor() {
    assert_eq!(Family::Expression.include_guard(), "EXPR_H_");
    assert_eq!(Family::Statement.include_guard(), "STMT_H_");
    assert_eq!(Family::Expression.visitor_name(), "ExprVisitor");
    assert_eq!(Family::Statement.visitor_name(), "StmtVisitor");
}

#[test]
fn only_expressions_return_values_and_carry_tags() {
    assert!(Family::Expression.returns_value());
    assert!(Family::Expression.has_kind_tags());
    assert!(!Family::Statement.returns_value());
    assert!(!Family::Statement.has_kind_tags());
}

use indoc::indoc;

use crate::emit::{Config, Emitter};
use crate::grammar;
use crate::test_utils::{declaration, definition, hierarchy, hierarchy_with};

#[test]
fn literal_declaration() {
    let res = declaration("Expression", &["Literal := double value"]);

    insta::assert_snapshot!(res, @r#"
    #ifndef EXPR_H_
    #define EXPR_H_

    // Auto generated code, don't modify manually.
    #include <cstddef>
    #include <string>

    enum ExprType {
      LITERAL,
    };

    enum ValueType { VALSTRING, VALNUMBER, VALBOOL, VALNIL };

    struct ExprValue {
      std::string string;
      double number;
      bool boolean;
      std::nullptr_t nil;
      ValueType type;

      ExprValue()
          : string(""), number(0), boolean(false), nil(nullptr), type(VALNIL) {}

      bool operator==(const ExprValue& other) const {
        if (type != other.type)
          return false;
        switch (type) {
        case VALSTRING:
          return string == other.string;
        case VALNUMBER:
          return number == other.number;
        case VALBOOL:
          return boolean == other.boolean;
        case VALNIL:
          return true;
        }
        return false;
      }
    };

    class ExprVisitor;

    class Expr {
    public:
      virtual ~Expr() {}
      virtual ExprType get_type() = 0;
      virtual ExprValue accept(ExprVisitor* visitor) = 0;
    };

    class Literal : public Expr {
    public:
      Literal(double value) : value(value) {}

      virtual ExprType get_type();
      virtual ExprValue accept(ExprVisitor* visitor);

      double value;
    };

    class ExprVisitor {
    public:
      virtual ~ExprVisitor() {}
      virtual ExprValue visit_LiteralExpr(Literal* literal) = 0;
    };

    #endif // EXPR_H_
    "#);
}

#[test]
fn literal_definition() {
    let res = definition("Expression", &["Literal := double value"]);

    insta::assert_snapshot!(res, @r#"
    // Auto generated code, don't modify manually.
    #include "expr.h"

    ExprValue Literal::accept(ExprVisitor* visitor) {
      return visitor->visit_LiteralExpr(this);
    }

    ExprType Literal::get_type() {
      return LITERAL;
    }
    "#);
}

#[test]
fn statement_declaration() {
    let res = declaration(
        "Statement",
        &[
            "Block := std::vector<Stmt*> statements",
            "Var := Token name, Expr* initializer",
        ],
    );

    insta::assert_snapshot!(res, @r#"
    #ifndef STMT_H_
    #define STMT_H_

    // Auto generated code, don't modify manually.
    #include <vector>
    #include "expr.h"
    #include "token.h"

    class StmtVisitor;

    class Stmt {
    public:
      virtual ~Stmt() {}
      virtual void accept(StmtVisitor* visitor) = 0;
    };

    class Block : public Stmt {
    public:
      Block(std::vector<Stmt*> statements) : statements(statements) {}
      virtual ~Block() {
        for (Stmt* node : statements)
          delete node;
      }

      virtual void accept(StmtVisitor* visitor);

      std::vector<Stmt*> statements;
    };

    class Var : public Stmt {
    public:
      Var(Token name, Expr* initializer) : name(name), initializer(initializer) {}
      virtual ~Var() {
        delete initializer;
      }

      virtual void accept(StmtVisitor* visitor);

      Token name;
      Expr* initializer;
    };

    class StmtVisitor {
    public:
      virtual ~StmtVisitor() {}
      virtual void visit_BlockStmt(Block* block) = 0;
      virtual void visit_VarStmt(Var* var) = 0;
    };

    #endif // STMT_H_
    "#);
}

#[test]
fn statement_definition() {
    let res = definition("Stmt", &["Print := Expr* expression"]);

    insta::assert_snapshot!(res, @r#"
    // Auto generated code, don't modify manually.
    #include "stmt.h"

    void Print::accept(StmtVisitor* visitor) {
      visitor->visit_PrintStmt(this);
    }
    "#);
}

#[test]
fn binary_destructor_skips_token() {
    let res = declaration("Expr", &["Binary := Expr* left, Token op, Expr* right"]);

    let expected = indoc! {"
        class Binary : public Expr {
        public:
          Binary(Expr* left, Token op, Expr* right) : left(left), op(op), right(right) {}
          virtual ~Binary() {
            delete left;
            delete right;
          }

          virtual ExprType get_type();
          virtual ExprValue accept(ExprVisitor* visitor);

          Expr* left;
          Token op;
          Expr* right;
        };
    "};
    assert!(res.contains(expected), "unexpected class layout:\n{res}");
}

#[test]
fn value_only_types_get_no_destructor() {
    let res = declaration(
        "Expr",
        &["Variable := Token name", "PrimitiveBool := bool value"],
    );

    assert!(!res.contains("~Variable"));
    assert!(!res.contains("~PrimitiveBool"));
    assert!(!res.contains("delete"));
}

#[test]
fn constructor_follows_field_order() {
    let res = declaration("Expr", &["Call := Expr* callee, Token paren, double arity"]);

    assert!(res.contains(
        "  Call(Expr* callee, Token paren, double arity) : callee(callee), paren(paren), arity(arity) {}\n"
    ));
    assert!(res.contains("  Expr* callee;\n  Token paren;\n  double arity;\n};\n"));
}

#[test]
fn kind_enum_precedes_base_and_visitor_comes_last() {
    let res = declaration("Expr", grammar::EXPRESSIONS);

    let kind_enum = res.find("enum ExprType {").unwrap();
    let base = res.find("class Expr {").unwrap();
    let first_node = res.find("class Assign : public Expr {").unwrap();
    let visitor = res.find("class ExprVisitor {").unwrap();
    assert!(kind_enum < base);
    assert!(base < first_node);
    assert!(first_node < visitor);
    assert!(res.trim_end().ends_with("#endif // EXPR_H_"));
}

#[test]
fn kind_enum_lists_every_tag_once() {
    let res = declaration("Expr", grammar::EXPRESSIONS);

    for entry in grammar::EXPRESSIONS {
        let name = entry.split(":=").next().unwrap().trim();
        let tag = format!("  {},\n", name.to_ascii_uppercase());
        assert_eq!(res.matches(&tag).count(), 1, "tag for {name}");
    }
}

#[test]
fn definitions_delegate_to_matching_visitor_method() {
    let res = definition("Expr", grammar::EXPRESSIONS);

    assert!(res.contains(indoc! {"
        ExprValue Assign::accept(ExprVisitor* visitor) {
          return visitor->visit_AssignExpr(this);
        }
    "}));
    assert!(res.contains(indoc! {"
        ExprType PrimitiveNil::get_type() {
          return PRIMITIVENIL;
        }
    "}));
    assert_eq!(res.matches("::accept(").count(), grammar::EXPRESSIONS.len());
    assert_eq!(res.matches("::get_type()").count(), grammar::EXPRESSIONS.len());
}

#[test]
fn statements_have_no_kind_tags() {
    let header = declaration("Stmt", grammar::STATEMENTS);
    let source = definition("Stmt", grammar::STATEMENTS);

    assert!(!header.contains("get_type"));
    assert!(!header.contains("ExprValue"));
    assert!(!source.contains("get_type"));
}

#[test]
fn output_ends_with_single_newline() {
    let res = definition("Stmt", grammar::STATEMENTS);

    assert!(res.ends_with("}\n"));
    assert!(!res.ends_with("\n\n"));
}

#[test]
fn banner_can_be_disabled() {
    let config = Config::new().banner(false);
    let h = hierarchy_with("Stmt", &["Print := Expr* expression"], &config);

    let header = Emitter::new(&h, &config).emit_declaration();
    let source = Emitter::new(&h, &config).emit_definition();

    assert!(!header.contains("Auto generated"));
    assert!(source.starts_with("#include \"stmt.h\"\n\n"));
}

#[test]
fn renamed_value_type_is_used_everywhere() {
    let config = Config::new().value_type("LoxValue").kind_enum("ExprKind");
    let h = hierarchy_with("Expr", &["Literal := double value"], &config);

    let header = Emitter::new(&h, &config).emit_declaration();
    let source = Emitter::new(&h, &config).emit_definition();

    assert!(header.contains("struct LoxValue {"));
    assert!(header.contains("bool operator==(const LoxValue& other) const {"));
    assert!(header.contains("enum ExprKind {"));
    assert!(header.contains("virtual LoxValue visit_LiteralExpr(Literal* literal) = 0;"));
    assert!(source.contains("LoxValue Literal::accept(ExprVisitor* visitor) {"));
    assert!(source.contains("ExprKind Literal::get_type() {"));
    assert!(!header.contains("ExprValue"));
}

#[test]
fn rendering_is_deterministic() {
    let config = Config::default();
    let h = hierarchy("Expr", grammar::EXPRESSIONS);

    let first = Emitter::new(&h, &config).emit_declaration();
    let second = Emitter::new(&h, &config).emit_declaration();
    assert_eq!(first, second);
    assert_eq!(first, declaration("Expr", grammar::EXPRESSIONS));
}

//! Declaration artifact (`.h`) rendering.

use astgen_core::ValueKind;

use super::Emitter;
use crate::hierarchy::{NodeType, Release};

impl Emitter<'_> {
    /// Render the header: guard, includes, kind enum and value struct
    /// (expressions only), visitor forward declaration, abstract base,
    /// concrete types, visitor interface.
    pub fn emit_declaration(mut self) -> String {
        let h = self.hierarchy;
        let guard = h.family.include_guard();

        self.line(&format!("#ifndef {guard}"));
        self.line(&format!("#define {guard}"));
        self.blank();

        let preamble_start = self.output.len();
        self.emit_banner();
        self.emit_includes();
        if self.output.len() > preamble_start {
            self.blank();
        }

        if h.kinds.is_some() {
            self.emit_kind_enum();
        }
        if h.value_type.is_some() {
            self.emit_value_struct();
        }

        self.line(&format!("class {};", h.visitor.name));
        self.blank();

        self.emit_base_class();
        for node in &h.nodes {
            self.emit_node_class(node);
        }
        self.emit_visitor();

        self.line(&format!("#endif // {guard}"));
        self.finish()
    }

    fn emit_includes(&mut self) {
        let h = self.hierarchy;
        for header in &h.includes.system {
            self.line(&format!("#include <{header}>"));
        }
        for header in &h.includes.local {
            self.line(&format!("#include \"{header}\""));
        }
    }

    fn emit_kind_enum(&mut self) {
        let h = self.hierarchy;
        let Some(kinds) = &h.kinds else {
            return;
        };
        self.line(&format!("enum {} {{", kinds.name));
        for tag in &kinds.tags {
            self.line(&format!("  {tag},"));
        }
        self.line("};");
        self.blank();
    }

    fn emit_value_struct(&mut self) {
        let h = self.hierarchy;
        let Some(name) = &h.value_type else {
            return;
        };

        let tags = ValueKind::ALL
            .iter()
            .map(|k| k.tag())
            .collect::<Vec<_>>()
            .join(", ");
        self.line(&format!("enum {} {{ {} }};", ValueKind::ENUM_NAME, tags));
        self.blank();

        self.line(&format!("struct {name} {{"));
        for kind in ValueKind::ALL {
            self.line(&format!("  {} {};", kind.cpp_type(), kind.member()));
        }
        self.line(&format!("  {} type;", ValueKind::ENUM_NAME));
        self.blank();

        let inits = ValueKind::ALL
            .iter()
            .map(|k| format!("{}({})", k.member(), k.zero()))
            .chain(std::iter::once(format!("type({})", ValueKind::default().tag())))
            .collect::<Vec<_>>()
            .join(", ");
        self.line(&format!("  {name}()"));
        self.line(&format!("      : {inits} {{}}"));
        self.blank();

        self.line(&format!("  bool operator==(const {name}& other) const {{"));
        self.line("    if (type != other.type)");
        self.line("      return false;");
        self.line("    switch (type) {");
        for kind in ValueKind::ALL {
            self.line(&format!("    case {}:", kind.tag()));
            match kind {
                ValueKind::Nil => self.line("      return true;"),
                _ => self.line(&format!(
                    "      return {m} == other.{m};",
                    m = kind.member()
                )),
            }
        }
        self.line("    }");
        self.line("    return false;");
        self.line("  }");
        self.line("};");
        self.blank();
    }

    fn emit_base_class(&mut self) {
        let h = self.hierarchy;
        self.line(&format!("class {} {{", h.base));
        self.line("public:");
        self.line(&format!("  virtual ~{}() {{}}", h.base));
        if let Some(kinds) = &h.kinds {
            self.line(&format!("  virtual {} get_type() = 0;", kinds.name));
        }
        self.line(&format!(
            "  virtual {} accept({}* visitor) = 0;",
            h.return_type, h.visitor.name
        ));
        self.line("};");
        self.blank();
    }

    fn emit_node_class(&mut self, node: &NodeType) {
        let h = self.hierarchy;

        self.line(&format!("class {} : public {} {{", node.name, h.base));
        self.line("public:");

        let params = node
            .fields
            .iter()
            .map(|f| f.declaration())
            .collect::<Vec<_>>()
            .join(", ");
        let inits = node
            .fields
            .iter()
            .map(|f| format!("{0}({0})", f.name))
            .collect::<Vec<_>>()
            .join(", ");
        self.line(&format!("  {}({}) : {} {{}}", node.name, params, inits));

        if node.has_destructor() {
            self.line(&format!("  virtual ~{}() {{", node.name));
            for release in &node.releases {
                match release {
                    Release::Node { field } => self.line(&format!("    delete {field};")),
                    Release::Each { field, element } => {
                        self.line(&format!("    for ({element} node : {field})"));
                        self.line("      delete node;");
                    }
                }
            }
            self.line("  }");
        }
        self.blank();

        if let Some(kinds) = &h.kinds {
            self.line(&format!("  virtual {} get_type();", kinds.name));
        }
        self.line(&format!(
            "  virtual {} accept({}* visitor);",
            h.return_type, h.visitor.name
        ));
        self.blank();

        for field in &node.fields {
            self.line(&format!("  {};", field.declaration()));
        }
        self.line("};");
        self.blank();
    }

    fn emit_visitor(&mut self) {
        let h = self.hierarchy;
        self.line(&format!("class {} {{", h.visitor.name));
        self.line("public:");
        self.line(&format!("  virtual ~{}() {{}}", h.visitor.name));
        for method in &h.visitor.methods {
            self.line(&format!(
                "  virtual {} {}({}* {}) = 0;",
                h.return_type, method.name, method.node, method.param
            ));
        }
        self.line("};");
        self.blank();
    }
}

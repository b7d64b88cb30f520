//! Definition artifact (`.cc`) rendering.

use super::Emitter;

impl Emitter<'_> {
    /// Render the out-of-line `accept` (and, for expressions, `get_type`)
    /// body of every concrete type.
    pub fn emit_definition(mut self) -> String {
        let h = self.hierarchy;

        self.emit_banner();
        self.line(&format!("#include \"{}\"", h.family.header_file()));
        self.blank();

        let call_prefix = if h.family.returns_value() { "return " } else { "" };

        for node in &h.nodes {
            self.line(&format!(
                "{} {}::accept({}* visitor) {{",
                h.return_type, node.name, h.visitor.name
            ));
            self.line(&format!(
                "  {}visitor->{}(this);",
                call_prefix, node.visit_method
            ));
            self.line("}");
            self.blank();

            if let (Some(kinds), Some(tag)) = (&h.kinds, &node.kind_tag) {
                self.line(&format!("{} {}::get_type() {{", kinds.name, node.name));
                self.line(&format!("  return {tag};"));
                self.line("}");
                self.blank();
            }
        }

        self.finish()
    }
}

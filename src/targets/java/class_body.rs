//! Renders a [`GeneratedSource`] to Java text.
//!
//! Rendering is the final, isolated stage: everything order-sensitive was
//! settled when the source record was built, so this module is pure string
//! layout. Members indent four spaces per level; every member is followed by
//! one blank line except the last.

use crate::code_writer::CodeWriter;
use crate::source::GeneratedSource;

use super::types::capitalize_first;

impl GeneratedSource {
    /// Render the complete compilation unit.
    pub fn render(&self) -> String {
        let mut w = CodeWriter::with_indent_spaces(4);

        if !self.package.is_empty() {
            w.writeln(&format!("package {};", self.package));
            w.blank_line();
        }
        for import in self.imports.lines() {
            w.writeln(&format!("import {import};"));
        }
        w.blank_line();

        w.doc_comment(&format!(
            "Auto-generated DTO class for {}",
            self.source_entity
        ));
        w.writeln(&format!(
            "public class {} implements Serializable {{",
            self.class_name
        ));
        {
            let _indent = w.indent();
            self.render_fields(&mut w);
            self.render_constructors(&mut w);
            self.render_accessors(&mut w);
            self.render_equals(&mut w);
            self.render_hash_code(&mut w);
            self.render_to_string(&mut w);
        }
        w.writeln("}");

        w.into_string()
    }

    fn render_fields(&self, w: &mut CodeWriter) {
        for field in &self.fields {
            for annotation in &field.annotations {
                w.writeln(annotation);
            }
            w.writeln(&format!("private {} {};", field.ty, field.name));
            w.blank_line();
        }
    }

    fn render_constructors(&self, w: &mut CodeWriter) {
        w.writeln(&format!("public {}() {{", self.class_name));
        w.writeln("}");
        w.blank_line();

        // With no fields the all-args form would collide with the no-arg
        // constructor, so it is only emitted when there is something to set.
        if self.fields.is_empty() {
            return;
        }
        w.writeln(&format!("public {}(", self.class_name));
        {
            let _indent = w.indent();
            let params: Vec<String> = self
                .fields
                .iter()
                .map(|f| format!("{} {}", f.ty, f.name))
                .collect();
            w.write_separated_lines(&params, ",");
        }
        w.writeln(") {");
        {
            let _indent = w.indent();
            for field in &self.fields {
                w.writeln(&format!("this.{0} = {0};", field.name));
            }
        }
        w.writeln("}");
        w.blank_line();
    }

    fn render_accessors(&self, w: &mut CodeWriter) {
        for field in &self.fields {
            let accessor = capitalize_first(&field.name);
            w.block(&format!("public {} get{accessor}()", field.ty), |w| {
                w.writeln(&format!("return {};", field.name));
            });
            w.blank_line();
            w.block(
                &format!("public void set{accessor}({} {})", field.ty, field.name),
                |w| {
                    w.writeln(&format!("this.{0} = {0};", field.name));
                },
            );
            w.blank_line();
        }
    }

    fn render_equals(&self, w: &mut CodeWriter) {
        w.writeln("@Override");
        w.block("public boolean equals(Object obj)", |w| {
            w.writeln("if (this == obj) return true;");
            w.writeln("if (obj == null || getClass() != obj.getClass()) return false;");
            if self.fields.is_empty() {
                // No state to compare beyond the class check.
                w.writeln("return true;");
                return;
            }
            w.writeln(&format!("{0} that = ({0}) obj;", self.class_name));
            w.writeln("return");
            let _outer = w.indent();
            let _inner = w.indent();
            let last = self.fields.len() - 1;
            for (i, field) in self.fields.iter().enumerate() {
                let terminator = if i < last { " &&" } else { ";" };
                w.writeln(&format!(
                    "Objects.equals({0}, that.{0}){terminator}",
                    field.name
                ));
            }
        });
        w.blank_line();
    }

    fn render_hash_code(&self, w: &mut CodeWriter) {
        w.writeln("@Override");
        w.block("public int hashCode()", |w| {
            w.writeln("return Objects.hash(");
            {
                let _indent = w.indent();
                let names: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
                w.write_separated_lines(names, ",");
            }
            w.writeln(");");
        });
        w.blank_line();
    }

    fn render_to_string(&self, w: &mut CodeWriter) {
        w.writeln("@Override");
        w.block("public String toString()", |w| {
            w.writeln(&format!("return \"{}{{\" +", self.class_name));
            let _outer = w.indent();
            let _inner = w.indent();
            let last = self.fields.len().saturating_sub(1);
            for (i, field) in self.fields.iter().enumerate() {
                let joiner = if i < last { " + \",\" +" } else { " +" };
                w.writeln(&format!("\"{0}=\" + {0}{joiner}", field.name));
            }
            w.writeln("'}';");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FieldDecl;
    use crate::targets::java::imports::ImportBlock;

    fn source_with_fields(fields: Vec<FieldDecl>) -> GeneratedSource {
        GeneratedSource {
            package: "com.example.dto".into(),
            source_entity: "com.example.User".into(),
            class_name: "UserDTO".into(),
            imports: ImportBlock::default(),
            fields,
        }
    }

    fn field(name: &str, ty: &str) -> FieldDecl {
        FieldDecl {
            name: name.into(),
            ty: ty.into(),
            annotations: vec![format!("@JsonProperty(\"{name}\")")],
        }
    }

    #[test]
    fn zero_field_class_still_renders_every_section() {
        let rendered = source_with_fields(Vec::new()).render();

        assert!(rendered.contains("public UserDTO() {\n    }"));
        // No all-args constructor to collide with the no-arg one.
        assert!(!rendered.contains("public UserDTO(\n"));
        assert!(rendered.contains("return true;"));
        assert!(rendered.contains("return Objects.hash(\n        );"));
        assert!(rendered.contains("return \"UserDTO{\" +\n                '}';"));
    }

    #[test]
    fn members_follow_field_order() {
        let rendered =
            source_with_fields(vec![field("id", "Long"), field("username", "String")]).render();

        let decl_id = rendered.find("private Long id;").unwrap();
        let decl_username = rendered.find("private String username;").unwrap();
        assert!(decl_id < decl_username);

        assert!(rendered.contains("        Long id,\n        String username\n    ) {"));
        assert!(rendered.contains("    public Long getId() {\n        return id;\n    }"));
        assert!(rendered.contains(
            "                Objects.equals(id, that.id) &&\n                Objects.equals(username, that.username);"
        ));
        assert!(rendered.contains("            id,\n            username\n        );"));
        assert!(rendered.contains(
            "                \"id=\" + id + \",\" +\n                \"username=\" + username +\n                '}';"
        ));
    }

    #[test]
    fn empty_package_omits_the_package_line() {
        let mut source = source_with_fields(Vec::new());
        source.package.clear();
        let rendered = source.render();
        assert!(!rendered.contains("package "));
        assert!(rendered.starts_with("import com.fasterxml.jackson.annotation.JsonProperty;"));
    }
}

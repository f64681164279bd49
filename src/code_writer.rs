//! Code writer with automatic indentation tracking.
//!
//! Builds generated source into an owned `String`, so every render stage is
//! infallible and the emitter composes immutable text fragments without
//! threading error plumbing through each helper.
//!
//! - **RAII-based indentation**: `indent()` returns a guard that restores the
//!   previous level on drop
//! - **No borrow checker fights**: the level lives in an `Rc<Cell<usize>>`,
//!   so guards don't conflict with mutable writes
//! - **Block helper** for brace-delimited bodies
//!
//! ```
//! use dto_codegen::code_writer::CodeWriter;
//!
//! let mut w = CodeWriter::with_indent_spaces(4);
//! w.writeln("public class Example {");
//! {
//!     let _indent = w.indent();
//!     w.writeln("private long value;");
//! }
//! w.writeln("}");
//! assert_eq!(
//!     w.into_string(),
//!     "public class Example {\n    private long value;\n}\n"
//! );
//! ```

use std::cell::Cell;
use std::rc::Rc;

/// Tracks indentation while appending lines of generated source.
pub struct CodeWriter {
    out: String,
    indent_level: Rc<Cell<usize>>,
    indent_string: String,
    at_line_start: bool,
}

impl CodeWriter {
    /// Create a writer with the given indent string (e.g. "    " or "\t").
    pub fn new(indent_string: impl Into<String>) -> Self {
        Self {
            out: String::new(),
            indent_level: Rc::new(Cell::new(0)),
            indent_string: indent_string.into(),
            at_line_start: true,
        }
    }

    /// Create a writer indenting with the given number of spaces.
    pub fn with_indent_spaces(spaces: usize) -> Self {
        Self::new(" ".repeat(spaces))
    }

    /// Write text without a newline. Adds indentation if at line start.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start && !text.trim().is_empty() {
            for _ in 0..self.indent_level.get() {
                self.out.push_str(&self.indent_string);
            }
            self.at_line_start = false;
        }
        self.out.push_str(text);
    }

    /// Write text followed by a newline.
    pub fn writeln(&mut self, text: &str) {
        self.write(text);
        self.out.push('\n');
        self.at_line_start = true;
    }

    /// Write an empty line.
    pub fn blank_line(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }

    /// Create an indentation guard. Indentation increases while it is alive.
    pub fn indent(&mut self) -> IndentGuard {
        self.indent_level.set(self.indent_level.get() + 1);
        IndentGuard {
            indent_level: Rc::clone(&self.indent_level),
        }
    }

    /// Write a complete brace-delimited block with a closure for the body.
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.writeln(&format!("{header} {{"));
        {
            let _indent = self.indent();
            body(self);
        }
        self.writeln("}");
    }

    /// Write a doc comment block, one prefixed line per input line.
    pub fn doc_comment(&mut self, text: &str) {
        self.writeln("/**");
        for line in text.lines() {
            self.writeln(&format!(" * {line}"));
        }
        self.writeln(" */");
    }

    /// Write items one per line, a separator suffixed to all but the last.
    pub fn write_separated_lines<I>(&mut self, items: I, separator: &str)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let items: Vec<_> = items.into_iter().collect();
        let last = items.len().saturating_sub(1);
        for (i, item) in items.iter().enumerate() {
            if i < last {
                self.writeln(&format!("{}{separator}", item.as_ref()));
            } else {
                self.writeln(item.as_ref());
            }
        }
    }

    /// Consume the writer and return the accumulated source.
    pub fn into_string(self) -> String {
        self.out
    }
}

/// RAII guard that maintains indentation level.
pub struct IndentGuard {
    indent_level: Rc<Cell<usize>>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        let current = self.indent_level.get();
        self.indent_level.set(current.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_writing() {
        let mut w = CodeWriter::with_indent_spaces(2);
        w.writeln("hello");
        w.writeln("world");
        assert_eq!(w.into_string(), "hello\nworld\n");
    }

    #[test]
    fn indentation_nests_and_unwinds() {
        let mut w = CodeWriter::with_indent_spaces(2);
        w.writeln("level 0");
        {
            let _indent = w.indent();
            w.writeln("level 1");
            {
                let _indent = w.indent();
                w.writeln("level 2");
            }
            w.writeln("level 1 again");
        }
        w.writeln("level 0 again");

        assert_eq!(
            w.into_string(),
            "level 0\n  level 1\n    level 2\n  level 1 again\nlevel 0 again\n"
        );
    }

    #[test]
    fn block_helper() {
        let mut w = CodeWriter::with_indent_spaces(4);
        w.block("public class Foo", |w| {
            w.writeln("private int x;");
        });
        assert_eq!(
            w.into_string(),
            "public class Foo {\n    private int x;\n}\n"
        );
    }

    #[test]
    fn doc_comment_block() {
        let mut w = CodeWriter::with_indent_spaces(4);
        w.doc_comment("Auto-generated DTO class for com.example.User");
        assert_eq!(
            w.into_string(),
            "/**\n * Auto-generated DTO class for com.example.User\n */\n"
        );
    }

    #[test]
    fn separated_lines_suffix_all_but_last() {
        let mut w = CodeWriter::with_indent_spaces(2);
        {
            let _indent = w.indent();
            w.write_separated_lines(["Long id", "String name"], ",");
        }
        assert_eq!(w.into_string(), "  Long id,\n  String name\n");
    }

    #[test]
    fn blank_lines_carry_no_indentation() {
        let mut w = CodeWriter::with_indent_spaces(2);
        let _indent = w.indent();
        w.writeln("line 1");
        w.blank_line();
        w.writeln("line 2");
        drop(_indent);
        assert_eq!(w.into_string(), "  line 1\n\n  line 2\n");
    }
}

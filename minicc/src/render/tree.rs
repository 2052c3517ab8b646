use std::fmt::Write;

use crate::ir::ast;

use super::Renderer;

pub struct TreeRenderer {
    indent: usize,
}

impl Renderer for TreeRenderer {
    fn render(&self, root: &ast::Node) -> String {
        let mut out = String::new();
        self.render_node(root, 0, &mut out);
        out
    }
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    fn render_node(&self, node: &ast::Node, level: usize, out: &mut String) {
        let pad = " ".repeat(level * self.indent);
        // Запись в String не может упасть
        let _ = match &node.value {
            Some(value) => writeln!(out, "{}{} {}", pad, node.kind, value),
            None => writeln!(out, "{}{}", pad, node.kind),
        };

        for child in &node.children {
            self.render_node(child, level + 1, out);
        }
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

use crate::ir::ast;

use super::Renderer;

pub struct DebugRenderer;

impl Renderer for DebugRenderer {
    fn render(&self, root: &ast::Node) -> String {
        format!("{:#?}", root)
    }
}

pub mod debug;
pub mod tree;

use crate::ir::ast;

pub trait Renderer {
    fn render(&self, root: &ast::Node) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Tree,
    Debug,
}

impl RenderFormat {
    pub fn all() -> Vec<Self> {
        vec![Self::Tree, Self::Debug]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Debug => "debug",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Tree => "Indented outline, one node per line",
            Self::Debug => "Rust debug representation of the nodes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|format| format.name() == name)
    }

    pub fn create(&self) -> Box<dyn Renderer> {
        match self {
            Self::Tree => Box::new(tree::TreeRenderer::new()),
            Self::Debug => Box::new(debug::DebugRenderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(RenderFormat::from_name("tree"), Some(RenderFormat::Tree));
        assert_eq!(RenderFormat::from_name("debug"), Some(RenderFormat::Debug));
        assert_eq!(RenderFormat::from_name("json"), None);
    }
}

pub mod config;
pub mod error;
pub mod ir;
pub mod parser;
pub mod render;
pub mod span;

pub use config::{Config, Frontend};
pub use error::CompileError;
pub use ir::ast::{Node, NodeKind};
pub use parser::lexer::{Token, TokenKind};

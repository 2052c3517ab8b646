use crate::error::CompileError;
use crate::ir::ast::Node;
use crate::parser::lexer::{Lexer, Token};
use crate::parser::parser::Parser;

/// Options fixed when a [`Frontend`] is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Trace every classified token (and matched node) to stderr.
    pub verbose: bool,
}

/// Lexer and parser behind one handle, sharing one [`Config`].
///
/// Calls don't affect each other: every `lex` and `parse` works only on
/// its own input.
#[derive(Debug, Clone, Default)]
pub struct Frontend {
    config: Config,
}

impl Frontend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lex(&self, source: &str) -> Result<Vec<Token>, CompileError> {
        Lexer::new(self.config.verbose).tokenize(source)
    }

    pub fn parse(&self, tokens: Vec<Token>) -> Result<Node, CompileError> {
        Parser::new(tokens, self.config.verbose).parse_program()
    }
}

use thiserror::Error;

use crate::span::Span;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Unexpected syntax '{text}' at line {}, column {}", span.line, span.column)]
    LexerError { text: String, span: Span },

    #[error("Syntax error: {message}")]
    SyntaxError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CompileError {
    pub fn is_lex_error(&self) -> bool {
        matches!(self, Self::LexerError { .. })
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::SyntaxError { .. })
    }
}

pub mod lexer;
pub mod parser;

use crate::config::Config;
use crate::error::CompileError;
use crate::ir::ast;

/// Главная функция парсера - из текста в AST
pub fn parse(source: &str, config: &Config) -> Result<ast::Node, CompileError> {
    let tokens = lexer::Lexer::new(config.verbose).tokenize(source)?;
    let program = parser::Parser::new(tokens, config.verbose).parse_program()?;
    Ok(program)
}

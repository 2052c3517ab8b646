use std::collections::VecDeque;

use super::lexer::{Token, TokenKind};
use crate::error::CompileError;
use crate::ir::ast::{Node, NodeKind};

type Builder = fn(&[Token]) -> Result<Node, CompileError>;

/// Tried in order against the whole pending buffer. A pattern only matches
/// when the pending kinds are exactly equal to it.
const PATTERNS: &[(&[TokenKind], Builder)] = &[
    (
        &[
            TokenKind::KeywordInt,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
        ],
        build_function,
    ),
    (&[TokenKind::KeywordReturn], build_return),
    (&[TokenKind::Constant], build_constant),
];

fn build_function(tokens: &[Token]) -> Result<Node, CompileError> {
    let name = value_of(tokens, TokenKind::Identifier)?;
    Ok(Node::with_value(NodeKind::Function, name))
}

fn build_return(_tokens: &[Token]) -> Result<Node, CompileError> {
    Ok(Node::new(NodeKind::Return))
}

fn build_constant(tokens: &[Token]) -> Result<Node, CompileError> {
    let literal = value_of(tokens, TokenKind::Constant)?;
    Ok(Node::with_value(NodeKind::Constant, literal))
}

fn value_of(tokens: &[Token], kind: TokenKind) -> Result<String, CompileError> {
    tokens
        .iter()
        .find(|token| token.kind == kind)
        .and_then(|token| token.value.clone())
        .ok_or_else(|| CompileError::SyntaxError {
            message: format!("{} token has no value", kind),
        })
}

pub fn parse_tokens(tokens: Vec<Token>) -> Result<Node, CompileError> {
    Parser::new(tokens, false).parse_program()
}

/// Builds the tree by matching the tokens read so far against [`PATTERNS`].
///
/// Every matched node is attached under the previously matched one and
/// becomes the new insertion point, so the tree is a single chain:
/// `PROGRAM -> FUNCTION -> RETURN -> CONSTANT`. Insertion never climbs back
/// up, which limits the grammar to one function holding one statement.
pub struct Parser {
    input: VecDeque<Token>,
    pending: Vec<Token>,
    // Matched nodes from the root down; the last one is the insertion point.
    spine: Vec<Node>,
    verbose: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, verbose: bool) -> Self {
        Self {
            input: tokens.into(),
            pending: Vec::new(),
            spine: vec![Node::new(NodeKind::Program)],
            verbose,
        }
    }

    pub fn parse_program(mut self) -> Result<Node, CompileError> {
        while let Some(token) = self.input.pop_front() {
            self.pending.push(token);

            if let Some(build) = self.match_pending() {
                let node = build(&self.pending)?;
                if self.verbose {
                    eprintln!("Node: {}", node.kind);
                }
                self.spine.push(node);
                self.pending.clear();
            }
        }

        // Хвост без совпадений (обычно `;` и `}`) просто отбрасываем
        if self.verbose {
            for token in &self.pending {
                eprintln!("Dropped: {}", token);
            }
        }

        Ok(fold_spine(self.spine))
    }

    fn match_pending(&self) -> Option<Builder> {
        PATTERNS
            .iter()
            .find(|(pattern, _)| {
                pattern.len() == self.pending.len()
                    && pattern
                        .iter()
                        .zip(&self.pending)
                        .all(|(kind, token)| *kind == token.kind)
            })
            .map(|&(_, build)| build)
    }
}

/// Hangs every node under the one before it and returns the root.
fn fold_spine(spine: Vec<Node>) -> Node {
    spine
        .into_iter()
        .rev()
        .reduce(|child, mut parent| {
            parent.children.push(child);
            parent
        })
        .unwrap_or_else(|| Node::new(NodeKind::Program))
}

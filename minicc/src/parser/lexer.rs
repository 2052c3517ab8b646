use std::fmt;

use crate::error::CompileError;
use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Ключевые слова
    KeywordInt,
    KeywordReturn,
    // Идентификаторы и литералы
    Identifier,
    Constant,
    // Скобки
    OpenParen,  // (
    CloseParen, // )
    OpenBrace,  // {
    CloseBrace, // }
    Semicolon,  // ;
}

impl TokenKind {
    /// Only identifiers and constants keep the matched text.
    pub fn carries_value(self) -> bool {
        matches!(self, Self::Identifier | Self::Constant)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::KeywordInt => "KEYWORD_INT",
            Self::KeywordReturn => "KEYWORD_RETURN",
            Self::Identifier => "IDENTIFIER",
            Self::Constant => "CONSTANT",
            Self::OpenParen => "OPEN_PAREN",
            Self::CloseParen => "CLOSE_PAREN",
            Self::OpenBrace => "OPEN_BRACE",
            Self::CloseBrace => "CLOSE_BRACE",
            Self::Semicolon => "SEMICOLON",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self { kind, value: None }
    }

    pub fn with_value(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({})", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

type Recognizer = fn(&str) -> bool;

/// Tried top to bottom, the first recognizer that accepts the text wins.
/// IDENTIFIER has to stay last: it also accepts `int` and `return`.
const CLASSIFIERS: &[(TokenKind, Recognizer)] = &[
    (TokenKind::KeywordInt, is_int),
    (TokenKind::KeywordReturn, is_return),
    (TokenKind::OpenParen, is_open_paren),
    (TokenKind::CloseParen, is_close_paren),
    (TokenKind::OpenBrace, is_open_brace),
    (TokenKind::CloseBrace, is_close_brace),
    (TokenKind::Semicolon, is_semicolon),
    (TokenKind::Constant, is_digits),
    (TokenKind::Identifier, is_letters),
];

fn is_int(text: &str) -> bool {
    text == "int"
}

fn is_return(text: &str) -> bool {
    text == "return"
}

fn is_open_paren(text: &str) -> bool {
    text == "("
}

fn is_close_paren(text: &str) -> bool {
    text == ")"
}

fn is_open_brace(text: &str) -> bool {
    text == "{"
}

fn is_close_brace(text: &str) -> bool {
    text == "}"
}

fn is_semicolon(text: &str) -> bool {
    text == ";"
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_letters(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '(' | ')' | '{' | '}' | ';')
}

/// Kind of the first classifier that accepts `text`, if any.
pub fn classify(text: &str) -> Option<TokenKind> {
    CLASSIFIERS
        .iter()
        .find(|(_, recognizes)| recognizes(text))
        .map(|&(kind, _)| kind)
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    Lexer::new(false).tokenize(source)
}

pub struct Lexer {
    verbose: bool,
}

impl Lexer {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Splits `source` on delimiters and classifies every piece. Whitespace
    /// only separates; every other delimiter becomes a token of its own.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();
        // Start of the text accumulated since the last delimiter.
        let mut buffer: Option<Span> = None;
        let mut line = 1;
        let mut column = 1;

        for (offset, ch) in source.char_indices() {
            if is_delimiter(ch) {
                if let Some(start) = buffer.take() {
                    let span = Span { end: offset, ..start };
                    tokens.push(self.lex_text(source, span)?);
                }
                if !ch.is_whitespace() {
                    let span = Span {
                        line,
                        column,
                        start: offset,
                        end: offset + ch.len_utf8(),
                    };
                    tokens.push(self.lex_text(source, span)?);
                }
            } else if buffer.is_none() {
                buffer = Some(Span {
                    line,
                    column,
                    start: offset,
                    end: offset,
                });
            }

            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        if let Some(start) = buffer {
            let span = Span {
                end: source.len(),
                ..start
            };
            tokens.push(self.lex_text(source, span)?);
        }

        Ok(tokens)
    }

    fn lex_text(&self, source: &str, span: Span) -> Result<Token, CompileError> {
        let text = &source[span.start..span.end];
        if self.verbose {
            eprintln!("Token: {}", text);
        }

        match classify(text) {
            Some(kind) if kind.carries_value() => Ok(Token::with_value(kind, text)),
            Some(kind) => Ok(Token::new(kind)),
            None => Err(CompileError::LexerError {
                text: text.to_string(),
                span,
            }),
        }
    }
}

use minicc::parser;
use minicc::{CompileError, Config, Frontend, Node, NodeKind, Token, TokenKind};

const RETURN_2: &str = "\nint main() {\n  return 2;\n}\n";

/// Walks the single-child chain from the root and returns `(kind, value)` pairs.
fn chain(root: &Node) -> Vec<(NodeKind, Option<String>)> {
    let mut out = Vec::new();
    let mut node = Some(root);
    while let Some(current) = node {
        assert!(current.children.len() <= 1, "{:?} has siblings", current.kind);
        out.push((current.kind, current.value.clone()));
        node = current.children.first();
    }
    out
}

#[test]
fn test_lex_return_2() {
    let frontend = Frontend::default();
    let tokens = frontend.lex(RETURN_2).unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::KeywordInt),
            Token::with_value(TokenKind::Identifier, "main"),
            Token::new(TokenKind::OpenParen),
            Token::new(TokenKind::CloseParen),
            Token::new(TokenKind::OpenBrace),
            Token::new(TokenKind::KeywordReturn),
            Token::with_value(TokenKind::Constant, "2"),
            Token::new(TokenKind::Semicolon),
            Token::new(TokenKind::CloseBrace),
        ]
    );
}

#[test]
fn test_parse_return_2() {
    let frontend = Frontend::default();
    let tokens = frontend.lex(RETURN_2).unwrap();
    let program = frontend.parse(tokens).unwrap();

    assert_eq!(
        chain(&program),
        vec![
            (NodeKind::Program, None),
            (NodeKind::Function, Some("main".to_string())),
            (NodeKind::Return, None),
            (NodeKind::Constant, Some("2".to_string())),
        ]
    );
}

#[test]
fn test_well_formed_programs() {
    let frontend = Frontend::default();
    for (name, literal) in [("main", "0"), ("foo", "42"), ("Answer", "007")] {
        let source = format!("int {name}() {{ return {literal}; }}");
        let program = frontend.parse(frontend.lex(&source).unwrap()).unwrap();

        assert_eq!(program.kind, NodeKind::Program);
        assert_eq!(program.children.len(), 1);
        let function = &program.children[0];
        assert_eq!(function.kind, NodeKind::Function);
        assert_eq!(function.value.as_deref(), Some(name));
        assert_eq!(function.children.len(), 1);
        let ret = &function.children[0];
        assert_eq!(ret.kind, NodeKind::Return);
        assert_eq!(ret.children.len(), 1);
        assert_eq!(ret.children[0].kind, NodeKind::Constant);
        assert_eq!(ret.children[0].value.as_deref(), Some(literal));
    }
}

#[test]
fn test_layout_does_not_matter() {
    let frontend = Frontend::default();
    let compact = frontend.lex("int main(){return 2;}").unwrap();
    let spread = frontend.lex(" int\tmain ( )\n{\n\n return\t2 ;\n }").unwrap();
    assert_eq!(compact, spread);
    assert_eq!(compact, frontend.lex(RETURN_2).unwrap());
}

#[test]
fn test_lexing_is_deterministic() {
    let frontend = Frontend::default();
    assert_eq!(frontend.lex(RETURN_2).unwrap(), frontend.lex(RETURN_2).unwrap());
}

#[test]
fn test_verbose_does_not_change_results() {
    let quiet = Frontend::default();
    let verbose = Frontend::new(Config { verbose: true });
    assert!(verbose.config().verbose);

    let tokens = verbose.lex(RETURN_2).unwrap();
    assert_eq!(tokens, quiet.lex(RETURN_2).unwrap());
    assert_eq!(
        verbose.parse(tokens.clone()).unwrap(),
        quiet.parse(tokens).unwrap()
    );
}

#[test]
fn test_lex_error() {
    let err = Frontend::default().lex("@").unwrap_err();
    assert!(err.is_lex_error());
    assert_eq!(err.to_string(), "Unexpected syntax '@' at line 1, column 1");
}

#[test]
fn test_lex_error_inside_program() {
    let err = Frontend::default()
        .lex("int main() {\n  return 2 + 3;\n}")
        .unwrap_err();
    match err {
        CompileError::LexerError { text, span } => {
            assert_eq!(text, "+");
            assert_eq!((span.line, span.column), (2, 12));
        }
        other => panic!("Expected lexer error, got {other:?}"),
    }
}

#[test]
fn test_parse_error_without_value() {
    let tokens = vec![
        Token::new(TokenKind::KeywordInt),
        Token::new(TokenKind::Identifier),
        Token::new(TokenKind::OpenParen),
        Token::new(TokenKind::CloseParen),
        Token::new(TokenKind::OpenBrace),
        Token::new(TokenKind::KeywordReturn),
        Token::with_value(TokenKind::Constant, "2"),
    ];
    let err = Frontend::default().parse(tokens).unwrap_err();
    assert!(err.is_parse_error());
    assert!(!err.is_lex_error());
}

#[test]
fn test_parse_pipeline() {
    let program = parser::parse(RETURN_2, &Config::default()).unwrap();
    assert_eq!(program.depth(), 4);

    let err = parser::parse("int main() { return $; }", &Config::default()).unwrap_err();
    assert!(err.is_lex_error());
}

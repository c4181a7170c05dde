//! Unit tests for the lexer module.
//!
//! Covers token codes, literal limits, identifier registration and the
//! per-line diagnostic cap.

use super::{
    lexer::tokenize,
    tokens::{Token, TokenAttribute, TokenKind},
};
use crate::{
    errors::{diagnostics::Diagnostic, errors::ErrorImpl},
    symbols::{manager::ScopeManager, symbol::DataType},
};

fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>, ScopeManager) {
    let mut scopes = ScopeManager::new();
    let (tokens, diagnostics) = tokenize(source, &mut scopes);
    (tokens, diagnostics, scopes)
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn dump(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}

#[test]
fn test_tokenize_declaration() {
    let (tokens, diagnostics, scopes) = lex("let int x = 5;");

    assert_eq!(
        dump(&tokens),
        vec!["<PR_let,>", "<PR_int,>", "<cod_id,1>", "<cod_asig,>", "<cod_ce,5>", "<cod_pc,>", "<cod_eof,>"]
    );
    assert!(diagnostics.is_empty());
    assert_eq!(scopes.lookup_local("x").map(|s| s.data_type), Some(DataType::Unresolved));
}

#[test]
fn test_tokenize_reserved_words() {
    let (tokens, _, _) = lex("let function int float boolean string void if for return write read");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Function,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Boolean,
            TokenKind::String,
            TokenKind::Void,
            TokenKind::If,
            TokenKind::For,
            TokenKind::Return,
            TokenKind::Write,
            TokenKind::Read,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let (tokens, diagnostics, _) = lex("+ ! ; , ( ) { } = == %=");

    assert!(diagnostics.is_empty());
    assert_eq!(
        dump(&tokens),
        vec![
            "<cod_sum,>",
            "<cod_log,>",
            "<cod_pc,>",
            "<cod_coma,>",
            "<cod_parIzq,>",
            "<cod_parDer,>",
            "<cod_LLizq,>",
            "<cod_LLder,>",
            "<cod_asig,>",
            "<cod_rel,>",
            "<cod_asigRes,>",
            "<cod_eof,>",
        ]
    );
}

#[test]
fn test_equality_is_preferred_over_assignment() {
    let (tokens, _, _) = lex("a===b");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_identifier_handles_resolve_to_lexemes() {
    let (tokens, _, scopes) = lex("alpha beta_2 _gamma alpha");

    let handles: Vec<_> = tokens.iter().filter_map(|token| token.handle()).collect();
    assert_eq!(handles.len(), 4);
    assert_eq!(handles[0], handles[3]);

    let lexemes: Vec<_> = handles
        .iter()
        .filter_map(|handle| scopes.symbol_by_handle(*handle))
        .map(|symbol| symbol.lexeme.clone())
        .collect();
    assert_eq!(lexemes, vec!["alpha", "beta_2", "_gamma", "alpha"]);
}

#[test]
fn test_boolean_constants_are_predeclared() {
    let (tokens, _, scopes) = lex("let int x; x = true;");

    assert_eq!(tokens[2].handle().map(|h| h.0), Some(1));
    assert_eq!(scopes.lookup_local("true").map(|s| s.data_type), Some(DataType::Boolean));
    assert!(scopes.lookup_local("false").is_none());
}

#[test]
fn test_integer_limits() {
    let (tokens, diagnostics, _) = lex("32766 32767 99999999999");

    assert_eq!(tokens[0].literal(), Some("32766"));
    assert_eq!(kinds(&tokens), vec![TokenKind::IntLiteral, TokenKind::EOF]);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics[0].error,
        ErrorImpl::IntegerOutOfRange {
            lexeme: "32767".to_string()
        }
    );
}

#[test]
fn test_real_literals() {
    let (tokens, diagnostics, _) = lex("3.14\n117549436.0\n117549435.9");

    assert_eq!(dump(&tokens), vec!["<cod_cr,3.14>", "<cod_cr,117549435.9>", "<cod_eof,>"]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, Some(2));
    assert!(matches!(diagnostics[0].error, ErrorImpl::RealOutOfRange { .. }));
}

#[test]
fn test_malformed_real_consumes_digits_and_dot() {
    let (tokens, diagnostics, _) = lex("3.;");

    assert_eq!(kinds(&tokens), vec![TokenKind::Semicolon, TokenKind::EOF]);
    assert_eq!(
        diagnostics[0].error,
        ErrorImpl::MalformedReal {
            lexeme: "3.".to_string()
        }
    );
}

#[test]
fn test_string_length_limit() {
    let accepted = format!("\"{}\"", "a".repeat(63));
    let rejected = format!("\"{}\"", "a".repeat(64));
    let (tokens, diagnostics, _) = lex(&format!("{}\n{}", accepted, rejected));

    assert_eq!(kinds(&tokens), vec![TokenKind::StringLiteral, TokenKind::EOF]);
    assert_eq!(tokens[0].literal().map(str::len), Some(63));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].error, ErrorImpl::StringTooLong { length: 64 });
    assert_eq!(diagnostics[0].line, Some(2));
}

#[test]
fn test_string_is_quoted_in_dump() {
    let (tokens, _, _) = lex("write \"hola mundo\";");
    assert_eq!(tokens[1].to_string(), "<cod_cad,\"hola mundo\">");
    assert_eq!(
        tokens[1].attribute,
        Some(TokenAttribute::Literal("hola mundo".to_string()))
    );
}

#[test]
fn test_unterminated_string_yields_no_token() {
    let (tokens, diagnostics, _) = lex("\"abc\nx;\n\"tail");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Semicolon, TokenKind::EOF]
    );
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.error == ErrorImpl::UnterminatedString));
    assert_eq!(diagnostics[0].line, Some(1));
    assert_eq!(diagnostics[1].line, Some(3));
}

#[test]
fn test_comments_and_lone_slash() {
    let (tokens, diagnostics, _) = lex("// ignored ; let\nx / y");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].error, ErrorImpl::LoneSlash);
    assert_eq!(diagnostics[0].line, Some(2));
}

#[test]
fn test_percent_without_equals() {
    let (tokens, diagnostics, _) = lex("a % b");

    assert_eq!(kinds(&tokens).len(), 3);
    assert_eq!(diagnostics[0].error, ErrorImpl::PercentWithoutEquals);
}

#[test]
fn test_unrecognized_character() {
    let (tokens, diagnostics, _) = lex("x @ y");

    assert_eq!(kinds(&tokens).len(), 3);
    assert_eq!(diagnostics[0].error, ErrorImpl::UnrecognizedCharacter { character: '@' });
}

#[test]
fn test_lexical_cap_per_line() {
    let (_, diagnostics, _) = lex("@ # $ &\n@");

    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics[0].line, Some(1));
    assert_eq!(diagnostics[1].line, Some(1));
    assert_eq!(diagnostics[2].line, Some(2));
}

#[test]
fn test_lines_are_tracked() {
    let (tokens, _, _) = lex("a\n\nb\r\n  c");

    let lines: Vec<_> = tokens.iter().map(|token| token.line).collect();
    assert_eq!(lines, vec![1, 3, 4, 4]);
}

#[test]
fn test_empty_source() {
    let (tokens, diagnostics, _) = lex("");

    assert_eq!(dump(&tokens), vec!["<cod_eof,>"]);
    assert!(diagnostics.is_empty());
}

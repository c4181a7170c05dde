//! Unit tests for error handling.
//!
//! This module contains tests for error names, hints, diagnostic rendering
//! and per-line cascade suppression.

use std::{io, path::PathBuf};

use crate::errors::diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticKind};
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::symbols::symbol::DataType;

#[test]
fn test_error_names() {
    assert_eq!(ErrorImpl::LoneSlash.get_error_name(), "LoneSlash");
    assert_eq!(
        ErrorImpl::AlreadyDeclared { name: "x".to_string() }.get_error_name(),
        "AlreadyDeclared"
    );
    assert_eq!(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::EOF
        }
        .get_error_name(),
        "UnexpectedToken"
    );
}

#[test]
fn test_error_kinds() {
    assert_eq!(ErrorImpl::UnterminatedString.kind(), DiagnosticKind::Lexical);
    assert_eq!(
        ErrorImpl::UnexpectedTokenDetailed {
            expected: "a type".to_string(),
            found: TokenKind::Identifier
        }
        .kind(),
        DiagnosticKind::Syntactic
    );
    assert_eq!(ErrorImpl::WriteBoolean.kind(), DiagnosticKind::Semantic);
}

#[test]
fn test_error_tip_suggestion() {
    let error = ErrorImpl::UnexpectedToken {
        expected: TokenKind::Semicolon,
        found: TokenKind::Let,
    };

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("';'")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_none() {
    let error = ErrorImpl::UnexpectedToken {
        expected: TokenKind::Identifier,
        found: TokenKind::Let,
    };

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic::new(
        ErrorImpl::InitializationMismatch {
            expected: DataType::Integer,
            found: DataType::Boolean,
        },
        Some(3),
    );

    assert_eq!(
        diagnostic.to_string(),
        "Linea 3 (SEMANTICO): type mismatch in initialization: expected int, found boolean"
    );
}

#[test]
fn test_diagnostic_display_unknown_line() {
    let diagnostic = Diagnostic::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF,
        },
        None,
    );

    assert_eq!(
        diagnostic.to_string(),
        "Linea ? (SINTACTICO): expected '}', found end of file (missing closing '}'?)"
    );
}

#[test]
fn test_collector_caps_per_line() {
    let mut collector = DiagnosticCollector::new(2);

    assert!(collector.report(ErrorImpl::LoneSlash, Some(1)));
    assert!(collector.report(ErrorImpl::LoneSlash, Some(1)));
    assert!(!collector.report(ErrorImpl::LoneSlash, Some(1)));
    assert!(!collector.report(ErrorImpl::PercentWithoutEquals, Some(1)));

    assert_eq!(collector.diagnostics().len(), 2);
}

#[test]
fn test_collector_resets_on_new_line() {
    let mut collector = DiagnosticCollector::new(1);

    assert!(collector.report(ErrorImpl::WriteBoolean, Some(1)));
    assert!(!collector.report(ErrorImpl::WriteBoolean, Some(1)));
    assert!(collector.report(ErrorImpl::WriteBoolean, Some(2)));
    assert!(collector.report(ErrorImpl::WriteBoolean, None));
    assert!(!collector.report(ErrorImpl::WriteBoolean, None));

    let lines: Vec<Option<usize>> = collector.into_diagnostics().iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![Some(1), Some(2), None]);
}

#[test]
fn test_fatal_error_display() {
    let error = Error::ReadSource {
        path: PathBuf::from("missing.js"),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };

    assert_eq!(error.get_error_name(), "ReadSource");
    assert!(error.to_string().contains("missing.js"));
}

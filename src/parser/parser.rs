//! Parser state and the entry point of the syntactic phase.
//!
//! The parser walks the token list once, emitting production numbers to the
//! trace and running the semantic actions against the shared scope manager.
//! Errors never stop it: each one is recorded and the cursor moves on.

use crate::{
    errors::{
        diagnostics::{Diagnostic, DiagnosticCollector, PARSER_ERRORS_PER_LINE},
        errors::ErrorImpl,
    },
    lexer::tokens::{Token, TokenKind},
    symbols::{manager::ScopeManager, symbol::Symbol},
    MK_TOKEN,
};

use super::{lookups::Production, stmt::parse_program, trace::Trace};

pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    /// Line of the most recently consumed token.
    previous_line: usize,
    pub scopes: &'a mut ScopeManager,
    trace: Trace,
    diagnostics: DiagnosticCollector,
    /// Next free displacement in the current scope.
    pub displacement: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut tokens: Vec<Token>, scopes: &'a mut ScopeManager) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let line = tokens.last().map(|token| token.line).unwrap_or(1);
            tokens.push(MK_TOKEN!(TokenKind::EOF, None, line));
        }

        Parser {
            tokens,
            pos: 0,
            previous_line: 1,
            scopes,
            trace: Trace::new(),
            diagnostics: DiagnosticCollector::new(PARSER_ERRORS_PER_LINE),
            displacement: 0,
        }
    }

    /// Returns the current token without advancing. Stays on end-of-input once reached.
    pub fn current_token(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    pub fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_token_kind())
    }

    pub fn at_eof(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        self.previous_line = token.line;
        token
    }

    pub fn previous_line(&self) -> usize {
        self.previous_line
    }

    /// Consumes a token of `expected_kind`.
    ///
    /// On mismatch a syntactic diagnostic is recorded and the offending token
    /// is skipped anyway, so the caller can keep going.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<Token> {
        let found = self.current_token_kind();
        if found == expected_kind {
            return Some(self.advance());
        }

        self.syntax_error(ErrorImpl::UnexpectedToken {
            expected: expected_kind,
            found,
        });
        self.advance();
        None
    }

    /// Reports that none of the alternatives matched the current token.
    pub fn expected_one_of(&mut self, expected: &str) {
        let found = self.current_token_kind();
        self.syntax_error(ErrorImpl::UnexpectedTokenDetailed {
            expected: expected.to_string(),
            found,
        });
    }

    pub fn emit(&mut self, production: Production) {
        self.trace.push(production);
    }

    pub fn syntax_error(&mut self, error: ErrorImpl) {
        let line = match self.current_token() {
            token if token.kind == TokenKind::EOF => None,
            token => Some(token.line),
        };
        self.diagnostics.report(error, line);
    }

    pub fn semantic_error(&mut self, error: ErrorImpl, line: usize) {
        self.diagnostics.report(error, Some(line));
    }

    /// Source text of an identifier token, recovered through its handle.
    pub fn lexeme_of(&self, token: &Token) -> String {
        token
            .handle()
            .and_then(|handle| self.scopes.symbol_by_handle(handle))
            .map(|symbol| symbol.lexeme.clone())
            .unwrap_or_default()
    }

    /// Resolves `lexeme` from the innermost scope outwards, ignoring untyped entries.
    pub fn resolve(&self, lexeme: &str) -> Option<&Symbol> {
        self.scopes
            .lookup_lexical(lexeme)
            .filter(|symbol| symbol.is_declared())
    }
}

pub struct ParseResult {
    pub trace: Trace,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs the syntactic and semantic phase over a token list.
///
/// Function scopes are opened and closed on `scopes` as they are parsed; the
/// global scope is left open for the caller to flush.
pub fn parse(tokens: Vec<Token>, scopes: &mut ScopeManager) -> ParseResult {
    let mut parser = Parser::new(tokens, scopes);

    parse_program(&mut parser);

    tracing::debug!(
        productions = parser.trace.productions().len(),
        diagnostics = parser.diagnostics.diagnostics().len(),
        "program parsed"
    );

    ParseResult {
        trace: parser.trace,
        diagnostics: parser.diagnostics.into_diagnostics(),
    }
}

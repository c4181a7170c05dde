use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::{
        diagnostics::{Diagnostic, DiagnosticCollector, LEXICAL_ERRORS_PER_LINE},
        errors::ErrorImpl,
    },
    symbols::manager::ScopeManager,
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenAttribute, TokenKind, RESERVED_LOOKUP};

/// Integer constants must stay strictly below this value.
pub const MAX_INTEGER: u32 = 32767;
/// Real constants must stay strictly below this value.
pub const MAX_REAL: f64 = 117549436.0;
/// String constants must be strictly shorter than this many characters.
pub const MAX_STRING_LENGTH: usize = 64;

pub type RegexHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored; the first one that matches wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\n").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: slash_handler },
        RegexPattern { regex: Regex::new("^[0-9]+\\.[0-9]+").unwrap(), handler: real_handler },
        RegexPattern { regex: Regex::new("^[0-9]+\\.").unwrap(), handler: malformed_real_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^\"[^\"\n]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\"[^\"\n]*").unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals) },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: percent_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
    ];
}

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
    diagnostics: DiagnosticCollector,
    scopes: &'a mut ScopeManager,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, scopes: &'a mut ScopeManager) -> Self {
        Lexer {
            source,
            pos: 0,
            line: 1,
            tokens: vec![],
            diagnostics: DiagnosticCollector::new(LEXICAL_ERRORS_PER_LINE),
            scopes,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn report(&mut self, error: ErrorImpl) {
        self.diagnostics.report(error, Some(self.line));
    }

    pub fn remainder(&self) -> &'a str {
        let source = self.source;
        &source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans one lexeme at the cursor and advances past it.
    fn step(&mut self) {
        let remainder = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                (pattern.handler)(self, found.as_str());
                self.pos += found.end();
                return;
            }
        }

        // Nothing matched, so there is at least one character left.
        if let Some(character) = remainder.chars().next() {
            self.report(ErrorImpl::UnrecognizedCharacter { character });
            self.pos += character.len_utf8();
        }
    }
}

fn skip_handler(_lexer: &mut Lexer, _matched: &str) {}

fn newline_handler(lexer: &mut Lexer, _matched: &str) {
    lexer.line += 1;
}

fn slash_handler(lexer: &mut Lexer, _matched: &str) {
    lexer.report(ErrorImpl::LoneSlash);
}

fn percent_handler(lexer: &mut Lexer, _matched: &str) {
    lexer.report(ErrorImpl::PercentWithoutEquals);
}

fn integer_handler(lexer: &mut Lexer, matched: &str) {
    match matched.parse::<u32>() {
        Ok(value) if value < MAX_INTEGER => {
            let line = lexer.line;
            lexer.push(MK_TOKEN!(
                TokenKind::IntLiteral,
                Some(TokenAttribute::Literal(matched.to_string())),
                line
            ));
        }
        _ => lexer.report(ErrorImpl::IntegerOutOfRange {
            lexeme: matched.to_string(),
        }),
    }
}

fn real_handler(lexer: &mut Lexer, matched: &str) {
    match matched.parse::<f64>() {
        Ok(value) if value < MAX_REAL => {
            let line = lexer.line;
            lexer.push(MK_TOKEN!(
                TokenKind::RealLiteral,
                Some(TokenAttribute::Literal(matched.to_string())),
                line
            ));
        }
        _ => lexer.report(ErrorImpl::RealOutOfRange {
            lexeme: matched.to_string(),
        }),
    }
}

fn malformed_real_handler(lexer: &mut Lexer, matched: &str) {
    lexer.report(ErrorImpl::MalformedReal {
        lexeme: matched.to_string(),
    });
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    let content = &matched[1..matched.len() - 1];
    let length = content.chars().count();

    if length >= MAX_STRING_LENGTH {
        lexer.report(ErrorImpl::StringTooLong { length });
        return;
    }

    let line = lexer.line;
    lexer.push(MK_TOKEN!(
        TokenKind::StringLiteral,
        Some(TokenAttribute::Literal(content.to_string())),
        line
    ));
}

fn unterminated_string_handler(lexer: &mut Lexer, _matched: &str) {
    lexer.report(ErrorImpl::UnterminatedString);
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let line = lexer.line;

    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        lexer.push(MK_TOKEN!(*kind, None, line));
    } else {
        let handle = lexer.scopes.ensure(matched).handle;
        lexer.push(MK_TOKEN!(
            TokenKind::Identifier,
            Some(TokenAttribute::Handle(handle)),
            line
        ));
    }
}

/// Scans the whole source. Identifiers are registered in the current scope of `scopes`.
///
/// The returned token list always ends with an end-of-input token.
pub fn tokenize(source: &str, scopes: &mut ScopeManager) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lex = Lexer::new(source, scopes);

    while !lex.at_eof() {
        lex.step();
    }

    let line = lex.line;
    lex.push(MK_TOKEN!(TokenKind::EOF, None, line));

    tracing::debug!(
        tokens = lex.tokens.len(),
        diagnostics = lex.diagnostics.diagnostics().len(),
        lines = line,
        "source tokenized"
    );

    (lex.tokens, lex.diagnostics.into_diagnostics())
}

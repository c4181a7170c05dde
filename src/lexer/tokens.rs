use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::symbols::symbol::Handle;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("function", TokenKind::Function);
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("string", TokenKind::String);
        map.insert("void", TokenKind::Void);
        map.insert("if", TokenKind::If);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map.insert("write", TokenKind::Write);
        map.insert("read", TokenKind::Read);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    IntLiteral,
    RealLiteral,
    StringLiteral,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    Assignment,    // =
    Equals,        // ==
    PercentEquals, // %=
    Plus,
    Not,

    Semicolon,
    Comma,

    // Reserved
    Let,
    Function,
    Int,
    Float,
    Boolean,
    String,
    Void,
    If,
    For,
    Return,
    Write,
    Read,
}

impl TokenKind {
    /// Code written to the token file.
    pub fn code(&self) -> &'static str {
        match self {
            TokenKind::EOF => "cod_eof",
            TokenKind::Identifier => "cod_id",
            TokenKind::IntLiteral => "cod_ce",
            TokenKind::RealLiteral => "cod_cr",
            TokenKind::StringLiteral => "cod_cad",
            TokenKind::OpenParen => "cod_parIzq",
            TokenKind::CloseParen => "cod_parDer",
            TokenKind::OpenCurly => "cod_LLizq",
            TokenKind::CloseCurly => "cod_LLder",
            TokenKind::Assignment => "cod_asig",
            TokenKind::Equals => "cod_rel",
            TokenKind::PercentEquals => "cod_asigRes",
            TokenKind::Plus => "cod_sum",
            TokenKind::Not => "cod_log",
            TokenKind::Semicolon => "cod_pc",
            TokenKind::Comma => "cod_coma",
            TokenKind::Let => "PR_let",
            TokenKind::Function => "PR_function",
            TokenKind::Int => "PR_int",
            TokenKind::Float => "PR_float",
            TokenKind::Boolean => "PR_boolean",
            TokenKind::String => "PR_string",
            TokenKind::Void => "PR_void",
            TokenKind::If => "PR_if",
            TokenKind::For => "PR_for",
            TokenKind::Return => "PR_return",
            TokenKind::Write => "PR_write",
            TokenKind::Read => "PR_read",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let readable = match self {
            TokenKind::EOF => "end of file",
            TokenKind::Identifier => "identifier",
            TokenKind::IntLiteral => "integer constant",
            TokenKind::RealLiteral => "real constant",
            TokenKind::StringLiteral => "string constant",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::OpenCurly => "'{'",
            TokenKind::CloseCurly => "'}'",
            TokenKind::Assignment => "'='",
            TokenKind::Equals => "'=='",
            TokenKind::PercentEquals => "'%='",
            TokenKind::Plus => "'+'",
            TokenKind::Not => "'!'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Let => "'let'",
            TokenKind::Function => "'function'",
            TokenKind::Int => "'int'",
            TokenKind::Float => "'float'",
            TokenKind::Boolean => "'boolean'",
            TokenKind::String => "'string'",
            TokenKind::Void => "'void'",
            TokenKind::If => "'if'",
            TokenKind::For => "'for'",
            TokenKind::Return => "'return'",
            TokenKind::Write => "'write'",
            TokenKind::Read => "'read'",
        };
        write!(f, "{}", readable)
    }
}

/// Payload of a token: literal text for constants, a symbol handle for identifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenAttribute {
    Handle(Handle),
    Literal(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub attribute: Option<TokenAttribute>,
    pub line: usize,
}

impl Token {
    pub fn handle(&self) -> Option<Handle> {
        match self.attribute {
            Some(TokenAttribute::Handle(handle)) => Some(handle),
            _ => None,
        }
    }

    pub fn literal(&self) -> Option<&str> {
        match &self.attribute {
            Some(TokenAttribute::Literal(text)) => Some(text),
            _ => None,
        }
    }
}

/// Renders the token-file line, e.g. `<cod_id,1>` or `<cod_sum,>`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.attribute {
            None => write!(f, "<{},>", self.kind.code()),
            Some(TokenAttribute::Handle(handle)) => write!(f, "<{},{}>", self.kind.code(), handle),
            Some(TokenAttribute::Literal(text)) if self.kind == TokenKind::StringLiteral => {
                write!(f, "<{},\"{}\">", self.kind.code(), text)
            }
            Some(TokenAttribute::Literal(text)) => write!(f, "<{},{}>", self.kind.code(), text),
        }
    }
}

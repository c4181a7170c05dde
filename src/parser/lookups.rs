use crate::{lexer::tokens::TokenKind, symbols::symbol::DataType};

use super::{parser::Parser, stmt::*};

/// Grammar alternatives, numbered as they appear in the derivation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    Program = 1,
    ItemsMore,
    ItemsEnd,
    ItemDeclaration,
    ItemFunction,
    ItemStatement,
    Declaration,
    InitializerPresent,
    InitializerEmpty,
    TypeInt,
    TypeFloat,
    TypeBoolean,
    TypeString,
    Function,
    ReturnsType,
    ReturnsVoid,
    ParamsPresent,
    ParamsEmpty,
    ParamList,
    ParamListMore,
    ParamListEnd,
    Param,
    Block,
    StatementsMore,
    StatementsEnd,
    StmtAssignOrCall,
    StmtFor,
    StmtIf,
    StmtRead,
    StmtWrite,
    StmtReturn,
    StmtBlock,
    StmtEmpty,
    StmtDeclaration,
    AssignOrCall,
    AssignTail,
    CallTail,
    OpAssign,
    OpModAssign,
    For,
    ForInitAssign,
    ForInitDeclaration,
    ForInitEmpty,
    ForConditionPresent,
    ForConditionEmpty,
    ForUpdateAssign,
    ForUpdateEmpty,
    If,
    Read,
    ReadTargetPlain,
    ReadTargetParen,
    Write,
    Return,
    ReturnValue,
    ReturnEmpty,
    Expression,
    EqualityMore,
    EqualityEnd,
    Additive,
    AdditiveMore,
    AdditiveEnd,
    Negation,
    UnaryOperand,
    ValueIdentifier,
    ValueInt,
    ValueReal,
    ValueString,
    ValueGroup,
    IdentifierCall,
    IdentifierPlain,
    ArgumentsPresent,
    ArgumentsEmpty,
    ArgumentList,
    ArgumentListMore,
    ArgumentListEnd,
}

impl Production {
    pub fn number(self) -> u16 {
        self as u16
    }
}

pub const FIRST_TYPE: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Boolean,
    TokenKind::String,
];

pub const FIRST_STATEMENT: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::For,
    TokenKind::If,
    TokenKind::Read,
    TokenKind::Write,
    TokenKind::Return,
    TokenKind::OpenCurly,
    TokenKind::Semicolon,
    TokenKind::Let,
];

pub const FIRST_ITEM: &[TokenKind] = &[
    TokenKind::Let,
    TokenKind::Function,
    TokenKind::Identifier,
    TokenKind::For,
    TokenKind::If,
    TokenKind::Read,
    TokenKind::Write,
    TokenKind::Return,
    TokenKind::OpenCurly,
    TokenKind::Semicolon,
];

pub const FIRST_VALUE: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::IntLiteral,
    TokenKind::RealLiteral,
    TokenKind::StringLiteral,
    TokenKind::OpenParen,
];

pub const FIRST_EXPRESSION: &[TokenKind] = &[
    TokenKind::Not,
    TokenKind::Identifier,
    TokenKind::IntLiteral,
    TokenKind::RealLiteral,
    TokenKind::StringLiteral,
    TokenKind::OpenParen,
];

/// Parses one statement and returns the type it contributes to its block.
pub type StmtHandler = fn(&mut Parser<'_>) -> DataType;

/// Alternative of `S` selected by the current token, if any.
pub fn statement_lookup(kind: TokenKind) -> Option<(Production, StmtHandler)> {
    let entry = match kind {
        TokenKind::Identifier => (Production::StmtAssignOrCall, parse_assign_or_call_stmt as StmtHandler),
        TokenKind::For => (Production::StmtFor, parse_for_stmt as StmtHandler),
        TokenKind::If => (Production::StmtIf, parse_if_stmt as StmtHandler),
        TokenKind::Read => (Production::StmtRead, parse_read_stmt as StmtHandler),
        TokenKind::Write => (Production::StmtWrite, parse_write_stmt as StmtHandler),
        TokenKind::Return => (Production::StmtReturn, parse_return_stmt as StmtHandler),
        TokenKind::OpenCurly => (Production::StmtBlock, parse_block as StmtHandler),
        TokenKind::Semicolon => (Production::StmtEmpty, parse_empty_stmt as StmtHandler),
        TokenKind::Let => (Production::StmtDeclaration, parse_var_decl_stmt as StmtHandler),
        _ => return None,
    };
    Some(entry)
}

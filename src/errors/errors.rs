use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, symbols::symbol::DataType};

use super::diagnostics::DiagnosticKind;

/// Faults that abort a run. Everything else is recorded as a diagnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read source file {path:?}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output file {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::ReadSource { .. } => "ReadSource",
            Error::WriteOutput { .. } => "WriteOutput",
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("/ not allowed except as // comment start")]
    LoneSlash,
    #[error("integer out of range: {lexeme} (must be less than 32767)")]
    IntegerOutOfRange { lexeme: String },
    #[error("real out of range: {lexeme} (must be less than 117549436.0)")]
    RealOutOfRange { lexeme: String },
    #[error("malformed real: {lexeme} (a digit must follow the '.')")]
    MalformedReal { lexeme: String },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("string too long: {length} characters (at most 63 allowed)")]
    StringTooLong { length: usize },
    #[error("operator % without = not allowed")]
    PercentWithoutEquals,
    #[error("unrecognized character: {character:?}")]
    UnrecognizedCharacter { character: char },

    // Syntactic
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("expected {expected}, found {found}")]
    UnexpectedTokenDetailed { expected: String, found: TokenKind },

    // Semantic
    #[error("identifier '{name}' already declared in this scope")]
    AlreadyDeclared { name: String },
    #[error("variable '{name}' not declared")]
    VariableNotDeclared { name: String },
    #[error("function '{name}' not declared")]
    FunctionNotDeclared { name: String },
    #[error("type mismatch in initialization: expected {expected}, found {found}")]
    InitializationMismatch { expected: DataType, found: DataType },
    #[error("type mismatch in assignment to '{name}': expected {expected}, found {found}")]
    AssignmentMismatch {
        name: String,
        expected: DataType,
        found: DataType,
    },
    #[error("operator %= requires integer operands, found {target} %= {value}")]
    ModAssignNotInteger { target: DataType, value: DataType },
    #[error("{construct} condition must be boolean, found {found}")]
    ConditionNotBoolean {
        construct: &'static str,
        found: DataType,
    },
    #[error("cannot read boolean variable '{name}'")]
    ReadBoolean { name: String },
    #[error("cannot write boolean expression")]
    WriteBoolean,
    #[error("operator == requires numeric operands, found {left} == {right}")]
    EqualityOperands { left: DataType, right: DataType },
    #[error("operator + requires numeric operands, found {left} + {right}")]
    AdditionOperands { left: DataType, right: DataType },
    #[error("operator ! requires a boolean operand, found {found}")]
    NotOperand { found: DataType },
    #[error("return type mismatch in function '{function}': declared {expected}, found {found}")]
    ReturnTypeMismatch {
        function: String,
        expected: DataType,
        found: DataType,
    },
    #[error("function '{function}' expects {expected} arguments, received {received}")]
    ArgumentCountMismatch {
        function: String,
        expected: usize,
        received: usize,
    },
    #[error("function '{function}' declares more than {max} parameters")]
    TooManyParameters { function: String, max: usize },
}

impl ErrorImpl {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            ErrorImpl::LoneSlash
            | ErrorImpl::IntegerOutOfRange { .. }
            | ErrorImpl::RealOutOfRange { .. }
            | ErrorImpl::MalformedReal { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::StringTooLong { .. }
            | ErrorImpl::PercentWithoutEquals
            | ErrorImpl::UnrecognizedCharacter { .. } => DiagnosticKind::Lexical,
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::UnexpectedTokenDetailed { .. } => {
                DiagnosticKind::Syntactic
            }
            _ => DiagnosticKind::Semantic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            ErrorImpl::LoneSlash => "LoneSlash",
            ErrorImpl::IntegerOutOfRange { .. } => "IntegerOutOfRange",
            ErrorImpl::RealOutOfRange { .. } => "RealOutOfRange",
            ErrorImpl::MalformedReal { .. } => "MalformedReal",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::StringTooLong { .. } => "StringTooLong",
            ErrorImpl::PercentWithoutEquals => "PercentWithoutEquals",
            ErrorImpl::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::AlreadyDeclared { .. } => "AlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::FunctionNotDeclared { .. } => "FunctionNotDeclared",
            ErrorImpl::InitializationMismatch { .. } => "InitializationMismatch",
            ErrorImpl::AssignmentMismatch { .. } => "AssignmentMismatch",
            ErrorImpl::ModAssignNotInteger { .. } => "ModAssignNotInteger",
            ErrorImpl::ConditionNotBoolean { .. } => "ConditionNotBoolean",
            ErrorImpl::ReadBoolean { .. } => "ReadBoolean",
            ErrorImpl::WriteBoolean => "WriteBoolean",
            ErrorImpl::EqualityOperands { .. } => "EqualityOperands",
            ErrorImpl::AdditionOperands { .. } => "AdditionOperands",
            ErrorImpl::NotOperand { .. } => "NotOperand",
            ErrorImpl::ReturnTypeMismatch { .. } => "ReturnTypeMismatch",
            ErrorImpl::ArgumentCountMismatch { .. } => "ArgumentCountMismatch",
            ErrorImpl::TooManyParameters { .. } => "TooManyParameters",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ErrorImpl::UnexpectedToken { expected, .. } => match expected {
                TokenKind::Semicolon => ErrorTip::Suggestion(String::from("missing ';' at the end?")),
                TokenKind::CloseParen => ErrorTip::Suggestion(String::from("check the parentheses")),
                TokenKind::CloseCurly => ErrorTip::Suggestion(String::from("missing closing '}'?")),
                TokenKind::OpenCurly => ErrorTip::Suggestion(String::from("missing opening '{'?")),
                _ => ErrorTip::None,
            },
            ErrorImpl::ReadBoolean { .. } => {
                ErrorTip::Suggestion(String::from("read accepts int, float or string targets"))
            }
            _ => ErrorTip::None,
        }
    }
}

use crate::{lexer::tokens::TokenKind, symbols::symbol::DataType};

use super::{
    lookups::{Production, FIRST_TYPE},
    parser::Parser,
};

/// `T`: one of the four value types. Yields `Error` when no type keyword is present.
pub fn parse_type(parser: &mut Parser) -> DataType {
    let (production, data_type) = match parser.current_token_kind() {
        TokenKind::Int => (Production::TypeInt, DataType::Integer),
        TokenKind::Float => (Production::TypeFloat, DataType::Real),
        TokenKind::Boolean => (Production::TypeBoolean, DataType::Boolean),
        TokenKind::String => (Production::TypeString, DataType::String),
        _ => {
            parser.expected_one_of("a type (int, float, boolean, string)");
            return DataType::Error;
        }
    };

    parser.emit(production);
    parser.advance();
    data_type
}

/// `R`: a value type or `void`.
pub fn parse_return_type(parser: &mut Parser) -> DataType {
    if parser.current_token_kind() == TokenKind::Void {
        parser.emit(Production::ReturnsVoid);
        parser.advance();
        DataType::Void
    } else if parser.at_any(FIRST_TYPE) {
        parser.emit(Production::ReturnsType);
        parse_type(parser)
    } else {
        parser.expected_one_of("a return type or 'void'");
        DataType::Error
    }
}

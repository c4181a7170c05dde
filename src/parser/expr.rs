use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    symbols::symbol::DataType,
};

use super::{
    lookups::{Production, FIRST_EXPRESSION, FIRST_VALUE},
    parser::Parser,
};

/// `X -> Y X'`, where `X'` chains `==` comparisons.
pub fn parse_expr(parser: &mut Parser) -> DataType {
    parser.emit(Production::Expression);
    let mut left = parse_additive_expr(parser);

    while parser.current_token_kind() == TokenKind::Equals {
        parser.emit(Production::EqualityMore);
        let line = parser.advance().line;
        let right = parse_additive_expr(parser);

        left = match (left, right) {
            (DataType::Error, _) | (_, DataType::Error) => DataType::Error,
            (l, r) if l.is_numeric() && r.is_numeric() => DataType::Boolean,
            (l, r) => {
                parser.semantic_error(ErrorImpl::EqualityOperands { left: l, right: r }, line);
                DataType::Error
            }
        };
    }

    parser.emit(Production::EqualityEnd);
    left
}

/// `Y -> Z Y'`, where `Y'` chains additions.
fn parse_additive_expr(parser: &mut Parser) -> DataType {
    parser.emit(Production::Additive);
    let mut left = parse_unary_expr(parser);

    while parser.current_token_kind() == TokenKind::Plus {
        parser.emit(Production::AdditiveMore);
        let line = parser.advance().line;
        let right = parse_unary_expr(parser);

        left = match (left, right) {
            (DataType::Error, _) | (_, DataType::Error) => DataType::Error,
            (DataType::Real, r) if r.is_numeric() => DataType::Real,
            (l, DataType::Real) if l.is_numeric() => DataType::Real,
            (DataType::Integer, DataType::Integer) => DataType::Integer,
            (l, r) => {
                parser.semantic_error(ErrorImpl::AdditionOperands { left: l, right: r }, line);
                DataType::Error
            }
        };
    }

    parser.emit(Production::AdditiveEnd);
    left
}

/// `Z -> ! Z | V`
fn parse_unary_expr(parser: &mut Parser) -> DataType {
    if parser.current_token_kind() == TokenKind::Not {
        parser.emit(Production::Negation);
        let line = parser.advance().line;

        return match parse_unary_expr(parser) {
            DataType::Boolean => DataType::Boolean,
            DataType::Error => DataType::Error,
            found => {
                parser.semantic_error(ErrorImpl::NotOperand { found }, line);
                DataType::Error
            }
        };
    }

    if !parser.at_any(FIRST_VALUE) {
        parser.expected_one_of("an expression");
        return DataType::Error;
    }

    parser.emit(Production::UnaryOperand);
    parse_value_expr(parser)
}

fn parse_value_expr(parser: &mut Parser) -> DataType {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            parser.emit(Production::ValueIdentifier);
            let identifier = parser.advance();

            if parser.current_token_kind() == TokenKind::OpenParen {
                parser.emit(Production::IdentifierCall);
                parse_call(parser, &identifier)
            } else {
                parser.emit(Production::IdentifierPlain);
                resolve_variable(parser, &identifier)
            }
        }
        TokenKind::IntLiteral => {
            parser.emit(Production::ValueInt);
            parser.advance();
            DataType::Integer
        }
        TokenKind::RealLiteral => {
            parser.emit(Production::ValueReal);
            parser.advance();
            DataType::Real
        }
        TokenKind::StringLiteral => {
            parser.emit(Production::ValueString);
            parser.advance();
            DataType::String
        }
        _ => {
            parser.emit(Production::ValueGroup);
            parser.expect(TokenKind::OpenParen);
            let inner = parse_expr(parser);
            parser.expect(TokenKind::CloseParen);
            inner
        }
    }
}

/// Type of a variable reference; undeclared names report and yield `Error`.
pub fn resolve_variable(parser: &mut Parser, identifier: &Token) -> DataType {
    let name = parser.lexeme_of(identifier);
    match parser.resolve(&name) {
        Some(symbol) => symbol.data_type,
        None => {
            parser.semantic_error(ErrorImpl::VariableNotDeclared { name }, identifier.line);
            DataType::Error
        }
    }
}

/// `( AO )` after a callee identifier. Yields the callee's return type.
pub fn parse_call(parser: &mut Parser, callee: &Token) -> DataType {
    let name = parser.lexeme_of(callee);
    let function = parser.resolve(&name).and_then(|symbol| symbol.function.clone());

    if function.is_none() {
        parser.semantic_error(ErrorImpl::FunctionNotDeclared { name: name.clone() }, callee.line);
    }

    parser.expect(TokenKind::OpenParen);
    let received = parse_arguments(parser);
    parser.expect(TokenKind::CloseParen);

    let Some(function) = function else {
        return DataType::Error;
    };

    if function.params.len() != received {
        parser.semantic_error(
            ErrorImpl::ArgumentCountMismatch {
                function: name,
                expected: function.params.len(),
                received,
            },
            callee.line,
        );
    }

    function.return_type
}

/// `AO -> AL | λ`. Returns the number of arguments parsed.
fn parse_arguments(parser: &mut Parser) -> usize {
    if !parser.at_any(FIRST_EXPRESSION) {
        parser.emit(Production::ArgumentsEmpty);
        return 0;
    }

    parser.emit(Production::ArgumentsPresent);
    parser.emit(Production::ArgumentList);
    parse_expr(parser);
    let mut count = 1;

    while parser.current_token_kind() == TokenKind::Comma {
        parser.emit(Production::ArgumentListMore);
        parser.advance();
        parse_expr(parser);
        count += 1;
    }

    parser.emit(Production::ArgumentListEnd);
    count
}

use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    symbols::symbol::{DataType, FunctionInfo, Handle, Param, PassingMode, MAX_PARAMS},
};

use super::{
    expr::{parse_call, parse_expr, resolve_variable},
    lookups::{statement_lookup, Production, FIRST_EXPRESSION, FIRST_ITEM, FIRST_STATEMENT, FIRST_TYPE},
    parser::Parser,
    types::{parse_return_type, parse_type},
};

/// Title of a function scope, followed by the function's name when it has one.
const FUNCTION_SCOPE_TITLE: &str = "TABLA DE LA FUNCION";

/// `P -> G eof`
pub fn parse_program(parser: &mut Parser) {
    parser.emit(Production::Program);

    loop {
        if parser.at_any(FIRST_ITEM) {
            parser.emit(Production::ItemsMore);
            parse_item(parser);
        } else if parser.at_eof() {
            parser.emit(Production::ItemsEnd);
            break;
        } else {
            parser.expected_one_of("a declaration, function or statement");
            parser.advance();
        }
    }

    parser.expect(TokenKind::EOF);
}

fn parse_item(parser: &mut Parser) {
    match parser.current_token_kind() {
        TokenKind::Let => {
            parser.emit(Production::ItemDeclaration);
            parse_var_decl_stmt(parser);
        }
        TokenKind::Function => {
            parser.emit(Production::ItemFunction);
            parse_fn_decl(parser);
        }
        _ => {
            parser.emit(Production::ItemStatement);
            parse_stmt(parser);
        }
    }
}

/// `S`. Returns the statement's contribution to its block type:
/// a `return` yields its value type, a nested block its own type, anything else `void`.
pub fn parse_stmt(parser: &mut Parser) -> DataType {
    match statement_lookup(parser.current_token_kind()) {
        Some((production, handler)) => {
            parser.emit(production);
            handler(parser)
        }
        None => {
            parser.expected_one_of("a statement");
            parser.advance();
            DataType::Void
        }
    }
}

/// `D -> let T id D1 ;`
pub fn parse_var_decl_stmt(parser: &mut Parser) -> DataType {
    parser.emit(Production::Declaration);
    parse_declaration(parser);
    parser.expect(TokenKind::Semicolon);
    DataType::Void
}

// let T id D1, shared with the for-loop initializer.
fn parse_declaration(parser: &mut Parser) {
    parser.expect(TokenKind::Let);
    let data_type = parse_type(parser);
    let identifier = parser.expect(TokenKind::Identifier);

    if let Some(identifier) = &identifier {
        declare_variable(parser, data_type, identifier);
    }

    if parser.current_token_kind() != TokenKind::Assignment {
        parser.emit(Production::InitializerEmpty);
        return;
    }

    parser.emit(Production::InitializerPresent);
    let line = parser.advance().line;
    let found = parse_expr(parser);

    if found != data_type && found != DataType::Error && data_type != DataType::Error {
        parser.semantic_error(
            ErrorImpl::InitializationMismatch {
                expected: data_type,
                found,
            },
            line,
        );
    }
}

fn declare_variable(parser: &mut Parser, data_type: DataType, identifier: &Token) {
    let name = parser.lexeme_of(identifier);
    let displacement = parser.displacement;

    let symbol = parser.scopes.ensure(&name);
    if symbol.is_declared() {
        parser.semantic_error(ErrorImpl::AlreadyDeclared { name }, identifier.line);
        return;
    }

    symbol.data_type = data_type;
    symbol.displacement = displacement;
    parser.displacement += data_type.width();
}

/// `F -> function R id ( PO ) B`
pub fn parse_fn_decl(parser: &mut Parser) {
    parser.emit(Production::Function);
    parser.expect(TokenKind::Function);

    let return_type = parse_return_type(parser);
    let identifier = parser.expect(TokenKind::Identifier);
    let name = identifier
        .as_ref()
        .map(|token| parser.lexeme_of(token))
        .unwrap_or_default();

    // Defined before the body so recursive calls resolve.
    let function = identifier
        .as_ref()
        .map(|token| define_function(parser, &name, return_type, token.line));

    let title = if name.is_empty() {
        FUNCTION_SCOPE_TITLE.to_string()
    } else {
        format!("{} {}", FUNCTION_SCOPE_TITLE, name)
    };
    parser.scopes.open_scope(&title);
    let enclosing_displacement = std::mem::replace(&mut parser.displacement, 0);

    parser.expect(TokenKind::OpenParen);
    parse_params(parser, function);
    parser.expect(TokenKind::CloseParen);

    let body_type = parse_block(parser);
    let closing_line = parser.previous_line();

    if body_type != return_type && body_type != DataType::Error && return_type != DataType::Error {
        parser.semantic_error(
            ErrorImpl::ReturnTypeMismatch {
                function: name,
                expected: return_type,
                found: body_type,
            },
            closing_line,
        );
    }

    parser.scopes.close_scope();
    parser.displacement = enclosing_displacement;
}

fn define_function(parser: &mut Parser, name: &str, return_type: DataType, line: usize) -> Handle {
    let symbol = parser.scopes.ensure(name);
    let redefined = symbol.is_declared();

    symbol.data_type = return_type;
    symbol.function = Some(FunctionInfo::new(name, return_type));
    let handle = symbol.handle;

    if redefined {
        parser.semantic_error(
            ErrorImpl::AlreadyDeclared {
                name: name.to_string(),
            },
            line,
        );
    }

    handle
}

/// `PO -> PL | λ`, `PL -> PA LP`, `LP -> , PA LP | λ`
fn parse_params(parser: &mut Parser, function: Option<Handle>) {
    if !parser.at_any(FIRST_TYPE) {
        parser.emit(Production::ParamsEmpty);
        return;
    }

    parser.emit(Production::ParamsPresent);
    parser.emit(Production::ParamList);
    parse_param(parser, function, 0);

    let mut index = 1;
    while parser.current_token_kind() == TokenKind::Comma {
        parser.emit(Production::ParamListMore);
        parser.advance();
        parse_param(parser, function, index);
        index += 1;
    }

    parser.emit(Production::ParamListEnd);
}

/// `PA -> T id`. `index` is the parameter's zero-based position.
fn parse_param(parser: &mut Parser, function: Option<Handle>, index: usize) {
    parser.emit(Production::Param);
    let data_type = parse_type(parser);
    let Some(identifier) = parser.expect(TokenKind::Identifier) else {
        return;
    };

    let name = parser.lexeme_of(&identifier);
    let displacement = parser.displacement;

    let symbol = parser.scopes.ensure(&name);
    if symbol.is_declared() {
        parser.semantic_error(ErrorImpl::AlreadyDeclared { name }, identifier.line);
    } else {
        symbol.data_type = data_type;
        symbol.displacement = displacement;
        symbol.is_parameter = true;
        parser.displacement += data_type.width();
    }

    let Some(handle) = function else {
        return;
    };

    if index >= MAX_PARAMS {
        if index == MAX_PARAMS {
            let function = parser
                .scopes
                .symbol_by_handle(handle)
                .map(|symbol| symbol.lexeme.clone())
                .unwrap_or_default();
            parser.semantic_error(
                ErrorImpl::TooManyParameters {
                    function,
                    max: MAX_PARAMS,
                },
                identifier.line,
            );
        }
        return;
    }

    if let Some(info) = parser
        .scopes
        .symbol_by_handle_mut(handle)
        .and_then(|symbol| symbol.function.as_mut())
    {
        info.params.push(Param {
            data_type,
            mode: PassingMode::ByValue,
        });
    }
}

/// `B -> { LS }`. The block's type is its first non-void statement type.
pub fn parse_block(parser: &mut Parser) -> DataType {
    parser.emit(Production::Block);
    parser.expect(TokenKind::OpenCurly);

    let mut block_type = DataType::Void;
    loop {
        if parser.at_any(FIRST_STATEMENT) {
            parser.emit(Production::StatementsMore);
            let statement_type = parse_stmt(parser);
            if block_type == DataType::Void {
                block_type = statement_type;
            }
        } else if parser.at_any(&[TokenKind::CloseCurly, TokenKind::EOF]) {
            parser.emit(Production::StatementsEnd);
            break;
        } else {
            parser.expected_one_of("a statement or '}'");
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseCurly);
    block_type
}

/// `SA -> id SC ;`
pub fn parse_assign_or_call_stmt(parser: &mut Parser) -> DataType {
    parser.emit(Production::AssignOrCall);
    let identifier = parser.advance();

    match parser.current_token_kind() {
        TokenKind::OpenParen => {
            parser.emit(Production::CallTail);
            parse_call(parser, &identifier);
        }
        TokenKind::Assignment | TokenKind::PercentEquals => {
            parser.emit(Production::AssignTail);
            parse_assignment(parser, &identifier);
        }
        _ => parser.expected_one_of("'=', '%=' or '('"),
    }

    parser.expect(TokenKind::Semicolon);
    DataType::Void
}

/// `OP X` applied to `target`.
fn parse_assignment(parser: &mut Parser, target: &Token) {
    let operator = parser.current_token_kind();
    match operator {
        TokenKind::Assignment => parser.emit(Production::OpAssign),
        TokenKind::PercentEquals => parser.emit(Production::OpModAssign),
        _ => {
            parser.expected_one_of("'=' or '%='");
            return;
        }
    }
    let line = parser.advance().line;

    let target_type = resolve_variable(parser, target);
    let value_type = parse_expr(parser);

    if target_type == DataType::Error || value_type == DataType::Error {
        return;
    }

    if operator == TokenKind::PercentEquals {
        if target_type != DataType::Integer || value_type != DataType::Integer {
            parser.semantic_error(
                ErrorImpl::ModAssignNotInteger {
                    target: target_type,
                    value: value_type,
                },
                line,
            );
        }
    } else if target_type != value_type {
        let name = parser.lexeme_of(target);
        parser.semantic_error(
            ErrorImpl::AssignmentMismatch {
                name,
                expected: target_type,
                found: value_type,
            },
            line,
        );
    }
}

fn check_condition(parser: &mut Parser, construct: &'static str, found: DataType, line: usize) {
    if found != DataType::Boolean && found != DataType::Error {
        parser.semantic_error(ErrorImpl::ConditionNotBoolean { construct, found }, line);
    }
}

/// `SF -> for ( F0 ; F1 ; F2 ) B`
pub fn parse_for_stmt(parser: &mut Parser) -> DataType {
    parser.emit(Production::For);
    parser.advance();
    parser.expect(TokenKind::OpenParen);

    match parser.current_token_kind() {
        TokenKind::Identifier => {
            parser.emit(Production::ForInitAssign);
            let target = parser.advance();
            parse_assignment(parser, &target);
        }
        TokenKind::Let => {
            parser.emit(Production::ForInitDeclaration);
            parse_declaration(parser);
        }
        _ => parser.emit(Production::ForInitEmpty),
    }
    parser.expect(TokenKind::Semicolon);

    if parser.at_any(FIRST_EXPRESSION) {
        parser.emit(Production::ForConditionPresent);
        let line = parser.current_token().line;
        let condition = parse_expr(parser);
        check_condition(parser, "for", condition, line);
    } else {
        parser.emit(Production::ForConditionEmpty);
    }
    parser.expect(TokenKind::Semicolon);

    if parser.current_token_kind() == TokenKind::Identifier {
        parser.emit(Production::ForUpdateAssign);
        let target = parser.advance();
        parse_assignment(parser, &target);
    } else {
        parser.emit(Production::ForUpdateEmpty);
    }
    parser.expect(TokenKind::CloseParen);

    parse_block(parser);
    DataType::Void
}

/// `SI -> if ( X ) S`
pub fn parse_if_stmt(parser: &mut Parser) -> DataType {
    parser.emit(Production::If);
    parser.advance();
    parser.expect(TokenKind::OpenParen);

    let line = parser.current_token().line;
    let condition = parse_expr(parser);
    check_condition(parser, "if", condition, line);

    parser.expect(TokenKind::CloseParen);
    parse_stmt(parser);
    DataType::Void
}

/// `SR -> read RT ;` where the target may be parenthesized.
pub fn parse_read_stmt(parser: &mut Parser) -> DataType {
    parser.emit(Production::Read);
    parser.advance();

    let target = match parser.current_token_kind() {
        TokenKind::Identifier => {
            parser.emit(Production::ReadTargetPlain);
            Some(parser.advance())
        }
        TokenKind::OpenParen => {
            parser.emit(Production::ReadTargetParen);
            parser.advance();
            let target = parser.expect(TokenKind::Identifier);
            parser.expect(TokenKind::CloseParen);
            target
        }
        _ => {
            parser.expected_one_of("an identifier or '('");
            None
        }
    };

    if let Some(target) = target {
        if resolve_variable(parser, &target) == DataType::Boolean {
            let name = parser.lexeme_of(&target);
            parser.semantic_error(ErrorImpl::ReadBoolean { name }, target.line);
        }
    }

    parser.expect(TokenKind::Semicolon);
    DataType::Void
}

/// `SW -> write X ;`
pub fn parse_write_stmt(parser: &mut Parser) -> DataType {
    parser.emit(Production::Write);
    let line = parser.advance().line;

    if parse_expr(parser) == DataType::Boolean {
        parser.semantic_error(ErrorImpl::WriteBoolean, line);
    }

    parser.expect(TokenKind::Semicolon);
    DataType::Void
}

/// `ST -> return X0 ;`
pub fn parse_return_stmt(parser: &mut Parser) -> DataType {
    parser.emit(Production::Return);
    parser.advance();

    let value_type = if parser.at_any(FIRST_EXPRESSION) {
        parser.emit(Production::ReturnValue);
        parse_expr(parser)
    } else {
        parser.emit(Production::ReturnEmpty);
        DataType::Void
    };

    parser.expect(TokenKind::Semicolon);
    value_type
}

pub fn parse_empty_stmt(parser: &mut Parser) -> DataType {
    parser.expect(TokenKind::Semicolon);
    DataType::Void
}

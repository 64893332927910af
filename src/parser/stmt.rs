use crate::{
    ast::statements::{ExpressionStmt, ReturnStmt, Stmt, VarDeclStmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token();

    if token.is_keyword("return") {
        return parse_return_stmt(parser);
    }
    if token.is_keyword("let") {
        return parse_implicit_var_decl_stmt(parser);
    }
    if token.is_type_name() && parser.peek(1).kind == TokenKind::Identifier {
        return parse_explicit_var_decl_stmt(parser);
    }

    let start = token.span.start;
    let expression = parse_expr(parser)?;

    parser.expect_symbol(";")?;

    Ok(Stmt::Expression(ExpressionStmt {
        expression,
        span: parser.span_from(start),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let value = if parser.current_token().is_symbol(";") {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    parser.expect_symbol(";")?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: parser.span_from(start),
    }))
}

/// `let name = value;`. The initializer is mandatory since no type is given.
pub fn parse_implicit_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let identifier = parser.expect(TokenKind::Identifier, "variable name")?.value;

    if !parser.current_token().is_operator("=") {
        return Err(Error::new(
            ErrorImpl::MissingInitializer {
                variable: identifier,
            },
            parser.get_position(),
        ));
    }
    parser.advance();
    let assigned_value = Some(parse_expr(parser)?);

    parser.expect_symbol(";")?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        explicit_type: None,
        assigned_value,
        span: parser.span_from(start),
    }))
}

/// `Type name;` or `Type name = value;`.
pub fn parse_explicit_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let type_token = parser.expect_type_name()?;
    let identifier = parser.expect(TokenKind::Identifier, "variable name")?.value;

    let assigned_value = if parser.current_token().is_operator("=") {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect_symbol(";")?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        explicit_type: Some(type_token.value),
        assigned_value,
        span: parser.span_from(type_token.span.start),
    }))
}

use crate::{
    ast::expressions::{
        BinaryExpr, BinaryOperator, CallExpr, Expr, IdentifierExpr, LiteralExpr, LiteralValue,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::parser::Parser;

/// Parses a flat chain `primary (op primary)*`, folding to the left.
///
/// Every operator binds equally: `1 + 2 * 3` yields `(1 + 2) * 3`.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_primary_expr(parser)?;

    while let Some(operator) = current_binary_operator(parser) {
        parser.advance();
        let right = parse_primary_expr(parser)?;

        left = Expr::Binary(BinaryExpr {
            span: Span::new(left.get_span().start, right.get_span().end),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

/// Operators are matched on token text alone, so a string literal `"+"`
/// also continues the chain.
fn current_binary_operator(parser: &Parser) -> Option<BinaryOperator> {
    BinaryOperator::from_symbol(&parser.current_token().value)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    match token.kind {
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(value) => {
                let span = parser.advance().span;
                Ok(Expr::Literal(LiteralExpr {
                    value: LiteralValue::Integer(value),
                    span,
                }))
            }
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.position(),
            )),
        },
        TokenKind::String => {
            let token = parser.advance();
            Ok(Expr::Literal(LiteralExpr {
                value: LiteralValue::String(token.value),
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            let target = Expr::Identifier(IdentifierExpr {
                name: token.value,
                span: token.span,
            });
            parse_possible_call(parser, target)
        }
        TokenKind::Keyword if token.value == "this" => {
            let token = parser.advance();
            let target = Expr::Identifier(IdentifierExpr {
                name: token.value,
                span: token.span,
            });
            parse_possible_call(parser, target)
        }
        TokenKind::EndOfFile => Err(parser.error_expected("expression")),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.describe(),
            },
            token.position(),
        )),
    }
}

/// Wraps `target` in a call when followed by `. name (`.
///
/// Only one call is recognised per primary; `a.b().c()` is not a call chain
/// and fails at the second `.`.
pub fn parse_possible_call(parser: &mut Parser, target: Expr) -> Result<Expr, Error> {
    let is_call = parser.current_token().is_symbol(".")
        && parser.peek(1).kind == TokenKind::Identifier
        && parser.peek(2).is_symbol("(");

    if !is_call {
        return Ok(target);
    }

    parser.advance();
    let method_name = parser.advance().value;
    parser.advance();

    let mut arguments = Vec::new();
    if !parser.current_token().is_symbol(")") {
        loop {
            arguments.push(parse_expr(parser)?);

            if !parser.current_token().is_symbol(",") {
                break;
            }
            parser.advance();
        }
    }

    parser.expect_symbol(")")?;

    Ok(Expr::Call(CallExpr {
        span: parser.span_from(target.get_span().start),
        target: Box::new(target),
        method_name,
        arguments,
    }))
}

use crate::{
    ast::ast::{
        ClassDeclaration, FieldDeclaration, Member, MethodDeclaration, Parameter,
        PropertyDeclaration, SpaceDeclaration, TypeDeclaration,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::{expr::parse_expr, parser::Parser, stmt::parse_stmt};

/// `space A.B.C;` followed by the type declarations of that space.
pub fn parse_space_decl(parser: &mut Parser) -> Result<SpaceDeclaration, Error> {
    if !parser.current_token().is_keyword("space") {
        return Err(Error::new(
            ErrorImpl::ExpectedSpaceDeclaration {
                found: parser.current_token().describe(),
            },
            parser.get_position(),
        ));
    }

    let start = parser.advance().span.start;

    let mut name = parser.expect(TokenKind::Identifier, "space name")?.value;
    while parser.current_token().is_symbol(".") {
        parser.advance();
        name.push('.');
        name.push_str(&parser.expect(TokenKind::Identifier, "space name")?.value);
    }

    parser.expect_symbol(";")?;

    let mut declarations = Vec::new();
    while parser.has_tokens() {
        declarations.push(parse_type_decl(parser)?);
    }

    Ok(SpaceDeclaration {
        name,
        declarations,
        parent: None,
        span: parser.span_from(start),
    })
}

pub fn parse_type_decl(parser: &mut Parser) -> Result<TypeDeclaration, Error> {
    if parser.current_token().is_keyword("class") {
        return Ok(TypeDeclaration::Class(parse_class_decl(parser)?));
    }

    Err(Error::new(
        ErrorImpl::ExpectedTypeDeclaration {
            found: parser.current_token().describe(),
        },
        parser.get_position(),
    ))
}

pub fn parse_class_decl(parser: &mut Parser) -> Result<ClassDeclaration, Error> {
    let start = parser.advance().span.start;

    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::ExpectedClassName {
                found: parser.current_token().describe(),
            },
            parser.get_position(),
        ));
    }
    let name = parser.advance().value;

    parser.expect_symbol("{")?;

    let mut members = Vec::new();
    while !parser.current_token().is_symbol("}") {
        members.push(parse_member(parser)?);
    }

    parser.expect_symbol("}")?;

    Ok(ClassDeclaration {
        name,
        members,
        span: parser.span_from(start),
    })
}

/// Reads `<type> <name>` and lets the token after the name pick the member
/// kind: `(` method, `=`/`;` field, `{` property.
pub fn parse_member(parser: &mut Parser) -> Result<Member, Error> {
    let type_token = parser.expect_type_name()?;
    let name = parser.expect(TokenKind::Identifier, "member name")?.value;

    let start = type_token.span.start;
    let type_name = type_token.value;
    let next = parser.current_token();

    if next.is_symbol("(") {
        parse_method_decl(parser, start, type_name, name).map(Member::Method)
    } else if next.is_operator("=") || next.is_symbol(";") {
        parse_field_decl(parser, start, type_name, name).map(Member::Field)
    } else if next.is_symbol("{") {
        parse_property_decl(parser, start, type_name, name).map(Member::Property)
    } else {
        Err(Error::new(
            ErrorImpl::UnknownMemberDeclaration {
                member: name,
                found: next.describe(),
            },
            next.position(),
        ))
    }
}

fn parse_method_decl(
    parser: &mut Parser,
    start: Position,
    return_type: String,
    name: String,
) -> Result<MethodDeclaration, Error> {
    parser.expect_symbol("(")?;

    let mut parameters = Vec::new();
    if !parser.current_token().is_symbol(")") {
        loop {
            let type_token = parser.expect_type_name()?;
            let param_name = parser.expect(TokenKind::Identifier, "parameter name")?.value;
            parameters.push(Parameter {
                name: param_name,
                type_name: type_token.value,
                span: parser.span_from(type_token.span.start),
            });

            if !parser.current_token().is_symbol(",") {
                break;
            }
            parser.advance();
        }
    }

    parser.expect_symbol(")")?;
    parser.expect_symbol("{")?;

    let mut body = Vec::new();
    while !parser.current_token().is_symbol("}") {
        body.push(parse_stmt(parser)?);
    }

    parser.expect_symbol("}")?;

    Ok(MethodDeclaration {
        name,
        return_type,
        parameters,
        body,
        span: parser.span_from(start),
    })
}

fn parse_field_decl(
    parser: &mut Parser,
    start: Position,
    type_name: String,
    name: String,
) -> Result<FieldDeclaration, Error> {
    let initializer = if parser.current_token().is_operator("=") {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect_symbol(";")?;

    Ok(FieldDeclaration {
        name,
        type_name,
        initializer,
        span: parser.span_from(start),
    })
}

fn parse_property_decl(
    parser: &mut Parser,
    start: Position,
    type_name: String,
    name: String,
) -> Result<PropertyDeclaration, Error> {
    parser.expect_symbol("{")?;

    let mut has_getter = false;
    let mut has_setter = false;

    while !parser.current_token().is_symbol("}") {
        let accessor = parser.current_token().clone();
        if accessor.is_eof() {
            return Err(parser.error_expected("`}`"));
        }

        let seen = match accessor.value.as_str() {
            "get" if accessor.kind == TokenKind::Keyword => &mut has_getter,
            "set" if accessor.kind == TokenKind::Keyword => &mut has_setter,
            _ => {
                return Err(Error::new(
                    ErrorImpl::InvalidAccessor {
                        found: accessor.describe(),
                    },
                    accessor.position(),
                ))
            }
        };

        if *seen {
            let position = accessor.position();
            return Err(Error::new(
                ErrorImpl::DuplicateAccessor {
                    property: name,
                    accessor: accessor.value,
                },
                position,
            ));
        }
        *seen = true;

        parser.advance();
        parser.expect_symbol(";")?;
    }

    parser.expect_symbol("}")?;

    Ok(PropertyDeclaration {
        name,
        type_name,
        has_getter,
        has_setter,
        span: parser.span_from(start),
    })
}

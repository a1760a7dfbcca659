//! Top-level productions.

use tracing::debug;

use crate::{
    ast::{
        ast::{NodeId, TokenId, TokenRange},
        items::{
            Enum, Function, FunctionHeader, FunctionParam, Primary, PrimaryTag, PrimaryTagKind,
            Struct,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    parser::{parse_list, parse_separated, Parser},
    stmt::{parse_block, parse_declaration},
    types::{parse_identifier, parse_type},
};

/// `PrimaryTag* EOF`. The first tag that matches nothing is a fatal error.
pub fn parse_primary(parser: &mut Parser) -> Result<NodeId<Primary>, Error> {
    let start = parser.position();
    let mark = parser.ast().scratch_mark();

    while parser.current_token_kind() != TokenKind::EOF {
        parser.reset_furthest();

        match parse_primary_tag(parser) {
            Some(tag) => parser.ast_mut().push_scratch(tag),
            None => {
                parser.ast_mut().discard_scratch(mark);
                let error = parser.unexpected_token_error();
                debug!(position = error.get_position(), "no top-level production matched");
                return Err(error);
            }
        }
    }

    let tags = parser.ast_mut().finish_list(mark);
    // The range covers EOF so an empty program is still non-empty.
    let span = TokenRange::new(start, parser.position() + 1);

    Ok(parser.ast_mut().alloc(Primary { span, tags }))
}

/// Tries declaration, struct, enum and function in that order.
pub fn parse_primary_tag(parser: &mut Parser) -> Option<NodeId<PrimaryTag>> {
    parser.attempt(|parser| {
        let start = parser.position();

        let kind = if let Some(declaration) = parse_declaration(parser) {
            PrimaryTagKind::Declaration(declaration)
        } else if let Some(structure) = parse_struct(parser) {
            PrimaryTagKind::Struct(structure)
        } else if let Some(enumeration) = parse_enum(parser) {
            PrimaryTagKind::Enum(enumeration)
        } else {
            PrimaryTagKind::Function(parse_function(parser)?)
        };

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(PrimaryTag { span, kind }))
    })
}

/// `'struct' Identifier '{' Declaration* '}' ';'`
pub fn parse_struct(parser: &mut Parser) -> Option<NodeId<Struct>> {
    parser.attempt(|parser| {
        let start = parser.position();
        parser.expect(TokenKind::Struct)?;
        let identifier = parse_identifier(parser)?;
        parser.expect(TokenKind::OpenCurly)?;
        let declarations = parse_list(parser, parse_declaration);
        parser.expect(TokenKind::CloseCurly)?;
        parser.expect(TokenKind::Semicolon)?;

        let span = parser.range_from(start);
        parser.matched("struct", start);
        Some(parser.ast_mut().alloc(Struct {
            span,
            identifier,
            declarations,
        }))
    })
}

fn parse_enum_member(parser: &mut Parser) -> Option<TokenId> {
    parser.expect(TokenKind::Identifier)
}

/// `'enum' Identifier '{' (IDENT (',' IDENT)*)? '}' ';'`
pub fn parse_enum(parser: &mut Parser) -> Option<NodeId<Enum>> {
    parser.attempt(|parser| {
        let start = parser.position();
        parser.expect(TokenKind::Enum)?;
        let identifier = parse_identifier(parser)?;
        parser.expect(TokenKind::OpenCurly)?;
        let members = parse_separated(parser, parse_enum_member, TokenKind::Comma)?;
        parser.expect(TokenKind::CloseCurly)?;
        parser.expect(TokenKind::Semicolon)?;

        let span = parser.range_from(start);
        parser.matched("enum", start);
        Some(parser.ast_mut().alloc(Enum {
            span,
            identifier,
            members,
        }))
    })
}

pub fn parse_function_param(parser: &mut Parser) -> Option<NodeId<FunctionParam>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let identifier = parse_identifier(parser)?;
        parser.expect(TokenKind::Colon)?;
        let param_type = parse_type(parser)?;

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(FunctionParam {
            span,
            identifier,
            param_type,
        }))
    })
}

/// `'export'? 'func' Identifier '(' params ')' ':' Type`
pub fn parse_function_header(parser: &mut Parser) -> Option<NodeId<FunctionHeader>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let export = parser.expect(TokenKind::Export).is_some();
        parser.expect(TokenKind::Func)?;
        let identifier = parse_identifier(parser)?;
        parser.expect(TokenKind::OpenParen)?;
        let params = parse_separated(parser, parse_function_param, TokenKind::Comma)?;
        parser.expect(TokenKind::CloseParen)?;
        parser.expect(TokenKind::Colon)?;
        let return_type = parse_type(parser)?;

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(FunctionHeader {
            span,
            export,
            identifier,
            params,
            return_type,
        }))
    })
}

/// A header followed by either a body or `;` for a forward declaration.
pub fn parse_function(parser: &mut Parser) -> Option<NodeId<Function>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let header = parse_function_header(parser)?;

        let body = if parser.check(TokenKind::Semicolon) {
            parser.advance();
            None
        } else {
            Some(parse_block(parser)?)
        };

        let span = parser.range_from(start);
        parser.matched("function", start);
        Some(parser.ast_mut().alloc(Function { span, header, body }))
    })
}

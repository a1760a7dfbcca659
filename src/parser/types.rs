//! Names, type annotations and qualifiers.

use crate::{
    ast::{
        ast::NodeId,
        types::{Identifier, Qualifier, TypeKind, TypeNode},
    },
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{QUALIFIER_LOOKUP, SIMPLE_TYPE_LOOKUP},
    parser::Parser,
};

/// `IDENT ('.' Identifier)?`
///
/// A trailing dot with no name after it is left unconsumed.
pub fn parse_identifier(parser: &mut Parser) -> Option<NodeId<Identifier>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let name = parser.expect(TokenKind::Identifier)?;

        let next = if parser.check(TokenKind::Dot) {
            parser.attempt(|parser| {
                parser.advance();
                parse_identifier(parser)
            })
        } else {
            None
        };

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(Identifier { span, name, next }))
    })
}

/// A primitive type keyword or a user-defined type name.
pub fn parse_type(parser: &mut Parser) -> Option<NodeId<TypeNode>> {
    parser.attempt(|parser| {
        let start = parser.position();

        let kind = match SIMPLE_TYPE_LOOKUP.get(&parser.current_token_kind()) {
            Some(simple) => {
                let simple = *simple;
                parser.advance();
                TypeKind::Simple(simple)
            }
            None => TypeKind::Named(parse_identifier(parser)?),
        };

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(TypeNode { span, kind }))
    })
}

pub fn parse_qualifier(parser: &mut Parser) -> Option<NodeId<Qualifier>> {
    let start = parser.position();
    let Some(kind) = QUALIFIER_LOOKUP.get(&parser.current_token_kind()).copied() else {
        return parser.miss();
    };
    parser.advance();

    let span = parser.range_from(start);
    Some(parser.ast_mut().alloc(Qualifier { span, kind }))
}

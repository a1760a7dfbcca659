use crate::{
    ast::{
        ast::{NodeId, NodeList},
        expressions::Expr,
        statements::{
            Assignment, Block, BlockTag, BlockTagKind, Break, Conditional, Continue, Declaration,
            Return, Statement, StatementKind, While,
        },
    },
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    parser::{parse_list, Parser},
    types::{parse_identifier, parse_qualifier, parse_type},
};

/// `Qualifier* Identifier ':' Type ('=' Expr)? ';'`
pub fn parse_declaration(parser: &mut Parser) -> Option<NodeId<Declaration>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let qualifiers = parse_list(parser, parse_qualifier);
        let identifier = parse_identifier(parser)?;
        parser.expect(TokenKind::Colon)?;
        let decl_type = parse_type(parser)?;

        let initializer = if parser.check(TokenKind::Assignment) {
            parser.advance();
            Some(parse_expr(parser)?)
        } else {
            None
        };

        parser.expect(TokenKind::Semicolon)?;

        let span = parser.range_from(start);
        parser.matched("declaration", start);
        Some(parser.ast_mut().alloc(Declaration {
            span,
            qualifiers,
            identifier,
            decl_type,
            initializer,
        }))
    })
}

/// Control flow, assignment, or an expression followed by `;`.
pub fn parse_stmt(parser: &mut Parser) -> Option<NodeId<Statement>> {
    parser.attempt(|parser| {
        let start = parser.position();

        let kind = match parser.current_token_kind() {
            TokenKind::If => StatementKind::Conditional(parse_conditional_stmt(parser)?),
            TokenKind::While => StatementKind::While(parse_while_stmt(parser)?),
            TokenKind::Break => StatementKind::Break(parse_break_stmt(parser)?),
            TokenKind::Continue => StatementKind::Continue(parse_continue_stmt(parser)?),
            TokenKind::Return => StatementKind::Return(parse_return_stmt(parser)?),
            _ => match parse_assignment_stmt(parser) {
                Some(assignment) => StatementKind::Assignment(assignment),
                None => StatementKind::Expr(parse_expression_stmt(parser)?),
            },
        };

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(Statement { span, kind }))
    })
}

/// `'if' Expr Block ('else' Block)?`
pub fn parse_conditional_stmt(parser: &mut Parser) -> Option<NodeId<Conditional>> {
    parser.attempt(|parser| {
        let start = parser.position();
        parser.expect(TokenKind::If)?;
        let condition = parse_expr(parser)?;
        let then_block = parse_block(parser)?;

        let else_block = if parser.check(TokenKind::Else) {
            parser.advance();
            Some(parse_block(parser)?)
        } else {
            None
        };

        let span = parser.range_from(start);
        parser.matched("conditional", start);
        Some(parser.ast_mut().alloc(Conditional {
            span,
            condition,
            then_block,
            else_block,
        }))
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Option<NodeId<While>> {
    parser.attempt(|parser| {
        let start = parser.position();
        parser.expect(TokenKind::While)?;
        let condition = parse_expr(parser)?;
        let body = parse_block(parser)?;

        let span = parser.range_from(start);
        parser.matched("while", start);
        Some(parser.ast_mut().alloc(While {
            span,
            condition,
            body,
        }))
    })
}

pub fn parse_break_stmt(parser: &mut Parser) -> Option<NodeId<Break>> {
    parser.attempt(|parser| {
        let start = parser.position();
        parser.expect(TokenKind::Break)?;
        parser.expect(TokenKind::Semicolon)?;

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(Break { span }))
    })
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Option<NodeId<Continue>> {
    parser.attempt(|parser| {
        let start = parser.position();
        parser.expect(TokenKind::Continue)?;
        parser.expect(TokenKind::Semicolon)?;

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(Continue { span }))
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<NodeId<Return>> {
    parser.attempt(|parser| {
        let start = parser.position();
        parser.expect(TokenKind::Return)?;

        let value = if parser.check(TokenKind::Semicolon) {
            None
        } else {
            Some(parse_expr(parser)?)
        };
        parser.expect(TokenKind::Semicolon)?;

        let span = parser.range_from(start);
        parser.matched("return", start);
        Some(parser.ast_mut().alloc(Return { span, value }))
    })
}

/// `Identifier '=' Expr ';'`
pub fn parse_assignment_stmt(parser: &mut Parser) -> Option<NodeId<Assignment>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let identifier = parse_identifier(parser)?;
        parser.expect(TokenKind::Assignment)?;
        let value = parse_expr(parser)?;
        parser.expect(TokenKind::Semicolon)?;

        let span = parser.range_from(start);
        parser.matched("assignment", start);
        Some(parser.ast_mut().alloc(Assignment {
            span,
            identifier,
            value,
        }))
    })
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<NodeId<Expr>> {
    parser.attempt(|parser| {
        let expr = parse_expr(parser)?;
        parser.expect(TokenKind::Semicolon)?;
        Some(expr)
    })
}

/// A lone statement, or `'{' (':' Identifier ';')? Declaration* BlockTag* '}'`.
pub fn parse_block(parser: &mut Parser) -> Option<NodeId<Block>> {
    parser.attempt(|parser| {
        let start = parser.position();

        if !parser.check(TokenKind::OpenCurly) {
            let statement = parse_stmt(parser)?;
            let span = parser.range_from(start);
            return Some(parser.ast_mut().alloc(Block {
                span,
                namespace: None,
                statement: Some(statement),
                declarations: NodeList::EMPTY,
                tags: NodeList::EMPTY,
            }));
        }
        parser.advance();

        let namespace = if parser.check(TokenKind::Colon) {
            parser.advance();
            let name = parse_identifier(parser)?;
            parser.expect(TokenKind::Semicolon)?;
            Some(name)
        } else {
            None
        };

        let declarations = parse_list(parser, parse_declaration);
        let tags = parse_list(parser, parse_block_tag);
        parser.expect(TokenKind::CloseCurly)?;

        let span = parser.range_from(start);
        parser.matched("block", start);
        Some(parser.ast_mut().alloc(Block {
            span,
            namespace,
            statement: None,
            declarations,
            tags,
        }))
    })
}

pub fn parse_block_tag(parser: &mut Parser) -> Option<NodeId<BlockTag>> {
    parser.attempt(|parser| {
        let start = parser.position();

        let kind = match parse_stmt(parser) {
            Some(statement) => BlockTagKind::Statement(statement),
            None => BlockTagKind::Block(parse_block(parser)?),
        };

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(BlockTag { span, kind }))
    })
}

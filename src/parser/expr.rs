use crate::{
    ast::{
        ast::{NodeId, TokenRange},
        expressions::{Binary, BinaryOp, Call, Expr, ExprKind, Literal, LiteralKind, Unary},
    },
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, BINARY_LOOKUP, UNARY_LOOKUP},
    parser::{parse_separated, Parser},
    types::parse_identifier,
};

/// Parses a full expression, binary operators included.
pub fn parse_expr(parser: &mut Parser) -> Option<NodeId<Expr>> {
    parse_binary_expr(parser)
}

/// Any expression that is not itself a binary operation.
fn parse_operand(parser: &mut Parser) -> Option<NodeId<Expr>> {
    parse_grouping_expr(parser)
        .or_else(|| parse_call_expr(parser))
        .or_else(|| parse_unary_expr(parser))
        .or_else(|| parse_identifier_expr(parser))
        .or_else(|| parse_literal_expr(parser))
}

/// `'(' Expr ')'`. Yields the inner node, widened over the parentheses.
pub fn parse_grouping_expr(parser: &mut Parser) -> Option<NodeId<Expr>> {
    parser.attempt(|parser| {
        let start = parser.position();
        parser.expect(TokenKind::OpenParen)?;
        let inner = parse_expr(parser)?;
        parser.expect(TokenKind::CloseParen)?;

        let span = parser.range_from(start);
        parser.ast_mut().get_mut(inner).span = span;
        parser.matched("grouping", start);
        Some(inner)
    })
}

pub fn parse_call_expr(parser: &mut Parser) -> Option<NodeId<Expr>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let identifier = parse_identifier(parser)?;
        parser.expect(TokenKind::OpenParen)?;
        let args = parse_separated(parser, parse_expr, TokenKind::Comma)?;
        parser.expect(TokenKind::CloseParen)?;

        let span = parser.range_from(start);
        parser.matched("call", start);
        Some(parser.ast_mut().alloc(Expr {
            span,
            kind: ExprKind::Call(Call { identifier, args }),
        }))
    })
}

pub fn parse_unary_expr(parser: &mut Parser) -> Option<NodeId<Expr>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let op = *UNARY_LOOKUP.get(&parser.current_token_kind())?;
        parser.advance();
        let operand = parse_operand(parser)?;

        let span = parser.range_from(start);
        parser.matched("unary", start);
        Some(parser.ast_mut().alloc(Expr {
            span,
            kind: ExprKind::Unary(Unary { op, operand }),
        }))
    })
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<NodeId<Expr>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let identifier = parse_identifier(parser)?;

        let span = parser.range_from(start);
        Some(parser.ast_mut().alloc(Expr {
            span,
            kind: ExprKind::Identifier(identifier),
        }))
    })
}

pub fn parse_literal_expr(parser: &mut Parser) -> Option<NodeId<Expr>> {
    let start = parser.position();
    let kind = match parser.current_token_kind() {
        TokenKind::String => LiteralKind::String,
        TokenKind::Number => LiteralKind::Int,
        TokenKind::Float => LiteralKind::Float,
        TokenKind::True => LiteralKind::Bool(true),
        TokenKind::False => LiteralKind::Bool(false),
        _ => return parser.miss(),
    };
    let token = parser.advance();

    let span = parser.range_from(start);
    Some(parser.ast_mut().alloc(Expr {
        span,
        kind: ExprKind::Literal(Literal { kind, token }),
    }))
}

/// Precedence climbing over explicit operand and operator stacks.
///
/// An incoming operator first folds every stacked operator that binds at
/// least as tightly, so equal powers associate to the left. If no operand
/// follows an operator, the operator is left unconsumed and the expression
/// ends before it.
pub fn parse_binary_expr(parser: &mut Parser) -> Option<NodeId<Expr>> {
    parser.attempt(|parser| {
        let start = parser.position();
        let mut operands = vec![parse_operand(parser)?];
        let mut operators: Vec<(BinaryOp, BindingPower)> = vec![];

        while let Some(&(op, bp)) = BINARY_LOOKUP.get(&parser.current_token_kind()) {
            let before = parser.position();
            parser.advance();

            let Some(operand) = parse_operand(parser) else {
                parser.rewind(before);
                break;
            };

            while let Some(&(_, top)) = operators.last() {
                if bp > top {
                    break;
                }
                fold(parser, &mut operands, &mut operators);
            }

            operands.push(operand);
            operators.push((op, bp));
        }

        while !operators.is_empty() {
            fold(parser, &mut operands, &mut operators);
        }

        parser.matched("expr", start);
        operands.pop()
    })
}

/// Pops one operator and its two operands and pushes the combined node.
fn fold(
    parser: &mut Parser,
    operands: &mut Vec<NodeId<Expr>>,
    operators: &mut Vec<(BinaryOp, BindingPower)>,
) {
    let (Some((op, _)), Some(right), Some(left)) = (operators.pop(), operands.pop(), operands.pop())
    else {
        return;
    };

    let ast = parser.ast_mut();
    let span = TokenRange {
        start: ast.get(left).span.start,
        end: ast.get(right).span.end,
    };

    let node = ast.alloc(Expr {
        span,
        kind: ExprKind::Binary(Binary { op, left, right }),
    });
    operands.push(node);
}

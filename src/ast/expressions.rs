use std::fmt::Display;

use super::{
    ast::{NodeId, NodeList, TokenId, TokenRange},
    types::Identifier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
    Xor,
}

impl BinaryOp {
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Xor)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Plus,
    Minus,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Minus => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Int,
    Float,
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub token: TokenId,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Call {
    pub identifier: NodeId<Identifier>,
    pub args: NodeList<NodeId<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unary {
    pub op: UnaryOp,
    pub operand: NodeId<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binary {
    pub op: BinaryOp,
    pub left: NodeId<Expr>,
    pub right: NodeId<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprKind {
    Call(Call),
    Unary(Unary),
    Binary(Binary),
    Identifier(NodeId<Identifier>),
    Literal(Literal),
}

/// Expression node. A parenthesised expression is the inner node with its
/// span widened over the parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub span: TokenRange,
    pub kind: ExprKind,
}

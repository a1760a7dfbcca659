use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        expressions::{BinaryOp, UnaryOp},
        types::{QualifierKind, SimpleType},
    },
    lexer::tokens::TokenKind,
};

/// How tightly a binary operator binds, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

lazy_static! {
    pub static ref BINARY_LOOKUP: HashMap<TokenKind, (BinaryOp, BindingPower)> = {
        let mut map = HashMap::new();
        // Logical
        map.insert(TokenKind::Or, (BinaryOp::Or, BindingPower::LogicalOr));
        map.insert(TokenKind::Xor, (BinaryOp::Xor, BindingPower::LogicalOr));
        map.insert(TokenKind::And, (BinaryOp::And, BindingPower::LogicalAnd));

        // Equality and relational
        map.insert(TokenKind::Equals, (BinaryOp::Eq, BindingPower::Equality));
        map.insert(TokenKind::NotEquals, (BinaryOp::Ne, BindingPower::Equality));
        map.insert(TokenKind::Less, (BinaryOp::Lt, BindingPower::Relational));
        map.insert(TokenKind::LessEquals, (BinaryOp::Le, BindingPower::Relational));
        map.insert(TokenKind::Greater, (BinaryOp::Gt, BindingPower::Relational));
        map.insert(TokenKind::GreaterEquals, (BinaryOp::Ge, BindingPower::Relational));

        // Additive and multiplicative
        map.insert(TokenKind::Plus, (BinaryOp::Add, BindingPower::Additive));
        map.insert(TokenKind::Dash, (BinaryOp::Sub, BindingPower::Additive));
        map.insert(TokenKind::Star, (BinaryOp::Mul, BindingPower::Multiplicative));
        map.insert(TokenKind::Slash, (BinaryOp::Div, BindingPower::Multiplicative));
        map.insert(TokenKind::Percent, (BinaryOp::Mod, BindingPower::Multiplicative));
        map
    };

    pub static ref UNARY_LOOKUP: HashMap<TokenKind, UnaryOp> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Not, UnaryOp::Not);
        map.insert(TokenKind::Plus, UnaryOp::Plus);
        map.insert(TokenKind::Dash, UnaryOp::Minus);
        map
    };

    pub static ref SIMPLE_TYPE_LOOKUP: HashMap<TokenKind, SimpleType> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::I8, SimpleType::I8);
        map.insert(TokenKind::U8, SimpleType::U8);
        map.insert(TokenKind::I32, SimpleType::I32);
        map.insert(TokenKind::U32, SimpleType::U32);
        map.insert(TokenKind::F32, SimpleType::F32);
        map
    };

    pub static ref QUALIFIER_LOOKUP: HashMap<TokenKind, QualifierKind> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Const, QualifierKind::Const);
        map.insert(TokenKind::Mut, QualifierKind::Mut);
        map.insert(TokenKind::Export, QualifierKind::Export);
        map
    };
}

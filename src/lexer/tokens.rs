use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("break", TokenKind::Break);
        map.insert("const", TokenKind::Const);
        map.insert("continue", TokenKind::Continue);
        map.insert("else", TokenKind::Else);
        map.insert("enum", TokenKind::Enum);
        map.insert("export", TokenKind::Export);
        map.insert("false", TokenKind::False);
        map.insert("func", TokenKind::Func);
        map.insert("if", TokenKind::If);
        map.insert("mut", TokenKind::Mut);
        map.insert("or", TokenKind::Or);
        map.insert("return", TokenKind::Return);
        map.insert("struct", TokenKind::Struct);
        map.insert("true", TokenKind::True);
        map.insert("while", TokenKind::While);
        map.insert("xor", TokenKind::Xor);

        map.insert("i8", TokenKind::I8);
        map.insert("u8", TokenKind::U8);
        map.insert("i32", TokenKind::I32);
        map.insert("u32", TokenKind::U32);
        map.insert("f32", TokenKind::F32);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Float,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Dot,
    Semicolon,
    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Primitive types
    I8,
    U8,
    I32,
    U32,
    F32,

    // Reserved
    And,
    Break,
    Const,
    Continue,
    Else,
    Enum,
    Export,
    False,
    Func,
    If,
    Mut,
    Or,
    Return,
    Struct,
    True,
    While,
    Xor,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A token is a kind plus the byte range it covers. The text stays in the
/// source buffer and is recovered with [`Token::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.text(source)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}..{})", self.kind, self.span.start, self.span.end)
    }
}

//! Unit tests for the lexer module.

use pretty_assertions::assert_eq;

use super::{lexer::tokenize, tokens::TokenKind};
use crate::{errors::errors::ErrorKind, Span};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "and break const continue else enum export false func if mut or return struct true while xor";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::And,
            TokenKind::Break,
            TokenKind::Const,
            TokenKind::Continue,
            TokenKind::Else,
            TokenKind::Enum,
            TokenKind::Export,
            TokenKind::False,
            TokenKind::Func,
            TokenKind::If,
            TokenKind::Mut,
            TokenKind::Or,
            TokenKind::Return,
            TokenKind::Struct,
            TokenKind::True,
            TokenKind::While,
            TokenKind::Xor,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_primitive_types() {
    assert_eq!(
        kinds("i8 u8 i32 u32 f32"),
        vec![
            TokenKind::I8,
            TokenKind::U8,
            TokenKind::I32,
            TokenKind::U32,
            TokenKind::F32,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_1 _x funcs i64";
    let tokens = tokenize(source).unwrap();

    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].text(source), "foo");
    assert_eq!(tokens[1].text(source), "bar_1");
    assert_eq!(tokens[2].text(source), "_x");
    assert_eq!(tokens[3].text(source), "funcs");
    assert_eq!(tokens[4].text(source), "i64");
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text(source), "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].text(source), "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
}

#[test]
fn test_tokenize_string_keeps_quotes() {
    let source = "\"hello world\";";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text(source), "\"hello world\"");
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("== != <= >= ! = < > + - * / % . , : ;"),
        vec![
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Not,
            TokenKind::Assignment,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_brackets() {
    assert_eq!(
        kinds("( ) { } [ ]"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_skips_comments() {
    let source = "x // trailing words ; here\ny";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].text(source), "x");
    assert_eq!(tokens[1].text(source), "y");
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("x : u32;").unwrap();

    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert_eq!(tokens[1].span, Span::new(2, 3));
    assert_eq!(tokens[2].span, Span::new(4, 7));
    assert_eq!(tokens[3].span, Span::new(7, 8));
    assert_eq!(tokens[4].span, Span::new(8, 8));
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert!(tokens[0].span.is_empty());
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("x : u32 = #;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UnrecognisedToken);
    assert_eq!(error.get_span(), Span::new(10, 11));
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("\"open").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UnrecognisedToken);
    assert_eq!(error.get_position(), 0);
}

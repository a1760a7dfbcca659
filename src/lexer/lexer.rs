use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order, first match wins. Longer operators precede their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket) },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent) },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    pub pos: usize,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Number
    };

    lexer.push(MK_TOKEN!(kind, lexer.pos, lexer.pos + matched.len()));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, lexer.pos, lexer.pos + matched.len()));
    lexer.advance_n(matched.len());
}

/// Splits `source` into tokens, ending with an `EOF` token whose span is
/// empty and sits at the end of the input.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new();

    while lex.pos < source.len() {
        let remaining = &source[lex.pos..];
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

        match matched {
            Some((handler, text)) => handler(&mut lex, text),
            None => {
                let bad = remaining.chars().next().unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: bad.to_string(),
                    },
                    Span::new(lex.pos as u32, (lex.pos + bad.len_utf8()) as u32),
                ));
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, lex.pos, lex.pos));
    trace!(count = lex.tokens.len(), "tokenized source");
    Ok(lex.tokens)
}

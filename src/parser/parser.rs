//! Parser state and entry point.
//!
//! Every production is all-or-nothing: it either returns a node and leaves
//! the cursor after the tokens it consumed, or returns `None` and leaves the
//! cursor, the node arena and the scratch stack exactly as it found them.
//! [`Parser::attempt`] gives productions that guarantee.

use tracing::{debug, trace};

use crate::{
    arena::arena::Mark,
    ast::ast::{AstArena, Checkpoint, ListItem, NodeId, NodeList, Program, TokenId, TokenRange},
    ast::items::Primary,
    config::FrontendConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::items::parse_primary;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Token stream, always terminated by `EOF`
    tokens: &'a [Token],
    /// Text the tokens point into
    source: &'a str,
    /// Index of the current token
    pos: usize,
    /// Furthest token index a production has inspected and rejected
    furthest: usize,
    /// Nodes built so far
    ast: AstArena,
    /// Returned once the cursor runs off the end of `tokens`
    eof: Token,
}

/// Everything a failed production has to restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserState {
    pos: usize,
    checkpoint: Checkpoint,
    scratch: Mark,
}

impl<'a> Parser<'a> {
    /// A stream without a trailing `EOF`, including an empty one, reads as
    /// if it ended with `EOF` at the end of `source`.
    pub fn new(tokens: &'a [Token], source: &'a str, config: &FrontendConfig) -> Self {
        let end = source.len() as u32;
        let eof = match tokens.last() {
            Some(token) if token.kind == TokenKind::EOF => *token,
            _ => Token {
                kind: TokenKind::EOF,
                span: Span::new(end, end),
            },
        };

        Parser {
            tokens,
            source,
            pos: 0,
            furthest: 0,
            ast: AstArena::with_capacity(config.node_capacity, config.scratch_capacity),
            eof,
        }
    }

    fn token_at(&self, pos: usize) -> &Token {
        self.tokens.get(pos).unwrap_or(&self.eof)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.token_at(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the id of the previous one.
    /// Never moves past `EOF`.
    pub fn advance(&mut self) -> TokenId {
        let id = TokenId(self.pos as u32);
        if self.current_token_kind() != TokenKind::EOF {
            self.pos += 1;
        }
        id
    }

    /// Whether the current token is `kind`. A miss is remembered for error
    /// reporting.
    pub fn check(&mut self, kind: TokenKind) -> bool {
        let hit = self.current_token_kind() == kind;
        if !hit {
            self.furthest = self.furthest.max(self.pos);
        }
        hit
    }

    /// Consumes the current token if it is `kind`.
    pub fn expect(&mut self, kind: TokenKind) -> Option<TokenId> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Rejects the current token.
    pub fn miss<T>(&mut self) -> Option<T> {
        self.furthest = self.furthest.max(self.pos);
        None
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back to `pos`. Nodes are left alone.
    pub fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }

    /// Token range from `start` up to the current position.
    pub fn range_from(&self, start: usize) -> TokenRange {
        TokenRange::new(start, self.pos)
    }

    pub fn ast(&self) -> &AstArena {
        &self.ast
    }

    pub fn ast_mut(&mut self) -> &mut AstArena {
        &mut self.ast
    }

    pub fn save(&self) -> ParserState {
        ParserState {
            pos: self.pos,
            checkpoint: self.ast.checkpoint(),
            scratch: self.ast.scratch_mark(),
        }
    }

    pub fn restore(&mut self, state: ParserState) {
        self.pos = state.pos;
        self.ast.rollback(state.checkpoint);
        self.ast.discard_scratch(state.scratch);
    }

    /// Runs `production`, undoing everything it did if it returns `None`.
    pub fn attempt<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let state = self.save();
        let result = production(self);
        if result.is_none() {
            self.restore(state);
        }
        result
    }

    /// Starts a fresh furthest-failure window at the current token.
    pub fn reset_furthest(&mut self) {
        self.furthest = self.pos;
    }

    /// Error for a top-level construct that no production accepted.
    pub fn unexpected_token_error(&self) -> Error {
        let token = self.token_at(self.furthest);
        let text = match token.kind {
            TokenKind::EOF => "EOF",
            _ => token.text(self.source),
        };

        Error::new(
            ErrorImpl::UnexpectedToken {
                token: text.to_string(),
            },
            token.span,
        )
    }

    /// Logs a successful production.
    pub fn matched(&self, production: &str, start: usize) {
        trace!(production, start, end = self.pos, "matched");
    }

    fn into_ast(self) -> AstArena {
        self.ast
    }
}

/// Zero or more `production`s, stopping at the first that does not match.
pub fn parse_list<'a, T: ListItem>(
    parser: &mut Parser<'a>,
    production: impl Fn(&mut Parser<'a>) -> Option<T>,
) -> NodeList<T> {
    let mark = parser.ast().scratch_mark();
    while let Some(item) = production(parser) {
        parser.ast_mut().push_scratch(item);
    }
    parser.ast_mut().finish_list(mark)
}

/// `(item (separator item)*)?` with no trailing separator. A separator not
/// followed by an item fails the whole list.
pub fn parse_separated<'a, T: ListItem>(
    parser: &mut Parser<'a>,
    production: impl Fn(&mut Parser<'a>) -> Option<T>,
    separator: TokenKind,
) -> Option<NodeList<T>> {
    let mark = parser.ast().scratch_mark();

    if let Some(first) = production(parser) {
        parser.ast_mut().push_scratch(first);

        while parser.check(separator) {
            let item = parser.attempt(|parser| {
                parser.advance();
                production(parser)
            });

            match item {
                Some(item) => parser.ast_mut().push_scratch(item),
                None => {
                    parser.ast_mut().discard_scratch(mark);
                    return None;
                }
            }
        }
    }

    Some(parser.ast_mut().finish_list(mark))
}

/// Parses a token stream into a [`Program`].
///
/// `tokens` must end with an `EOF` token, as [`tokenize`] produces. Parsing
/// stops at the first top-level construct that cannot be matched.
///
/// [`tokenize`]: crate::lexer::lexer::tokenize
pub fn parse<'a>(
    tokens: &'a [Token],
    source: &'a str,
    config: &FrontendConfig,
) -> Result<Program<'a>, Error> {
    match tokens.last() {
        Some(token) if token.kind == TokenKind::EOF => {}
        _ => {
            let end = source.len() as u32;
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: String::from("EOF"),
                },
                Span::new(end, end),
            ));
        }
    }

    let mut parser = Parser::new(tokens, source, config);
    let root: NodeId<Primary> = parse_primary(&mut parser)?;
    let ast = parser.into_ast();

    debug!(nodes = ast.node_count(), "parsed program");

    Ok(Program {
        source,
        tokens,
        ast,
        root,
    })
}

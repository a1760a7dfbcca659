use std::{fmt, marker::PhantomData};

use crate::{
    arena::arena::{Arena, Idx, Mark},
    lexer::tokens::Token,
    Span, MK_AST_NODE,
};

use super::{
    expressions::Expr,
    items::{Enum, Function, FunctionHeader, FunctionParam, Primary, PrimaryTag, Struct},
    statements::{
        Assignment, Block, BlockTag, Break, Conditional, Continue, Declaration, Return, Statement,
        While,
    },
    types::{Identifier, Qualifier, TypeNode},
};

/// Handle to a node of type `T` inside an [`AstArena`].
pub type NodeId<T> = Idx<T>;

/// Index into the token vector a program was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub u32);

impl TokenId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Half-open range `[start, end)` of token indices a node covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenRange {
    pub start: u32,
    pub end: u32,
}

impl TokenRange {
    pub fn new(start: usize, end: usize) -> Self {
        TokenRange {
            start: start as u32,
            end: end as u32,
        }
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Something that can be stored in a [`NodeList`].
pub trait ListItem: Copy {
    fn into_raw(self) -> u32;
    fn from_raw(raw: u32) -> Self;
}

impl<T> ListItem for Idx<T> {
    fn into_raw(self) -> u32 {
        self.raw()
    }

    fn from_raw(raw: u32) -> Self {
        Idx::from_raw(raw)
    }
}

impl ListItem for TokenId {
    fn into_raw(self) -> u32 {
        self.0
    }

    fn from_raw(raw: u32) -> Self {
        TokenId(raw)
    }
}

/// Finalized list of `T`, stored contiguously in the arena's list region.
pub struct NodeList<T> {
    start: u32,
    len: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> NodeList<T> {
    pub const EMPTY: NodeList<T> = NodeList {
        start: 0,
        len: 0,
        _marker: PhantomData,
    };

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Clone for NodeList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeList<T> {}

impl<T> PartialEq for NodeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.len == other.len
    }
}

impl<T> Eq for NodeList<T> {}

impl<T> fmt::Debug for NodeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeList({}..{})", self.start, self.start + self.len)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Identifier(Identifier),
    TypeNode(TypeNode),
    Qualifier(Qualifier),
    Declaration(Declaration),
    Assignment(Assignment),
    Conditional(Conditional),
    While(While),
    Break(Break),
    Continue(Continue),
    Return(Return),
    Statement(Statement),
    BlockTag(BlockTag),
    Block(Block),
    Expr(Expr),
    FunctionParam(FunctionParam),
    FunctionHeader(FunctionHeader),
    Function(Function),
    Struct(Struct),
    Enum(Enum),
    PrimaryTag(PrimaryTag),
    Primary(Primary),
}

/// A node struct that can live in the arena.
pub trait AstNode: Sized {
    const NAME: &'static str;

    fn into_node(self) -> Node;
    fn from_node(node: &Node) -> Option<&Self>;
    fn from_node_mut(node: &mut Node) -> Option<&mut Self>;
    fn span(&self) -> TokenRange;
}

MK_AST_NODE!(
    Identifier,
    TypeNode,
    Qualifier,
    Declaration,
    Assignment,
    Conditional,
    While,
    Break,
    Continue,
    Return,
    Statement,
    BlockTag,
    Block,
    Expr,
    FunctionParam,
    FunctionHeader,
    Function,
    Struct,
    Enum,
    PrimaryTag,
    Primary,
);

/// Saved arena state. Rolling back to it discards every node and finalized
/// list created afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    nodes: Mark,
    lists: Mark,
}

/// Storage for one parse: nodes, finalized lists and a scratch stack for
/// lists still being built.
#[derive(Debug, Default)]
pub struct AstArena {
    nodes: Arena<Node>,
    lists: Arena<u32>,
    scratch: Arena<u32>,
}

impl AstArena {
    pub fn with_capacity(nodes: usize, scratch: usize) -> Self {
        AstArena {
            nodes: Arena::with_capacity(nodes),
            lists: Arena::with_capacity(scratch),
            scratch: Arena::with_capacity(scratch),
        }
    }

    pub fn alloc<T: AstNode>(&mut self, node: T) -> NodeId<T> {
        self.nodes.alloc(node.into_node()).cast()
    }

    /// # Panics
    ///
    /// Panics if `id` does not refer to a live `T`.
    pub fn get<T: AstNode>(&self, id: NodeId<T>) -> &T {
        match self.nodes.get(id.cast()).and_then(T::from_node) {
            Some(node) => node,
            None => panic!("{:?} is not a live {}", id, T::NAME),
        }
    }

    /// # Panics
    ///
    /// Panics if `id` does not refer to a live `T`.
    pub fn get_mut<T: AstNode>(&mut self, id: NodeId<T>) -> &mut T {
        match self.nodes.get_mut(id.cast()).and_then(T::from_node_mut) {
            Some(node) => node,
            None => panic!("{:?} is not a live {}", id, T::NAME),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            nodes: self.nodes.checkpoint(),
            lists: self.lists.checkpoint(),
        }
    }

    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.nodes.rollback(checkpoint.nodes);
        self.lists.rollback(checkpoint.lists);
    }

    pub fn scratch_mark(&self) -> Mark {
        self.scratch.checkpoint()
    }

    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    pub fn push_scratch<T: ListItem>(&mut self, item: T) {
        self.scratch.alloc(item.into_raw());
    }

    pub fn discard_scratch(&mut self, mark: Mark) {
        self.scratch.rollback(mark);
    }

    /// Moves everything pushed since `mark` into list storage and pops it
    /// off the scratch stack.
    pub fn finish_list<T: ListItem>(&mut self, mark: Mark) -> NodeList<T> {
        let items = self.scratch.since(mark);
        let len = items.len() as u32;
        let start = self.lists.extend_from_slice(items);
        self.scratch.rollback(mark);

        NodeList {
            start: start.position() as u32,
            len,
            _marker: PhantomData,
        }
    }

    pub fn list<T: ListItem>(&self, list: NodeList<T>) -> impl Iterator<Item = T> + '_ {
        let start = list.start as usize;
        self.lists.as_slice()[start..start + list.len()]
            .iter()
            .map(|raw| T::from_raw(*raw))
    }
}

/// A parsed translation unit. Borrows the token vector and source text it
/// came from.
#[derive(Debug)]
pub struct Program<'src> {
    pub source: &'src str,
    pub tokens: &'src [Token],
    pub ast: AstArena,
    pub root: NodeId<Primary>,
}

impl<'src> Program<'src> {
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    pub fn token_text(&self, id: TokenId) -> &'src str {
        self.tokens[id.index()].text(self.source)
    }

    pub fn token_span(&self, id: TokenId) -> Span {
        self.tokens[id.index()].span
    }

    /// Byte span covered by a node's token range.
    pub fn byte_span(&self, range: TokenRange) -> Span {
        if range.is_empty() {
            let at = self.tokens[range.start as usize].span.start;
            return Span::new(at, at);
        }

        let first = self.tokens[range.start as usize].span;
        let last = self.tokens[range.end as usize - 1].span;
        first.to(last)
    }

    /// Full dotted text of an identifier chain, e.g. `a.b.c`.
    pub fn identifier_path(&self, id: NodeId<Identifier>) -> String {
        let mut path = String::new();
        let mut segment = Some(id);

        while let Some(current) = segment {
            let identifier = self.ast.get(current);
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(self.token_text(identifier.name));
            segment = identifier.next;
        }

        path
    }
}

use super::{
    ast::{NodeId, NodeList, TokenRange},
    expressions::Expr,
    types::{Identifier, Qualifier, TypeNode},
};

/// `qualifier* name : type (= expr)? ;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub span: TokenRange,
    pub qualifiers: NodeList<NodeId<Qualifier>>,
    pub identifier: NodeId<Identifier>,
    pub decl_type: NodeId<TypeNode>,
    pub initializer: Option<NodeId<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub span: TokenRange,
    pub identifier: NodeId<Identifier>,
    pub value: NodeId<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub span: TokenRange,
    pub condition: NodeId<Expr>,
    pub then_block: NodeId<Block>,
    pub else_block: Option<NodeId<Block>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub span: TokenRange,
    pub condition: NodeId<Expr>,
    pub body: NodeId<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Break {
    pub span: TokenRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Continue {
    pub span: TokenRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub span: TokenRange,
    pub value: Option<NodeId<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatementKind {
    Conditional(NodeId<Conditional>),
    While(NodeId<While>),
    Break(NodeId<Break>),
    Continue(NodeId<Continue>),
    Return(NodeId<Return>),
    Assignment(NodeId<Assignment>),
    Expr(NodeId<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub span: TokenRange,
    pub kind: StatementKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockTagKind {
    Statement(NodeId<Statement>),
    Block(NodeId<Block>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockTag {
    pub span: TokenRange,
    pub kind: BlockTagKind,
}

/// Either a lone statement or `{ (: name ;)? declaration* tag* }`.
///
/// A lone statement leaves `declarations` and `tags` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub span: TokenRange,
    pub namespace: Option<NodeId<Identifier>>,
    pub statement: Option<NodeId<Statement>>,
    pub declarations: NodeList<NodeId<Declaration>>,
    pub tags: NodeList<NodeId<BlockTag>>,
}

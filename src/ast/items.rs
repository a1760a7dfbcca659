//! Top-level items: functions, structs, enums and the program root.

use super::{
    ast::{NodeId, NodeList, TokenId, TokenRange},
    statements::{Block, Declaration},
    types::{Identifier, TypeNode},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParam {
    pub span: TokenRange,
    pub identifier: NodeId<Identifier>,
    pub param_type: NodeId<TypeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionHeader {
    pub span: TokenRange,
    pub export: bool,
    pub identifier: NodeId<Identifier>,
    pub params: NodeList<NodeId<FunctionParam>>,
    pub return_type: NodeId<TypeNode>,
}

/// A function definition, or a forward declaration when `body` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub span: TokenRange,
    pub header: NodeId<FunctionHeader>,
    pub body: Option<NodeId<Block>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    pub span: TokenRange,
    pub identifier: NodeId<Identifier>,
    pub declarations: NodeList<NodeId<Declaration>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub span: TokenRange,
    pub identifier: NodeId<Identifier>,
    pub members: NodeList<TokenId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimaryTagKind {
    Declaration(NodeId<Declaration>),
    Struct(NodeId<Struct>),
    Enum(NodeId<Enum>),
    Function(NodeId<Function>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryTag {
    pub span: TokenRange,
    pub kind: PrimaryTagKind,
}

/// Program root: every top-level tag in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Primary {
    pub span: TokenRange,
    pub tags: NodeList<NodeId<PrimaryTag>>,
}

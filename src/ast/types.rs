//! Names, type annotations and qualifiers.

use super::ast::{NodeId, TokenId, TokenRange};

/// A possibly dotted name. `a.b.c` is three linked segments, each pointing
/// at the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub span: TokenRange,
    pub name: TokenId,
    pub next: Option<NodeId<Identifier>>,
}

/// Built-in scalar types that can appear in an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleType {
    I8,
    U8,
    I32,
    U32,
    F32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeKind {
    Simple(SimpleType),
    /// A user-defined struct or enum, resolved during analysis.
    Named(NodeId<Identifier>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeNode {
    pub span: TokenRange,
    pub kind: TypeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualifierKind {
    Const,
    Mut,
    Export,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Qualifier {
    pub span: TokenRange,
    pub kind: QualifierKind,
}

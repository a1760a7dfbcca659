//! Symbols and the types expressions can have.

use std::fmt::Display;

use rustc_hash::FxHashMap;

use crate::{ast::expressions::BinaryOp, Span};

use super::scope::ScopeId;

/// Handle to a [`Symbol`] in the checker's symbol arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    I8,
    U8,
    I32,
    U32,
    F32,
    Bool,
    String,
}

impl Primitive {
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Primitive::I8 | Primitive::U8 | Primitive::I32 | Primitive::U32 | Primitive::F32
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Primitive::I8 => "i8",
            Primitive::U8 => "u8",
            Primitive::I32 => "i32",
            Primitive::U32 => "u32",
            Primitive::F32 => "f32",
            Primitive::Bool => "bool",
            Primitive::String => "string",
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Implicit conversions as `(destination, source)` pairs.
pub const WIDENINGS: [(Primitive, Primitive); 4] = [
    (Primitive::U8, Primitive::U32),
    (Primitive::I8, Primitive::U8),
    (Primitive::I8, Primitive::U32),
    (Primitive::I32, Primitive::U32),
];

/// Type of an expression or of the thing a name refers to.
///
/// Declaration variants (`EnumDecl`, `StructDecl`, `Function`) are what a
/// bare type or function name evaluates to. Instances carry the id of the
/// declaration they were made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ty {
    Primitive(Primitive),
    Pointer,
    EnumInstance(SymbolId),
    StructInstance(SymbolId),
    EnumDecl(SymbolId),
    StructDecl(SymbolId),
    Function(SymbolId),
}

impl Ty {
    pub fn primitive(self) -> Option<Primitive> {
        match self {
            Ty::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        self.primitive().is_some_and(Primitive::is_numeric)
    }

    pub fn is_bool(self) -> bool {
        self == Ty::Primitive(Primitive::Bool)
    }
}

/// Whether a value of type `source` may be stored in a `destination`.
pub fn match_assignment_types(destination: Ty, source: Ty) -> bool {
    if destination == source {
        return true;
    }

    match (destination, source) {
        (Ty::Primitive(destination), Ty::Primitive(source)) => {
            WIDENINGS.contains(&(destination, source))
        }
        _ => false,
    }
}

/// Result type of `left op right`, or `None` if the operands do not fit
/// the operator.
///
/// Both operands must carry the same type; widening only applies at
/// assignment and argument sites. Booleans order as `false < true`.
pub fn binary_result(op: BinaryOp, left: Ty, right: Ty) -> Option<Ty> {
    if left != right {
        return None;
    }

    if op.is_arithmetic() {
        left.is_numeric().then_some(left)
    } else if op.is_logical() {
        left.is_bool().then_some(Ty::Primitive(Primitive::Bool))
    } else {
        (left.is_numeric() || left.is_bool()).then_some(Ty::Primitive(Primitive::Bool))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Qualifiers {
    pub constant: bool,
    pub mutable: bool,
    pub export: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumDecl<'a> {
    pub members: FxHashMap<&'a str, u32>,
}

impl<'a> EnumDecl<'a> {
    pub fn ordinal(&self, member: &str) -> Option<u32> {
        self.members.get(member).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl<'a> {
    /// Holds the member symbols. Its parent is the scope the struct was
    /// declared in.
    pub scope: ScopeId,
    /// Members in declaration order.
    pub members: Vec<(&'a str, SymbolId)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// Holds the parameters. The body block opens a child of it.
    pub scope: ScopeId,
    pub params: Vec<SymbolId>,
    pub return_type: Ty,
    /// `false` while only a forward declaration has been seen.
    pub defined: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind<'a> {
    Primitive(Primitive),
    Pointer,
    Enum(EnumDecl<'a>),
    EnumInstance { decl: SymbolId },
    Struct(StructDecl<'a>),
    StructInstance { decl: SymbolId },
    Function(FunctionDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol<'a> {
    pub name: &'a str,
    pub span: Span,
    pub qualifiers: Qualifiers,
    pub kind: SymbolKind<'a>,
}

impl<'a> Symbol<'a> {
    /// A value symbol of type `ty`.
    pub fn instance(name: &'a str, span: Span, qualifiers: Qualifiers, ty: Ty) -> Self {
        let kind = match ty {
            Ty::Primitive(primitive) => SymbolKind::Primitive(primitive),
            Ty::StructInstance(decl) | Ty::StructDecl(decl) => SymbolKind::StructInstance { decl },
            Ty::EnumInstance(decl) | Ty::EnumDecl(decl) => SymbolKind::EnumInstance { decl },
            Ty::Pointer | Ty::Function(_) => SymbolKind::Pointer,
        };

        Symbol {
            name,
            span,
            qualifiers,
            kind,
        }
    }

    /// The type a use of this symbol evaluates to.
    pub fn ty(&self, id: SymbolId) -> Ty {
        match &self.kind {
            SymbolKind::Primitive(primitive) => Ty::Primitive(*primitive),
            SymbolKind::Pointer => Ty::Pointer,
            SymbolKind::Enum(_) => Ty::EnumDecl(id),
            SymbolKind::EnumInstance { decl } => Ty::EnumInstance(*decl),
            SymbolKind::Struct(_) => Ty::StructDecl(id),
            SymbolKind::StructInstance { decl } => Ty::StructInstance(*decl),
            SymbolKind::Function(_) => Ty::Function(id),
        }
    }
}

//! Analysis results keyed by node handle.
//!
//! The syntax tree itself is never rewritten. Types and name resolutions
//! are recorded here against the nodes they belong to.

use rustc_hash::FxHashMap;

use crate::ast::{ast::NodeId, expressions::Expr, types::Identifier};

use super::symbol::{SymbolId, Ty};

/// What an identifier segment resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Symbol(SymbolId),
    EnumMember { decl: SymbolId, ordinal: u32 },
}

#[derive(Debug, Default)]
pub struct TypedAst {
    expr_types: FxHashMap<u32, Ty>,
    resolutions: FxHashMap<u32, Resolution>,
    definitions: FxHashMap<u32, SymbolId>,
}

impl TypedAst {
    pub fn record_expr_type(&mut self, expr: NodeId<Expr>, ty: Ty) {
        self.expr_types.insert(expr.raw(), ty);
    }

    pub fn expr_type(&self, expr: NodeId<Expr>) -> Option<Ty> {
        self.expr_types.get(&expr.raw()).copied()
    }

    pub fn record_resolution(&mut self, identifier: NodeId<Identifier>, resolution: Resolution) {
        self.resolutions.insert(identifier.raw(), resolution);
    }

    /// Resolution of one identifier segment, if it was a use.
    pub fn resolution(&self, identifier: NodeId<Identifier>) -> Option<Resolution> {
        self.resolutions.get(&identifier.raw()).copied()
    }

    /// Records the symbol a declaring node introduced.
    pub fn record_definition<T>(&mut self, node: NodeId<T>, symbol: SymbolId) {
        self.definitions.insert(node.raw(), symbol);
    }

    pub fn definition<T>(&self, node: NodeId<T>) -> Option<SymbolId> {
        self.definitions.get(&node.raw()).copied()
    }

    pub fn typed_expr_count(&self) -> usize {
        self.expr_types.len()
    }
}

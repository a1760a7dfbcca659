use rustc_hash::FxHashMap;

use crate::arena::arena::{Arena, Idx};

use super::symbol::SymbolId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

/// One lexical scope: a name table plus a link to the enclosing scope.
#[derive(Debug, Default)]
pub struct Scope<'a> {
    pub parent: Option<ScopeId>,
    pub symbols: FxHashMap<&'a str, SymbolId>,
}

/// All scopes of one analysis, stored flat and linked by parent ids.
#[derive(Debug, Default)]
pub struct ScopeTree<'a> {
    scopes: Arena<Scope<'a>>,
}

impl<'a> ScopeTree<'a> {
    pub fn with_capacity(capacity: usize) -> Self {
        ScopeTree {
            scopes: Arena::with_capacity(capacity),
        }
    }

    pub fn create(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let idx = self.scopes.alloc(Scope {
            parent,
            symbols: FxHashMap::default(),
        });
        ScopeId(idx.raw())
    }

    pub fn get(&self, scope: ScopeId) -> &Scope<'a> {
        &self.scopes[Idx::from_raw(scope.0)]
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.get(scope).parent
    }

    /// Binds `name` in `scope`. On a clash the existing binding is kept and
    /// returned as the error.
    pub fn declare(&mut self, scope: ScopeId, name: &'a str, symbol: SymbolId) -> Result<(), SymbolId> {
        let symbols = &mut self.scopes[Idx::from_raw(scope.0)].symbols;
        if let Some(existing) = symbols.get(name) {
            return Err(*existing);
        }
        symbols.insert(name, symbol);
        Ok(())
    }

    /// Looks `name` up in `scope` only.
    pub fn resolve_local(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        self.get(scope).symbols.get(name).copied()
    }

    /// Looks `name` up in `scope` and then each enclosing scope.
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.get(id);
            if let Some(symbol) = scope.symbols.get(name) {
                return Some(*symbol);
            }
            current = scope.parent;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

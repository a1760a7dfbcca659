//! Semantic analysis.
//!
//! Walks the parsed program once, building a tree of scopes and a flat
//! arena of symbols, and checks:
//!
//! - that every name is declared once per scope and resolves on use
//! - that member access goes through struct instances or enum names
//! - that assignments, arguments and returns have compatible types
//! - that conditions are boolean
//!
//! Results are kept in side tables ([`typed_ast::TypedAst`]) rather than
//! on the syntax tree.

pub mod scope;
pub mod symbol;
pub mod type_checker;
pub mod typed_ast;

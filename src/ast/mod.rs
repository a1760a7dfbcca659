/// AST (Abstract Syntax Tree) module
/// Nodes live in a single arena and refer to each other by typed handles.
///
/// Submodules:
/// - ast: Arena, handles, lists and the `Node` sum type
/// - expressions: Expression nodes and operators
/// - statements: Statements, declarations and blocks
/// - items: Functions, structs, enums and the program root
/// - types: Identifiers, type annotations and qualifiers
pub mod ast;
pub mod expressions;
pub mod items;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;

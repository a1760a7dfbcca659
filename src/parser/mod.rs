//! Parser that turns a token stream into an arena-backed syntax tree.
//!
//! Productions are free functions returning `Option<NodeId<_>>`. They run
//! inside [`parser::Parser::attempt`], so a failed alternative undoes its
//! cursor movement and any nodes it allocated before the next one is tried.
//!
//! Binary expressions use precedence climbing with explicit operand and
//! operator stacks. Binding powers live in [`lookups`].

pub mod expr;
pub mod items;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

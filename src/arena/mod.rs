//! Index-based arena storage.
//!
//! Nodes, symbols and scopes all live in [`arena::Arena`]s and refer to each
//! other through 32-bit [`arena::Idx`] handles instead of pointers.

pub mod arena;

#[cfg(test)]
mod tests;

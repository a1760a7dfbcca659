//! Lexical analysis.
//!
//! Converts source text into a flat token vector using anchored regex
//! patterns. Whitespace and `//` line comments are skipped. Tokens hold byte
//! spans only, the text is read back from the source on demand.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

//! Error types shared by every stage of the front end.
//!
//! Lexing and parsing stop at their first error. Semantic analysis collects
//! errors into a list and keeps going, so one pass reports as much as it can.
//! Every error carries the byte span it refers to.

pub mod errors;

#[cfg(test)]
mod tests;

//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into the
//! token stream consumed by the parser. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of reserved words, identifiers, literals and operators
//! - Literal validation (integer/real ranges, string length)
//! - Registration of identifiers in the scope manager, so tokens carry handles
//! - Line tracking for diagnostics

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

//! Predictive parser with semantic actions.
//!
//! Each grammar alternative is picked by testing the current token against
//! its FIRST set. Picking it records the production number in the trace
//! before any token is consumed, so the trace is a pre-order derivation.
//!
//! - Statement and declaration parsing, including functions and scopes
//! - Expression parsing with type synthesis
//! - Type keywords
//! - Local error recovery: one diagnostic, skip one token, continue

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod trace;
pub mod types;

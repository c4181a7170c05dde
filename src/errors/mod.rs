//! Error types and diagnostics for the front end.
//!
//! This module defines everything that can go wrong during a run:
//!
//! - `ErrorImpl`, the message catalogue for lexical, syntactic and semantic
//!   diagnostics, with names and optional hints
//! - `Error`, the fatal I/O faults that abort a run
//! - `Diagnostic` and `DiagnosticCollector`, which record recovered problems
//!   with per-line cascade suppression

pub mod diagnostics;
pub mod errors;

#[cfg(test)]
mod tests;

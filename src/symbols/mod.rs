//! Scoped symbol table.
//!
//! A stack of scopes shared by the scanner (which registers names) and the
//! parser (which types them). Each scope is serialized to the report when it
//! closes.

pub mod manager;
pub mod scope;
pub mod symbol;

#[cfg(test)]
mod tests;

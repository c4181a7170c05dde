#![allow(clippy::module_inception)]

pub mod config;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;

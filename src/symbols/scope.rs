use std::{collections::HashMap, fmt::Display};

use super::symbol::{Handle, Symbol};

pub type ScopeId = u32;

/// One lexical block: the global program or a single function body.
#[derive(Debug)]
pub struct Scope {
    pub id: ScopeId,
    pub title: String,
    symbols: Vec<Symbol>,
    lexeme_lookup: HashMap<String, usize>,
}

impl Scope {
    pub fn new(id: ScopeId, title: &str) -> Self {
        Scope {
            id,
            title: title.to_string(),
            symbols: vec![],
            lexeme_lookup: HashMap::new(),
        }
    }

    /// Appends a symbol and returns its index. The lexeme must not be present yet.
    pub fn insert(&mut self, symbol: Symbol) -> usize {
        let index = self.symbols.len();
        self.lexeme_lookup.insert(symbol.lexeme.clone(), index);
        self.symbols.push(symbol);
        index
    }

    pub fn position(&self, lexeme: &str) -> Option<usize> {
        self.lexeme_lookup.get(lexeme).copied()
    }

    pub fn get(&self, lexeme: &str) -> Option<&Symbol> {
        self.position(lexeme).map(|index| &self.symbols[index])
    }

    pub fn symbol(&self, index: usize) -> &Symbol {
        &self.symbols[index]
    }

    pub fn symbol_mut(&mut self, index: usize) -> &mut Symbol {
        &mut self.symbols[index]
    }

    /// Symbols in insertion order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.symbols.iter().map(|symbol| symbol.handle)
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} # {} :", self.title, self.id)?;
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        writeln!(f)
    }
}

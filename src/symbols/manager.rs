use std::{collections::HashMap, io, io::Write};

use super::{
    scope::{Scope, ScopeId},
    symbol::{DataType, Handle, Symbol},
};

pub const GLOBAL_SCOPE_TITLE: &str = "TABLA PRINCIPAL";

/// Lexemes that exist as boolean constants in the global scope.
const BOOLEAN_CONSTANTS: [&str; 2] = ["true", "false"];

/// Stack of open scopes plus the report of every scope closed so far.
///
/// The scanner registers identifier names through [`ScopeManager::ensure`];
/// the parser then types them, opens and closes function scopes, and resolves
/// names lexically while it is still deriving the program.
pub struct ScopeManager {
    scopes: Vec<Scope>,
    /// Handle -> (scope index, symbol index) for every open scope.
    handle_lookup: HashMap<Handle, (usize, usize)>,
    next_handle: u32,
    next_scope_id: ScopeId,
    report: String,
    writer: Option<Box<dyn Write>>,
    write_error: Option<io::Error>,
}

impl ScopeManager {
    /// Creates a manager with the global scope already open.
    pub fn new() -> Self {
        let mut manager = ScopeManager {
            scopes: vec![],
            handle_lookup: HashMap::new(),
            next_handle: 1,
            next_scope_id: 1,
            report: String::new(),
            writer: None,
            write_error: None,
        };
        manager.open_scope(GLOBAL_SCOPE_TITLE);
        manager
    }

    /// Like [`ScopeManager::new`], also streaming every closed scope to `writer`.
    pub fn with_writer(writer: impl Write + 'static) -> Self {
        let mut manager = ScopeManager::new();
        manager.writer = Some(Box::new(writer));
        manager
    }

    pub fn open_scope(&mut self, title: &str) -> ScopeId {
        let id = self.next_scope_id;
        self.next_scope_id += 1;
        self.scopes.push(Scope::new(id, title));

        tracing::debug!(id, title, depth = self.scopes.len(), "scope opened");
        id
    }

    /// Serializes the current scope to the report and discards it.
    pub fn close_scope(&mut self) {
        let Some(scope) = self.scopes.pop() else {
            return;
        };

        for handle in scope.handles() {
            self.handle_lookup.remove(&handle);
        }

        let rendered = scope.to_string();
        if let Some(writer) = self.writer.as_mut() {
            if let Err(error) = writer.write_all(rendered.as_bytes()) {
                self.write_error.get_or_insert(error);
            }
        }
        self.report.push_str(&rendered);

        tracing::debug!(
            id = scope.id,
            title = scope.title.as_str(),
            symbols = scope.symbols().len(),
            "scope closed"
        );
    }

    pub fn close_all(&mut self) {
        while !self.scopes.is_empty() {
            self.close_scope();
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn current_scope(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    /// Creates a symbol with a fresh handle in the current scope.
    ///
    /// Callers check for an existing lexeme first when a redeclaration must be reported.
    pub fn declare_local(&mut self, lexeme: &str) -> &mut Symbol {
        let scope_index = self.current_index();

        let handle = Handle(self.next_handle);
        self.next_handle += 1;

        let mut symbol = Symbol::new(lexeme, handle);
        if scope_index == 0 && BOOLEAN_CONSTANTS.contains(&lexeme) {
            symbol.data_type = DataType::Boolean;
        }

        let symbol_index = self.scopes[scope_index].insert(symbol);
        self.handle_lookup.insert(handle, (scope_index, symbol_index));
        self.scopes[scope_index].symbol_mut(symbol_index)
    }

    pub fn lookup_local(&self, lexeme: &str) -> Option<&Symbol> {
        self.scopes.last().and_then(|scope| scope.get(lexeme))
    }

    /// Searches the current scope, then every enclosing one out to global.
    pub fn lookup_lexical(&self, lexeme: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(lexeme))
    }

    /// Returns the local symbol for `lexeme`, declaring it unresolved if missing.
    pub fn ensure(&mut self, lexeme: &str) -> &mut Symbol {
        let scope_index = self.current_index();
        match self.scopes[scope_index].position(lexeme) {
            Some(symbol_index) => self.scopes[scope_index].symbol_mut(symbol_index),
            None => self.declare_local(lexeme),
        }
    }

    pub fn symbol_by_handle(&self, handle: Handle) -> Option<&Symbol> {
        self.handle_lookup
            .get(&handle)
            .map(|&(scope_index, symbol_index)| self.scopes[scope_index].symbol(symbol_index))
    }

    pub fn symbol_by_handle_mut(&mut self, handle: Handle) -> Option<&mut Symbol> {
        let &(scope_index, symbol_index) = self.handle_lookup.get(&handle)?;
        Some(self.scopes[scope_index].symbol_mut(symbol_index))
    }

    /// Everything serialized so far, in closing order.
    pub fn report(&self) -> &str {
        &self.report
    }

    /// Closes every scope, flushes the writer and returns the full report.
    pub fn finish(mut self) -> io::Result<String> {
        self.close_all();

        if let Some(writer) = self.writer.as_mut() {
            if let Err(error) = writer.flush() {
                self.write_error.get_or_insert(error);
            }
        }

        match self.write_error.take() {
            Some(error) => Err(error),
            None => Ok(self.report),
        }
    }

    // Declaring after close_all starts a new global scope.
    fn current_index(&mut self) -> usize {
        if self.scopes.is_empty() {
            self.open_scope(GLOBAL_SCOPE_TITLE);
        }
        self.scopes.len() - 1
    }
}

impl Default for ScopeManager {
    fn default() -> Self {
        ScopeManager::new()
    }
}

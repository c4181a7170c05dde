use std::fmt::Display;

use super::lookups::Production;

/// Marker written on the first line of a top-down trace.
pub const TOP_DOWN_MARKER: &str = "D";

/// Production numbers in the order they were applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trace {
    productions: Vec<u16>,
}

impl Trace {
    pub fn new() -> Self {
        Trace::default()
    }

    pub fn push(&mut self, production: Production) {
        self.productions.push(production.number());
    }

    pub fn productions(&self) -> &[u16] {
        &self.productions
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", TOP_DOWN_MARKER)?;
        for production in &self.productions {
            writeln!(f, "{}", production)?;
        }
        Ok(())
    }
}

use std::path::{Path, PathBuf};

/// Derivation trace, written to the working directory.
pub const TRACE_FILE: &str = "parse.txt";
/// Diagnostics of every phase, written to the working directory.
pub const DIAGNOSTICS_FILE: &str = "errores.txt";

pub const USAGE: &str = "usage: jspdl <source-file> <tokens-file> <symbol-table-file>";

/// Where a run reads its source and writes its four outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub tokens: PathBuf,
    pub symbols: PathBuf,
    pub trace: PathBuf,
    pub diagnostics: PathBuf,
}

impl Config {
    pub fn new(source: impl Into<PathBuf>, tokens: impl Into<PathBuf>, symbols: impl Into<PathBuf>) -> Self {
        Config {
            source: source.into(),
            tokens: tokens.into(),
            symbols: symbols.into(),
            trace: PathBuf::from(TRACE_FILE),
            diagnostics: PathBuf::from(DIAGNOSTICS_FILE),
        }
    }

    /// Builds a config from the positional arguments, program name excluded.
    ///
    /// Returns `None` unless exactly three arguments are given.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        match args.as_slice() {
            [source, tokens, symbols] => Some(Config::new(source, tokens, symbols)),
            _ => None,
        }
    }

    /// Moves the trace and diagnostics files into `dir`.
    pub fn with_report_dir(mut self, dir: &Path) -> Self {
        self.trace = dir.join(TRACE_FILE);
        self.diagnostics = dir.join(DIAGNOSTICS_FILE);
        self
    }
}

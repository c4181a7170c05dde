//! Runs the two phases and writes their outputs.

use std::{
    fmt::Display,
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
    time::{Duration, Instant},
};

use crate::{
    config::Config,
    errors::{diagnostics::Diagnostic, errors::Error},
    lexer::{lexer::tokenize, tokens::Token},
    parser::{parser::parse, trace::Trace},
    symbols::manager::ScopeManager,
};

/// Everything one run produced.
#[derive(Debug)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub trace: Trace,
    pub lexical_diagnostics: Vec<Diagnostic>,
    /// Syntactic and semantic diagnostics, in the order they were found.
    pub parser_diagnostics: Vec<Diagnostic>,
    pub symbol_report: String,
    pub lex_time: Duration,
    pub parse_time: Duration,
}

impl Analysis {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.lexical_diagnostics.iter().chain(self.parser_diagnostics.iter())
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.lexical_diagnostics.is_empty() || !self.parser_diagnostics.is_empty()
    }
}

/// Analyzes `source` in memory, without touching the filesystem.
pub fn analyze(source: &str) -> Analysis {
    let mut scopes = ScopeManager::new();

    let lex_start = Instant::now();
    let (tokens, lexical_diagnostics) = tokenize(source, &mut scopes);
    let lex_time = lex_start.elapsed();

    let parse_start = Instant::now();
    let parsed = parse(tokens.clone(), &mut scopes);
    let parse_time = parse_start.elapsed();

    scopes.close_all();

    Analysis {
        tokens,
        trace: parsed.trace,
        lexical_diagnostics,
        parser_diagnostics: parsed.diagnostics,
        symbol_report: scopes.report().to_string(),
        lex_time,
        parse_time,
    }
}

/// Reads the source named by `config` and writes the token, trace,
/// symbol-table and diagnostics files.
///
/// Only I/O faults are errors; problems in the program are diagnostics.
pub fn run(config: &Config) -> Result<Analysis, Error> {
    tracing::info!(source = %config.source.display(), "analysis started");

    let source = fs::read_to_string(&config.source).map_err(|source| Error::ReadSource {
        path: config.source.clone(),
        source,
    })?;

    let symbols_file = File::create(&config.symbols).map_err(|source| Error::WriteOutput {
        path: config.symbols.clone(),
        source,
    })?;
    let mut scopes = ScopeManager::with_writer(BufWriter::new(symbols_file));

    let lex_start = Instant::now();
    let (tokens, lexical_diagnostics) = tokenize(&source, &mut scopes);
    let lex_time = lex_start.elapsed();

    write_lines(&config.tokens, &tokens, false)?;
    write_lines(&config.diagnostics, &lexical_diagnostics, false)?;

    let parse_start = Instant::now();
    let parsed = parse(tokens.clone(), &mut scopes);
    let parse_time = parse_start.elapsed();

    fs::write(&config.trace, parsed.trace.to_string()).map_err(|source| Error::WriteOutput {
        path: config.trace.clone(),
        source,
    })?;
    write_lines(&config.diagnostics, &parsed.diagnostics, true)?;

    let symbol_report = scopes.finish().map_err(|source| Error::WriteOutput {
        path: config.symbols.clone(),
        source,
    })?;

    tracing::info!(
        tokens = tokens.len(),
        lexical = lexical_diagnostics.len(),
        parser = parsed.diagnostics.len(),
        "analysis finished"
    );

    Ok(Analysis {
        tokens,
        trace: parsed.trace,
        lexical_diagnostics,
        parser_diagnostics: parsed.diagnostics,
        symbol_report,
        lex_time,
        parse_time,
    })
}

// One line per item. `append` keeps what an earlier phase wrote.
fn write_lines<T: Display>(path: &Path, items: &[T], append: bool) -> Result<(), Error> {
    let to_error = |source: io::Error| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(to_error)?;

    let mut writer = BufWriter::new(file);
    for item in items {
        writeln!(writer, "{}", item).map_err(to_error)?;
    }
    writer.flush().map_err(to_error)
}

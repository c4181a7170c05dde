//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a scanner handler for fixed punctuation
//!
//! These macros reduce boilerplate in the scanner's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$attribute` - The optional TokenAttribute
/// * `$line` - The source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, None, 3);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $attribute:expr, $line:expr) => {
        Token {
            kind: $kind,
            attribute: $attribute,
            line: $line,
        }
    };
}

/// Creates a scanner handler that emits one attribute-less token.
///
/// The handler ignores the matched text; the scanner loop advances past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {{
        fn handler(lexer: &mut Lexer, _matched: &str) {
            let line = lexer.line;
            lexer.push(MK_TOKEN!($kind, None, line));
        }
        handler
    }};
}

//! Trek lexer: converts path text into movement tokens.
//!
//! Also hosts the path validator, which accepts a string only if the strict
//! lexer reads it as one or more tokens without a single error.

pub mod lexer;
pub mod token;

pub use lexer::{LexResult, Lexer};
pub use token::{Direction, Token};

use trek_types::{PathErrors, PathSource};

/// Returns `true` iff `path`, once trimmed, is a non-empty run of
/// `<digits><F|B|R|L>` tokens (letters in any case) and nothing else.
pub fn validate(path: &str) -> bool {
    let source = PathSource::new(path);
    Lexer::new(&source).lex().is_valid()
}

/// [`validate`] for an input that may be absent. Absent input is invalid.
pub fn validate_optional(path: Option<&str>) -> bool {
    path.is_some_and(validate)
}

/// Explain why `path` is invalid. Empty when [`validate`] would accept it.
pub fn diagnose(path: &str) -> PathErrors {
    let source = PathSource::new(path);
    Lexer::new(&source).lex().errors
}

/// Extract every well-formed token from `path`, skipping anything else.
pub fn tokenize(path: &str) -> Vec<Token> {
    let source = PathSource::new(path);
    Lexer::lenient(&source).lex().tokens
}

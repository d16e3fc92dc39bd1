//! Core trek lexer — converts path text to a token stream.
//!
//! The grammar is one or more `<digits><F|B|R|L>` tokens with nothing in
//! between. The lexer runs in one of two modes over the same scanner:
//!
//! - **Strict**: every byte outside the grammar is reported as a
//!   [`PathError`], collecting up to [`trek_types::MAX_ERRORS`] of them.
//! - **Lenient**: text outside the grammar is skipped without error, so any
//!   string yields the tokens it contains.

use trek_types::{ErrorCode, PathError, PathErrors, PathSource, Span};

use crate::token::{Direction, Token};

/// How text outside the grammar is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Report it as an error.
    Strict,
    /// Skip it.
    Lenient,
}

/// The trek lexer.
pub struct Lexer<'src> {
    path: &'src PathSource,
    /// The trimmed path text as bytes.
    source: &'src [u8],
    /// Current byte offset into `source`.
    pos: usize,
    mode: Mode,
    /// Collected errors (always empty in lenient mode).
    errors: PathErrors,
}

/// Result of lexing: tokens + any errors collected.
#[derive(Debug, Clone)]
pub struct LexResult {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Errors encountered during lexing.
    pub errors: PathErrors,
}

impl LexResult {
    /// Returns `true` when the text was a well-formed, non-empty path.
    pub fn is_valid(&self) -> bool {
        !self.errors.has_errors() && !self.tokens.is_empty()
    }
}

impl<'src> Lexer<'src> {
    /// Create a strict lexer for the given source.
    pub fn new(source: &'src PathSource) -> Self {
        Self::with_mode(source, Mode::Strict)
    }

    /// Create a lexer that silently skips anything outside the grammar.
    pub fn lenient(source: &'src PathSource) -> Self {
        Self::with_mode(source, Mode::Lenient)
    }

    fn with_mode(source: &'src PathSource, mode: Mode) -> Self {
        Self {
            path: source,
            source: source.text.as_bytes(),
            pos: 0,
            mode,
            errors: PathErrors::empty(),
        }
    }

    /// Lex the entire path into a token stream.
    pub fn lex(mut self) -> LexResult {
        let mut tokens = Vec::new();

        if self.path.is_blank() && self.mode == Mode::Strict {
            self.errors.push_error(
                PathError::new(ErrorCode::EMPTY_PATH, "Path is empty", Span::point(1))
                    .with_suggestion("Provide at least one step, e.g. 10F"),
            );
        }

        while !self.at_end() {
            if self.errors.total_errors >= trek_types::MAX_ERRORS {
                break;
            }
            if let Some(token) = self.scan_token() {
                tokens.push(token);
            }
        }

        LexResult {
            tokens,
            errors: self.errors,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Column of the current byte (1-based).
    fn col(&self) -> u32 {
        self.pos as u32 + 1
    }

    /// Span from `start_col` up to the last consumed byte.
    fn span_from(&self, start_col: u32) -> Span {
        Span::new(start_col, (self.pos as u32).max(start_col))
    }

    /// Consume one full character (UTF-8 aware) and return it.
    fn advance_char(&mut self) -> Option<char> {
        let ch = self.path.text.get(self.pos..)?.chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn emit_error_with_suggestion(
        &mut self,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        suggestion: impl Into<String>,
    ) {
        self.emit(PathError::new(code, message, span).with_suggestion(suggestion));
    }

    fn emit(&mut self, error: PathError) {
        match self.mode {
            Mode::Strict => self.errors.push_error(error),
            Mode::Lenient => log::debug!(
                "skipping {:?} at {} ({})",
                self.path.slice(error.span).unwrap_or(""),
                error.span,
                error.code
            ),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan from the current position. Returns a token, or `None` after
    /// consuming text that is not part of one.
    fn scan_token(&mut self) -> Option<Token> {
        let start_col = self.col();
        let byte = self.peek()?;

        if byte.is_ascii_digit() {
            return self.scan_step(start_col);
        }

        if let Some(direction) = Direction::from_byte(byte) {
            self.pos += 1;
            let span = self.span_from(start_col);
            self.emit_error_with_suggestion(
                ErrorCode::MISSING_MAGNITUDE,
                format!("Direction '{}' has no step count", direction.letter()),
                span,
                format!("Write a step count before the direction, e.g. 1{}", direction.letter()),
            );
            return None;
        }

        let ch = self.advance_char()?;
        let span = self.span_from(start_col);
        self.emit_error_with_suggestion(
            ErrorCode::UNEXPECTED_CHARACTER,
            format!("Unexpected character {ch:?}"),
            span,
            "Paths contain only step counts and the letters F, B, R, L, with no separators",
        );
        None
    }

    /// Scan a digit run and the direction letter that must follow it.
    fn scan_step(&mut self, start_col: u32) -> Option<Token> {
        let mut magnitude: u64 = 0;
        while let Some(digit @ b'0'..=b'9') = self.peek() {
            magnitude = magnitude
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'));
            self.pos += 1;
        }
        let digits = self.span_from(start_col);

        match self.peek().and_then(Direction::from_byte) {
            Some(direction) => {
                self.pos += 1;
                Some(Token::new(magnitude, direction, self.span_from(start_col)))
            }
            None => {
                let count = self.path.slice(digits).unwrap_or("");
                let next = self.path.text.get(self.pos..).and_then(|s| s.chars().next());
                let message = match next {
                    Some(next) => format!(
                        "Step count '{count}' is followed by {next:?} instead of a direction"
                    ),
                    None => format!("Step count '{count}' at the end of the path has no direction"),
                };
                self.emit_error_with_suggestion(
                    ErrorCode::MISSING_DIRECTION,
                    message,
                    digits,
                    "Follow every step count with one of F, B, R, L",
                );
                None
            }
        }
    }
}

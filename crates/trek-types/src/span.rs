use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location span within a single-line path string.
///
/// Columns are 1-based, inclusive byte positions, for human-readable
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_col: u32,
    pub end_col: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start_col: u32, end_col: u32) -> Self {
        Self { start_col, end_col }
    }

    /// Create a span covering exactly one column.
    pub fn point(col: u32) -> Self {
        Self::new(col, col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col {}", self.start_col)
    }
}

/// Holds a path string prepared for scanning.
///
/// Surrounding whitespace is trimmed once here so every span the lexer
/// produces refers to the trimmed text.
#[derive(Debug, Clone)]
pub struct PathSource {
    /// The caller's text with surrounding whitespace removed.
    pub text: String,
}

impl PathSource {
    /// Create a new path source.
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_string(),
        }
    }

    /// Returns `true` if nothing remains after trimming.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Extract the text covered by `span`.
    ///
    /// Returns `None` if the span is out of range.
    pub fn slice(&self, span: Span) -> Option<&str> {
        let start = (span.start_col as usize).checked_sub(1)?;
        let end = span.end_col as usize;
        if start > end {
            return None;
        }
        self.text.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_point() {
        let s = Span::point(5);
        assert_eq!(s.start_col, 5);
        assert_eq!(s.end_col, 5);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(format!("{}", Span::new(7, 15)), "col 7");
    }

    #[test]
    fn test_path_source_trims() {
        let src = PathSource::new("  15F6B \n");
        assert_eq!(src.text, "15F6B");
        assert!(!src.is_blank());
    }

    #[test]
    fn test_path_source_blank() {
        assert!(PathSource::new("").is_blank());
        assert!(PathSource::new(" \t\n").is_blank());
    }

    #[test]
    fn test_path_source_slice() {
        let src = PathSource::new("15F6B");
        assert_eq!(src.slice(Span::new(1, 3)), Some("15F"));
        assert_eq!(src.slice(Span::point(5)), Some("B"));
        assert_eq!(src.slice(Span::new(0, 2)), None);
        assert_eq!(src.slice(Span::new(4, 9)), None);
    }

    #[test]
    fn test_slice_determinism_100_iterations() {
        let src = PathSource::new(" 15F6B6B ");
        let span = Span::new(4, 7);
        let first = src.slice(span);
        for i in 0..100 {
            let result = src.slice(span);
            assert_eq!(first, result, "Determinism failure at iteration {i}");
        }
    }
}

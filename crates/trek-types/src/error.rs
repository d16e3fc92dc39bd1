use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of errors stored before further ones are only counted.
pub const MAX_ERRORS: usize = 20;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Syntax,
    Input,
}

/// Numeric error code (E100–E299).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Syntax errors (E100–E199) ──
    pub const UNEXPECTED_CHARACTER: Self = Self(100);
    pub const MISSING_DIRECTION: Self = Self(101);
    pub const MISSING_MAGNITUDE: Self = Self(102);

    // ── Input errors (E200–E299) ──
    pub const EMPTY_PATH: Self = Self(200);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            200..=299 => ErrorCategory::Input,
            _ => ErrorCategory::Syntax,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Input => write!(f, "input"),
        }
    }
}

/// A structured diagnostic for a malformed path string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathError {
    /// Error code (e.g., E101).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Location in the trimmed path text.
    #[serde(flatten)]
    pub span: Span,
    /// Optional fix suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl PathError {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
            span,
            suggestion: None,
        }
    }

    /// Attach a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.span, self.code, self.category, self.message
        )
    }
}

impl std::error::Error for PathError {}

/// Errors collected while lexing one path string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathErrors {
    pub errors: Vec<PathError>,
    pub total_errors: usize,
}

impl PathErrors {
    /// Create an empty collection.
    pub fn empty() -> Self {
        Self {
            errors: Vec::new(),
            total_errors: 0,
        }
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Add an error, respecting the MAX_ERRORS limit.
    pub fn push_error(&mut self, error: PathError) {
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(error);
        }
        self.total_errors += 1;
    }
}

impl Default for PathErrors {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for PathErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            None => f.write_str("no errors"),
            Some(first) if self.total_errors == 1 => write!(f, "{first}"),
            Some(first) => write!(f, "{first} (and {} more)", self.total_errors - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_category() {
        assert_eq!(
            ErrorCode::UNEXPECTED_CHARACTER.category(),
            ErrorCategory::Syntax
        );
        assert_eq!(
            ErrorCode::MISSING_DIRECTION.category(),
            ErrorCategory::Syntax
        );
        assert_eq!(
            ErrorCode::MISSING_MAGNITUDE.category(),
            ErrorCategory::Syntax
        );
        assert_eq!(ErrorCode::EMPTY_PATH.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::MISSING_DIRECTION), "E101");
        assert_eq!(format!("{}", ErrorCode::EMPTY_PATH), "E200");
    }

    #[test]
    fn test_path_error_display() {
        let err = PathError::new(
            ErrorCode::UNEXPECTED_CHARACTER,
            "Unexpected character 'X'",
            Span::point(3),
        );
        assert_eq!(
            err.to_string(),
            "col 3: E100 [syntax] Unexpected character 'X'"
        );
        assert_eq!(err.suggestion, None);
    }

    #[test]
    fn test_path_error_with_suggestion() {
        let err = PathError::new(ErrorCode::MISSING_MAGNITUDE, "no steps", Span::point(1))
            .with_suggestion("Write a step count before the direction, e.g. 10F");
        assert_eq!(
            err.suggestion.as_deref(),
            Some("Write a step count before the direction, e.g. 10F")
        );
    }

    #[test]
    fn test_path_error_json_serialization() {
        let err = PathError::new(
            ErrorCode::MISSING_DIRECTION,
            "Step count '12' is not followed by a direction",
            Span::new(1, 2),
        )
        .with_suggestion("Follow the number with one of F, B, R, L");

        let json = serde_json::to_string_pretty(&err).unwrap();
        assert!(json.contains("\"code\": 101"));
        assert!(json.contains("\"category\": \"syntax\""));
        assert!(json.contains("\"start_col\": 1"));
        assert!(json.contains("\"end_col\": 2"));
        assert!(json.contains("\"suggestion\""));

        let deserialized: PathError = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, err);
    }

    #[test]
    fn test_path_error_json_omits_missing_suggestion() {
        let err = PathError::new(ErrorCode::EMPTY_PATH, "Path is empty", Span::point(1));
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("suggestion"));
    }

    #[test]
    fn test_path_errors_max_limit() {
        let mut errs = PathErrors::empty();
        for i in 0..25 {
            errs.push_error(PathError::new(
                ErrorCode::UNEXPECTED_CHARACTER,
                format!("Error {i}"),
                Span::point(i as u32 + 1),
            ));
        }
        assert_eq!(errs.errors.len(), 20);
        assert_eq!(errs.total_errors, 25);
        assert!(errs.has_errors());
        assert!(errs.to_string().ends_with("(and 24 more)"));
    }

    #[test]
    fn test_path_errors_empty() {
        let errs = PathErrors::default();
        assert!(!errs.has_errors());
        assert_eq!(errs.total_errors, 0);
        assert!(errs.errors.is_empty());
        assert_eq!(errs.to_string(), "no errors");
    }
}

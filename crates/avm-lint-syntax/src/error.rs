//! Lexing and parsing errors.
//!
//! Each error kind carries a stable code so downstream reporting can
//! distinguish syntax findings from rule findings.

use crate::span::Span;
use thiserror::Error;

/// An error found while lexing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Where it appears.
        span: Span,
    },

    /// A string literal with no closing quote before the end of the line.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// Start of the literal.
        span: Span,
    },

    /// A block comment with no closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment {
        /// Start of the comment.
        span: Span,
    },

    /// An escape sequence the language does not define.
    #[error("invalid escape sequence '\\{ch}'")]
    InvalidEscape {
        /// The character following the backslash.
        ch: char,
        /// Where the escape appears.
        span: Span,
    },
}

impl LexError {
    /// Stable diagnostic code for this error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter { .. } => "LEX001",
            Self::UnterminatedString { .. } => "LEX002",
            Self::UnterminatedComment { .. } => "LEX003",
            Self::InvalidEscape { .. } => "LEX004",
        }
    }

    /// Location of the offending text.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedCharacter { span, .. }
            | Self::UnterminatedString { span }
            | Self::UnterminatedComment { span }
            | Self::InvalidEscape { span, .. } => *span,
        }
    }
}

/// An error found while parsing top-level declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token was required but something else was found.
    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        /// What the parser was looking for.
        expected: &'static str,
        /// Description of what was found instead.
        found: String,
        /// Where the mismatch occurred.
        span: Span,
    },

    /// A token that cannot start a top-level statement.
    #[error("unexpected '{found}' at start of statement")]
    UnexpectedToken {
        /// Description of the offending token.
        found: String,
        /// Where it appears.
        span: Span,
    },

    /// One or more decorators with no declaration following them.
    #[error("decorator is not attached to any declaration")]
    DanglingDecorator {
        /// Position where a declaration was expected.
        span: Span,
    },
}

impl ParseError {
    /// Stable diagnostic code for this error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExpectedToken { .. } => "PRS001",
            Self::UnexpectedToken { .. } => "PRS002",
            Self::DanglingDecorator { .. } => "PRS003",
        }
    }

    /// Location of the offending text.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::ExpectedToken { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::DanglingDecorator { span } => *span,
        }
    }
}

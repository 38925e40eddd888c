use std::fmt;

use symdiff_ast::ArithmeticError;
use thiserror::Error;

/// Source location span for error reporting
/// Represents a range of bytes in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single position
    pub fn at(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }
}

/// Formats as a suffix for messages, 1-indexed for users.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            Ok(())
        } else if self.end - self.start == 1 {
            write!(f, " at position {}", self.start + 1)
        } else {
            write!(f, " at positions {}-{}", self.start + 1, self.end)
        }
    }
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Zero-denominator fraction literal
    Arithmetic,
    /// Scanning failed
    Lex,
    /// The token stream does not match the grammar
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Arithmetic => write!(f, "arithmetic error"),
            ErrorKind::Lex => write!(f, "lex error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Errors that can occur while turning formula text into an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    // Lexical errors
    #[error("unrecognized character '{ch}'{span}")]
    UnrecognizedCharacter { ch: char, span: Span },

    #[error("malformed number '{text}'{span}")]
    MalformedNumber { text: String, span: Span },

    #[error("malformed identifier '{text}'{span}")]
    MalformedIdentifier { text: String, span: Span },

    #[error("unknown command '\\{name}'{span}")]
    UnknownCommand { name: String, span: Span },

    // Syntax errors
    #[error("formula is empty")]
    EmptyFormula,

    #[error("expected {expected}, found {found}{span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("unmatched '('{span}")]
    UnmatchedParen { span: Span },

    #[error("expression nested deeper than {limit} levels{span}")]
    TooDeep { limit: usize, span: Span },

    #[error("invalid differentiation variable '{0}'")]
    InvalidVariable(String),

    // Literal with a zero denominator
    #[error("{source}{span}")]
    Arithmetic {
        #[source]
        source: ArithmeticError,
        span: Span,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnrecognizedCharacter { .. }
            | ParseError::MalformedNumber { .. }
            | ParseError::MalformedIdentifier { .. }
            | ParseError::UnknownCommand { .. } => ErrorKind::Lex,
            ParseError::EmptyFormula
            | ParseError::UnexpectedToken { .. }
            | ParseError::UnmatchedParen { .. }
            | ParseError::TooDeep { .. }
            | ParseError::InvalidVariable(_) => ErrorKind::Syntax,
            ParseError::Arithmetic { .. } => ErrorKind::Arithmetic,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnrecognizedCharacter { span, .. }
            | ParseError::MalformedNumber { span, .. }
            | ParseError::MalformedIdentifier { span, .. }
            | ParseError::UnknownCommand { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnmatchedParen { span }
            | ParseError::TooDeep { span, .. }
            | ParseError::Arithmetic { span, .. } => Some(*span),
            ParseError::EmptyFormula | ParseError::InvalidVariable(_) => None,
        }
    }
}

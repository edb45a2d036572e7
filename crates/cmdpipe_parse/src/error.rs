use std::fmt::Display;

use crate::Span;

/// Parse errors are returned when a command cannot be split into runnable stages.
///
/// Every error carries the span, relative to the full command text, in which it resides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Error indicating that a pipe is not surrounded by two commands, as in `a || b` or `a |`.
    ///
    /// The span points at the offending pipe.
    EmptySegment(Span),

    /// Error indicating that a quote is never closed.
    ///
    /// The span points at the opening quote.
    UnterminatedQuote(Span),
}

impl ParseError {
    /// Returns a help text associated with the error.
    pub fn help(&self) -> &str {
        match self {
            ParseError::EmptySegment(_) => "this pipe is missing a command on one side",
            ParseError::UnterminatedQuote(_) => "this quote is never closed",
        }
    }

    /// Returns the positional span in which the error resides.
    pub fn span(&self) -> Span {
        match self {
            ParseError::EmptySegment(span) | ParseError::UnterminatedQuote(span) => *span,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptySegment(span) => {
                write!(f, "empty pipeline segment at position {}", span.start)
            }
            ParseError::UnterminatedQuote(span) => {
                write!(f, "unterminated quote at position {}", span.start)
            }
        }
    }
}

impl std::error::Error for ParseError {}

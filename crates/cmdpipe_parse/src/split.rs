use crate::{lex::input::is_whitespace, Lexer, ParseError, Span};

/// A single stage of a pipeline: the trimmed command text and its location in the full input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Segment<'a> {
    /// Splits the segment into shell words. Error spans are relative to the full input.
    ///
    /// The segment is never blank, so the first word is always present.
    pub fn words(&self) -> Result<Vec<String>, ParseError> {
        Lexer::with_offset(self.text, self.span.start).collect_words()
    }
}

/// Splits a command into pipeline segments on every `|` character.
///
/// The split is purely textual: a `|` inside quotes still separates two segments. Blank input
/// yields no segments at all.
///
/// # Errors
///
/// Returns [`ParseError::EmptySegment`] if a pipe lacks a command on either side.
pub fn split_pipeline(src: &str) -> Result<Vec<Segment<'_>>, ParseError> {
    if src.chars().all(is_whitespace) {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    let mut start = 0;
    for piece in src.split('|') {
        let end = start + piece.len();
        let text = piece.trim_matches(is_whitespace);

        if text.is_empty() {
            // Point at the pipe following the piece, or the one before the final piece.
            let pipe = if end < src.len() { end } else { start - 1 };
            return Err(ParseError::EmptySegment(Span::new(pipe, pipe + 1)));
        }

        let text_start = start + (piece.len() - piece.trim_start_matches(is_whitespace).len());
        segments.push(Segment {
            text,
            span: Span::new(text_start, text_start + text.len()),
        });

        start = end + 1; // Skip the pipe itself.
    }

    Ok(segments)
}

use std::iter::Peekable;
use std::str::CharIndices;

use crate::lex::input::{is_quote, is_whitespace};
use crate::{ParseError, Span};

type Input<'a> = Peekable<CharIndices<'a>>;
type LexResult<T> = Result<T, ParseError>;

/// Splits some input `str` into shell words.
///
/// Words are separated by unquoted whitespace. Single quotes preserve everything up to the
/// closing quote. Double quotes preserve everything except `\"` and `\\`, which yield `"` and
/// `\`. Outside of quotes a backslash is an ordinary character, so `C:\dir` and `a\.b` are kept
/// as written. Quoted and unquoted parts that touch are joined into one word.
///
/// # Errors
///
/// Returns an error if a quote is left open.
pub fn split_words(src: &str) -> LexResult<Vec<String>> {
    Lexer::new(src).collect_words()
}

/// A mode of operation for a [`Lexer`].
#[derive(Debug, PartialEq)]
enum LexerMode {
    Unquoted,
    Quoted(char),
}

/// A lexer takes some `str` input and returns the shell words within it.
///
/// Supports multiple modes through [`LexerMode`].
pub struct Lexer<'a> {
    input: Input<'a>,
    mode: LexerMode,

    /// Position of the quote that opened the current quoted mode.
    quote_start: usize,

    /// Position of `src` within some larger input. Added to the spans of all errors.
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self::with_offset(src, 0)
    }

    /// Constructs a lexer for `src` located `offset` bytes into a larger input.
    pub fn with_offset(src: &'a str, offset: usize) -> Self {
        Self {
            input: src.char_indices().peekable(),
            mode: LexerMode::Unquoted,
            quote_start: 0,
            offset,
        }
    }

    /// Consumes the lexer and returns all remaining words.
    pub fn collect_words(mut self) -> LexResult<Vec<String>> {
        let mut words = Vec::new();
        while let Some(word) = self.next_word()? {
            words.push(word);
        }
        Ok(words)
    }

    /// Advances the cursor and returns the next word, or `None` once the input is exhausted.
    pub fn next_word(&mut self) -> LexResult<Option<String>> {
        self.skip_whitespace();

        if self.input.peek().is_none() {
            return Ok(None);
        }

        let mut word = String::new();
        loop {
            let is_complete = match self.mode {
                LexerMode::Unquoted => self.next_unquoted_char(&mut word),
                LexerMode::Quoted(delimiter) => self.next_quoted_char(delimiter, &mut word)?,
            };

            if is_complete {
                return Ok(Some(word));
            }
        }
    }

    /// Consumes the next character in unquoted mode.
    ///
    /// Returns `true` once the word is complete. Trailing whitespace is left in the input.
    fn next_unquoted_char(&mut self, word: &mut String) -> bool {
        debug_assert_eq!(self.mode, LexerMode::Unquoted);
        match self.input.peek().copied() {
            None => true,
            Some((_, ch)) if is_whitespace(ch) => true,
            Some((position, ch)) if is_quote(ch) => {
                self.input.next();
                self.quote_start = position;
                self.mode = LexerMode::Quoted(ch);
                false
            }
            Some((_, ch)) => {
                self.input.next();
                word.push(ch);
                false
            }
        }
    }

    /// Consumes the next character in quoted mode.
    ///
    /// A quoted part never completes a word on its own, so this returns `false` unless the
    /// quote is left open.
    fn next_quoted_char(&mut self, delimiter: char, word: &mut String) -> LexResult<bool> {
        debug_assert_eq!(self.mode, LexerMode::Quoted(delimiter));
        match self.input.next() {
            None => {
                self.mode = LexerMode::Unquoted;
                let start = self.quote_start;
                Err(ParseError::UnterminatedQuote(self.span(start, start + 1)))
            }
            Some((_, ch)) if ch == delimiter => {
                self.mode = LexerMode::Unquoted;
                Ok(false)
            }
            Some((_, '\\')) if delimiter == '"' => {
                match self.input.next_if(|&(_, next)| next == '"' || next == '\\') {
                    Some((_, escaped)) => word.push(escaped),
                    None => word.push('\\'),
                }
                Ok(false)
            }
            Some((_, ch)) => {
                word.push(ch);
                Ok(false)
            }
        }
    }

    /// Skips all whitespace at the cursor.
    fn skip_whitespace(&mut self) {
        while self.input.next_if(|&(_, ch)| is_whitespace(ch)).is_some() {}
    }

    /// Returns a span relative to the lexer's offset.
    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(start, end).offset(self.offset)
    }
}

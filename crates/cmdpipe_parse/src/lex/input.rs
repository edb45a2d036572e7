/// Returns `true` if a character separates words outside of quotes.
pub fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'   // \t
        | '\u{000A}' // \n
        | '\u{000B}' // vertical tab
        | '\u{000C}' // form feed
        | '\u{000D}' // \r
        | '\u{0020}' // space
    )
}

/// Returns `true` if a character opens a quoted part of a word.
pub fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

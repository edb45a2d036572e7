mod error;
mod lex;
mod span;
mod split;

pub use error::ParseError;
pub use lex::lexer::{split_words, Lexer};
pub use span::Span;
pub use split::{split_pipeline, Segment};

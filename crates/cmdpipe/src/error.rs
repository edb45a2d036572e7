use ansi_term::Colour;
use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};
use cmdpipe_exec::ExecError;
use cmdpipe_parse::ParseError;

/// Prints errors to stderr, optionally in color.
pub(crate) struct ErrorHandler {
    color: bool,
}

impl ErrorHandler {
    pub(crate) fn new(color: bool) -> Self {
        Self { color }
    }

    /// Returns the prefix for single line error messages.
    pub(crate) fn prefix(&self) -> String {
        if self.color {
            Colour::Red.bold().paint("cmdpipe:").to_string()
        } else {
            String::from("cmdpipe:")
        }
    }
}

/// Displays an error that occurred while running `line`.
pub(crate) fn display_error(handler: &ErrorHandler, line: &str, error: &ExecError) {
    match error {
        ExecError::Parse(parse_error) => print_parse_error_details(handler, line, parse_error),
        error => eprintln!("{} {error}", handler.prefix()),
    }
}

/// Prints a parse error along with the part of the line it points at.
fn print_parse_error_details(handler: &ErrorHandler, line: &str, error: &ParseError) {
    let span = error.span();
    let snippet = Snippet {
        title: Some(Annotation {
            label: Some("parse error"),
            id: None,
            annotation_type: AnnotationType::Error,
        }),
        footer: vec![],
        slices: vec![Slice {
            source: line,
            line_start: 1,
            origin: None,
            fold: true,
            annotations: vec![SourceAnnotation {
                label: error.help(),
                annotation_type: AnnotationType::Error,
                range: (span.start, span.end),
            }],
        }],
        opt: FormatOptions {
            color: handler.color,
            ..Default::default()
        },
    };

    eprintln!("{}", DisplayList::from(snippet));
}

//! Rich error reporting for tag splitting
//!
//! Note: These struct fields are used by miette's `#[derive(Diagnostic)]` macro
//! for rich error output, but the compiler cannot see through the proc macro expansion.

#![allow(unused_assignments, reason = "fields are read by the miette derive")]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Error produced while splitting tag text into segments
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum ParseError {
    /// The tag text holds nothing to split
    #[error("tag is empty")]
    #[diagnostic(code(syntax::empty_tag))]
    Empty,

    /// A character that cannot appear at this position
    #[error("unexpected `{character}` in tag")]
    #[diagnostic(code(syntax::unexpected_character))]
    UnexpectedCharacter {
        /// What was found
        character: char,
        /// Source location
        #[label("not valid here")]
        span: SourceSpan,
        /// Tag text for context
        #[source_code]
        src: NamedSource<String>,
    },

    /// A `[` or `<` that is never closed
    #[error("unclosed `{opening}` in tag")]
    #[diagnostic(code(syntax::unclosed_bracket), help("add the matching `{closing}`"))]
    UnclosedBracket {
        /// The opening character
        opening: char,
        /// The expected closing character
        closing: char,
        /// Opening delimiter location
        #[label("opened here")]
        span: SourceSpan,
        /// Tag text for context
        #[source_code]
        src: NamedSource<String>,
    },

    /// Text following a closed parameter that is not a `.`
    #[error("expected `.` or end of tag after a parameter")]
    #[diagnostic(
        code(syntax::trailing_text),
        help("a segment carries at most one `[parameter]`, placed last")
    )]
    TrailingText {
        /// Where the unexpected text starts
        #[label("unexpected text")]
        span: SourceSpan,
        /// Tag text for context
        #[source_code]
        src: NamedSource<String>,
    },
}

impl ParseError {
    pub(crate) fn named_source(text: &str) -> NamedSource<String> {
        NamedSource::new("<tag>", text.to_string())
    }
}

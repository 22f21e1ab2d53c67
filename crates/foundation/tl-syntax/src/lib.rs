//! Tag text splitting for taglens
//!
//! Tag text is a `.`-separated chain of segments, optionally wrapped in `<`…`>`.
//! Each segment may end in one bracketed `[parameter]`, which can itself hold
//! nested brackets and nested `<tags>`. Splitting is purely lexical: nothing
//! here knows which segments name real tags.
//!
//! The same splitter serves both written tags under analysis and the declared
//! syntax of documented tags (`<PlayerTag.flag[<name>]>`).

pub mod error;
pub mod span;

pub use error::ParseError;
pub use span::Span;

/// One `.`-separated segment of a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Literal text before any parameter
    pub text: String,
    /// Contents of the `[...]` parameter, without the brackets
    pub parameter: Option<String>,
    /// Location of the whole segment, parameter included
    pub span: Span,
}

fn closing_for(opening: char) -> char {
    if opening == '<' { '>' } else { ']' }
}

/// Whether the outermost `<` of `text` is closed by its final `>`
fn is_wrapped(text: &str) -> bool {
    if !(text.starts_with('<') && text.ends_with('>')) || text.len() < 2 {
        return false;
    }
    let mut depth = 0usize;
    for (idx, character) in text.char_indices() {
        match character {
            '<' => depth += 1,
            '>' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && idx + 1 < text.len() {
                    return false;
                }
            }
            _ => {}
        }
    }
    true
}

/// Split tag text into its segments
///
/// # Errors
///
/// Returns a [`ParseError`] for empty input, unbalanced brackets, stray
/// closing characters, or text following a segment's parameter.
pub fn split_tag(source: &str) -> Result<Vec<Segment>, ParseError> {
    let leading = source.len() - source.trim_start().len();
    let trimmed = source.trim();
    let (body, offset) = if is_wrapped(trimmed) {
        (&trimmed[1..trimmed.len() - 1], leading + 1)
    } else {
        (trimmed, leading)
    };
    if body.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut segments = Vec::new();
    let mut open: Vec<(char, usize)> = Vec::new();
    let mut start = 0;
    let mut text_end = None;
    let mut param_start = 0;
    let mut parameter: Option<String> = None;

    for (idx, character) in body.char_indices() {
        if let Some(&(opening, _)) = open.last() {
            match character {
                '[' | '<' => open.push((character, idx)),
                ']' | '>' => {
                    if character != closing_for(opening) {
                        return Err(ParseError::UnexpectedCharacter {
                            character,
                            span: (offset + idx, 1).into(),
                            src: ParseError::named_source(source),
                        });
                    }
                    open.pop();
                    if open.is_empty() {
                        parameter = Some(body[param_start..idx].to_string());
                    }
                }
                _ => {}
            }
            continue;
        }

        match character {
            '.' => {
                segments.push(Segment {
                    text: body[start..text_end.unwrap_or(idx)].to_string(),
                    parameter: parameter.take(),
                    span: Span::from_range(offset + start..offset + idx),
                });
                start = idx + 1;
                text_end = None;
            }
            '[' if parameter.is_none() => {
                text_end = Some(idx);
                param_start = idx + 1;
                open.push((character, idx));
            }
            _ if parameter.is_some() => {
                return Err(ParseError::TrailingText {
                    span: (offset + idx, body.len() - idx).into(),
                    src: ParseError::named_source(source),
                });
            }
            '<' | '>' | ']' => {
                return Err(ParseError::UnexpectedCharacter {
                    character,
                    span: (offset + idx, 1).into(),
                    src: ParseError::named_source(source),
                });
            }
            _ => {}
        }
    }

    if let Some(&(opening, idx)) = open.first() {
        return Err(ParseError::UnclosedBracket {
            opening,
            closing: closing_for(opening),
            span: (offset + idx, 1).into(),
            src: ParseError::named_source(source),
        });
    }

    segments.push(Segment {
        text: body[start..text_end.unwrap_or(body.len())].to_string(),
        parameter,
        span: Span::from_range(offset + start..offset + body.len()),
    });
    Ok(segments)
}

/// Strip `<`, `>` and all bracketed parameter text from declared tag syntax
///
/// `<PlayerTag.flag[<name>]>` becomes `PlayerTag.flag`. Case is preserved.
pub fn clean_tag_syntax(syntax: &str) -> String {
    let mut cleaned = String::with_capacity(syntax.len());
    let mut skipping = false;
    for character in syntax.chars() {
        match character {
            '<' | '>' => {}
            '[' => skipping = true,
            ']' => skipping = false,
            _ if skipping => {}
            _ => cleaned.push(character),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|segment| segment.text.as_str()).collect()
    }

    #[test]
    fn test_split_plain_chain() {
        let segments = split_tag("player.name.to_uppercase").unwrap();
        assert_eq!(texts(&segments), ["player", "name", "to_uppercase"]);
        assert!(segments.iter().all(|segment| segment.parameter.is_none()));
        assert_eq!(segments[1].span, Span::new(7, 11));
    }

    #[test]
    fn test_split_with_parameters() {
        let segments = split_tag("<player[bob].flag[money].add[3]>").unwrap();
        assert_eq!(texts(&segments), ["player", "flag", "add"]);
        assert_eq!(segments[0].parameter.as_deref(), Some("bob"));
        assert_eq!(segments[1].parameter.as_deref(), Some("money"));
        assert_eq!(segments[2].parameter.as_deref(), Some("3"));
        // Spans are relative to the original text, wrapper included
        assert_eq!(segments[0].span, Span::new(1, 12));
    }

    #[test]
    fn test_nested_parameter_keeps_dots() {
        let segments = split_tag("list[a|b].get[<context.index[1]>].name").unwrap();
        assert_eq!(texts(&segments), ["list", "get", "name"]);
        assert_eq!(segments[1].parameter.as_deref(), Some("<context.index[1]>"));
    }

    #[test]
    fn test_definition_shorthand_has_empty_text() {
        let segments = split_tag("<[value].length>").unwrap();
        assert_eq!(texts(&segments), ["", "length"]);
        assert_eq!(segments[0].parameter.as_deref(), Some("value"));
    }

    #[test]
    fn test_not_wrapped_when_angles_are_separate() {
        assert!(!is_wrapped("<a>.b<c>"));
        assert!(is_wrapped("<a.b[<c>]>"));
    }

    #[test]
    fn test_empty_tag() {
        assert!(matches!(split_tag("  "), Err(ParseError::Empty)));
        assert!(matches!(split_tag("<>"), Err(ParseError::Empty)));
    }

    #[test]
    fn test_unclosed_parameter() {
        let error = split_tag("player.flag[money").unwrap_err();
        match error {
            ParseError::UnclosedBracket { opening, span, .. } => {
                assert_eq!(opening, '[');
                assert_eq!(span.offset(), 11);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_trailing_text_after_parameter() {
        let error = split_tag("player[bob]x.name").unwrap_err();
        assert!(matches!(error, ParseError::TrailingText { .. }));
    }

    #[test]
    fn test_stray_closing_bracket() {
        let error = split_tag("player].name").unwrap_err();
        assert!(matches!(
            error,
            ParseError::UnexpectedCharacter { character: ']', .. }
        ));
    }

    #[test]
    fn test_clean_tag_syntax() {
        assert_eq!(clean_tag_syntax("<PlayerTag.flag[<name>]>"), "PlayerTag.flag");
        assert_eq!(
            clean_tag_syntax("<LocationTag.find.entities[(<entity>|...)].within[<#.#>]>"),
            "LocationTag.find.entities.within"
        );
        assert_eq!(clean_tag_syntax("<server>"), "server");
    }
}

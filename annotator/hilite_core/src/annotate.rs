//! The annotator: the scan loop that partitions text into fragments, and
//! the brace splitter that re-annotates interpolated expressions.

use log::trace;
use thiserror::Error;

use crate::fragment::{Fragment, Segment, TokenFragment};
use crate::interner::InternedString;
use crate::pattern::TokenMatcher;

/// Maximum interpolation recursion depth.
pub const MAX_DEPTH: usize = 32;

/// Errors raised while annotating text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotateError {
    /// Interpolation nesting exceeded [`MAX_DEPTH`].
    #[error("maximum interpolation depth of {0} exceeded")]
    DepthExceeded(usize),
}

/// The rule that makes a string token's contents eligible for recursive
/// re-annotation.
#[derive(Debug, Clone)]
pub struct Interpolation {
    /// The string-like category whose tokens may interpolate.
    pub category: InternedString,
    /// The prefix a token must start with for its contents to be treated
    /// as interpolating (e.g. `f` for Python f-strings).
    pub marker: char,
}

impl Interpolation {
    /// Build an interpolation rule.
    pub fn new(category: &str, marker: char) -> Self {
        Self {
            category: InternedString::new(category),
            marker,
        }
    }
}

/// Scans text with a combined matcher and emits a fragment sequence.
#[derive(Debug, Clone)]
pub struct Annotator {
    matcher: TokenMatcher,
    interpolation: Option<Interpolation>,
}

impl Annotator {
    /// Build an annotator with no interpolation rule.
    pub fn new(matcher: TokenMatcher) -> Self {
        Self {
            matcher,
            interpolation: None,
        }
    }

    /// Build an annotator whose string-like tokens are re-annotated when
    /// they carry the interpolation marker prefix.
    pub fn with_interpolation(matcher: TokenMatcher, rule: Interpolation) -> Self {
        Self {
            matcher,
            interpolation: Some(rule),
        }
    }

    /// Partition `text` into a fragment sequence.
    ///
    /// Never fails on ordinary input: unmatched text is preserved verbatim
    /// as [`Fragment::Text`]. The only error condition is interpolation
    /// nesting beyond [`MAX_DEPTH`].
    pub fn annotate(&self, text: &str) -> Result<Vec<Fragment>, AnnotateError> {
        self.annotate_at(text, 0)
    }

    fn annotate_at(&self, text: &str, depth: usize) -> Result<Vec<Fragment>, AnnotateError> {
        if depth > MAX_DEPTH {
            return Err(AnnotateError::DepthExceeded(MAX_DEPTH));
        }

        let mut fragments = Vec::new();
        let mut start = 0;

        while let Some(m) = self.matcher.find_at(text, start) {
            // Construction rejects zero-length-capable patterns; should one
            // slip past the probes, a zero-length match cannot advance the
            // cursor, so stop and let the tail land in one text fragment.
            if m.end == m.start {
                break;
            }

            trace!(
                "match '{}' at {}..{} (depth {depth})",
                m.category,
                m.start,
                m.end
            );

            if m.start > start {
                fragments.push(Fragment::Text(text[start..m.start].to_string()));
            }

            let raw = &text[m.start..m.end];
            let nested = match &self.interpolation {
                Some(rule) if m.category == rule.category && raw.starts_with(rule.marker) => {
                    Some(self.split_interpolated(raw, depth)?)
                }
                _ => None,
            };

            fragments.push(Fragment::Token(TokenFragment {
                category: m.category,
                text: raw.to_string(),
                nested,
            }));
            start = m.end;
        }

        if start < text.len() {
            fragments.push(Fragment::Text(text[start..].to_string()));
        }

        Ok(fragments)
    }

    /// Split an interpolating token's raw text on brace delimiters and
    /// recursively annotate the embedded-expression elements.
    ///
    /// The split preserves the delimiters, yielding a strict alternation
    /// of literal runs and single-character delimiters. Elements at index
    /// congruent to 2 modulo 4 sit between one open brace and the next
    /// close brace and are re-annotated; everything else stays literal.
    /// Exactly one level of brace nesting per token; doubled or escaped
    /// braces are not special-cased.
    fn split_interpolated(&self, raw: &str, depth: usize) -> Result<Vec<Segment>, AnnotateError> {
        let mut segments = Vec::new();
        for (index, piece) in split_on_braces(raw).into_iter().enumerate() {
            if index % 4 == 2 {
                segments.push(Segment::Expr(self.annotate_at(piece, depth + 1)?));
            } else if !piece.is_empty() {
                segments.push(Segment::Literal(piece.to_string()));
            }
        }
        Ok(segments)
    }
}

/// Split `text` on `{` and `}`, keeping each delimiter as its own element.
/// Literal elements (possibly empty) and delimiters strictly alternate,
/// starting and ending with a literal.
fn split_on_braces(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    for (i, c) in text.char_indices() {
        if c == '{' || c == '}' {
            parts.push(&text[last..i]);
            parts.push(&text[i..i + 1]);
            last = i + 1;
        }
    }
    parts.push(&text[last..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn simple() -> Annotator {
        let matcher = TokenMatcher::new([("keyword", r"\bif\b"), ("literal", r"\d+")]).unwrap();
        Annotator::new(matcher)
    }

    #[test]
    fn split_alternates_literals_and_delimiters() {
        assert_eq!(
            split_on_braces("f\"x={x+1}\""),
            vec!["f\"x=", "{", "x+1", "}", "\""]
        );
        assert_eq!(split_on_braces("{}"), vec!["", "{", "", "}", ""]);
        assert_eq!(split_on_braces("none"), vec!["none"]);
    }

    #[test]
    fn unmatched_text_becomes_one_text_fragment() {
        let fragments = simple().annotate("no tokens here").unwrap();
        assert_eq!(fragments, vec![Fragment::text("no tokens here")]);
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert_eq!(simple().annotate("").unwrap(), vec![]);
    }

    #[test]
    fn depth_guard_rejects_runaway_recursion() {
        let annotator = simple();
        let err = annotator.annotate_at("if", MAX_DEPTH + 1).unwrap_err();
        assert_eq!(err, AnnotateError::DepthExceeded(MAX_DEPTH));
    }

    #[test]
    fn interpolation_skips_tokens_without_marker() {
        let matcher = TokenMatcher::new([("string", r#"f?".*?""#)]).unwrap();
        let annotator = Annotator::with_interpolation(matcher, Interpolation::new("string", 'f'));
        let fragments = annotator.annotate(r#""{x}""#).unwrap();
        assert_eq!(fragments, vec![Fragment::token("string", r#""{x}""#)]);
    }
}

//! The fragment data model: the loss-less decomposition of input text
//! into plain-text and categorized-token pieces.

use crate::interner::InternedString;

/// One piece of annotated text.
///
/// A fragment sequence is contiguous, non-overlapping and in left-to-right
/// order; concatenating the raw text of every fragment (recursively,
/// including nested segments) reproduces the annotated input exactly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Fragment {
    /// A raw substring no category matched.
    Text(String),
    /// A substring claimed by exactly one category.
    Token(TokenFragment),
}

/// An annotated substring belonging to exactly one category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenFragment {
    /// The category that claimed this token.
    pub category: InternedString,
    /// The raw matched text.
    pub text: String,
    /// Present only for interpolating string tokens: the token text split
    /// into literal runs and recursively annotated expression regions.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub nested: Option<Vec<Segment>>,
}

/// One element of an interpolating token's nested decomposition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Segment {
    /// A literal run, including the brace delimiters themselves.
    Literal(String),
    /// One embedded expression, annotated with the same configuration.
    Expr(Vec<Fragment>),
}

impl Fragment {
    /// Build a plain text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// Build a token fragment with no nested segments.
    pub fn token(category: &str, text: impl Into<String>) -> Self {
        Fragment::Token(TokenFragment {
            category: InternedString::new(category),
            text: text.into(),
            nested: None,
        })
    }
}

/// Reconstruct the raw input text of a fragment sequence, walking nested
/// segments recursively.
pub fn plain_text(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    push_plain(&mut out, fragments);
    out
}

fn push_plain(out: &mut String, fragments: &[Fragment]) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Token(token) => match &token.nested {
                Some(segments) => {
                    for segment in segments {
                        match segment {
                            Segment::Literal(text) => out.push_str(text),
                            Segment::Expr(inner) => push_plain(out, inner),
                        }
                    }
                }
                None => out.push_str(&token.text),
            },
        }
    }
}

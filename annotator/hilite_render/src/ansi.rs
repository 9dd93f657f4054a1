//! ANSI-colored terminal output for a fragment sequence.

use std::collections::HashMap;

use hilite_core::{Fragment, Segment};

const RESET: &str = "\x1b[0m";

/// Maps category names to SGR color sequences.
#[derive(Debug, Clone)]
pub struct Theme {
    colors: HashMap<String, String>,
}

impl Theme {
    /// An empty theme; every category renders unstyled.
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Assign an SGR sequence (e.g. `"\x1b[35m"`) to a category.
    pub fn set(&mut self, category: &str, sgr: &str) {
        self.colors.insert(category.to_string(), sgr.to_string());
    }

    fn sgr(&self, category: &str) -> Option<&str> {
        self.colors.get(category).map(String::as_str)
    }
}

impl Default for Theme {
    /// Colors for the category names the shipped languages use. Unknown
    /// categories render unstyled.
    fn default() -> Self {
        let mut theme = Self::empty();
        theme.set("string", "\x1b[32m");
        theme.set("comment", "\x1b[90m");
        theme.set("keyword", "\x1b[35m");
        theme.set("builtin", "\x1b[36m");
        theme.set("literal", "\x1b[33m");
        theme
    }
}

/// Render a fragment sequence as ANSI-colored text.
///
/// Each colored run is closed with a reset, so stripping SGR sequences
/// from the output reproduces the input.
pub fn to_ansi(fragments: &[Fragment], theme: &Theme) -> String {
    let mut out = String::new();
    write_fragments(&mut out, fragments, theme);
    out
}

fn write_fragments(out: &mut String, fragments: &[Fragment], theme: &Theme) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Token(token) => {
                let sgr = theme.sgr(token.category.as_str());
                match &token.nested {
                    Some(segments) => {
                        for segment in segments {
                            match segment {
                                Segment::Literal(text) => paint(out, text, sgr),
                                Segment::Expr(inner) => write_fragments(out, inner, theme),
                            }
                        }
                    }
                    None => paint(out, &token.text, sgr),
                }
            }
        }
    }
}

fn paint(out: &mut String, text: &str, sgr: Option<&str>) {
    match sgr {
        Some(sgr) if !text.is_empty() => {
            out.push_str(sgr);
            out.push_str(text);
            out.push_str(RESET);
        }
        _ => out.push_str(text),
    }
}

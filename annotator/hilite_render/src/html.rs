//! HTML span markup for a fragment sequence.
//!
//! Token fragments become `<span class="hl-<category>">`; the expression
//! segments of an interpolating token are wrapped in `<span
//! class="hl-nested">` inside the token span. Everything else is escaped
//! text, so concatenating the rendered text content reproduces the input.

use hilite_core::{Fragment, Segment};

/// Render a fragment sequence as HTML span markup.
pub fn to_html(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    write_fragments(&mut out, fragments);
    out
}

fn write_fragments(out: &mut String, fragments: &[Fragment]) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => push_escaped(out, text),
            Fragment::Token(token) => {
                out.push_str("<span class=\"hl-");
                push_escaped(out, token.category.as_str());
                out.push_str("\">");
                match &token.nested {
                    Some(segments) => {
                        for segment in segments {
                            match segment {
                                Segment::Literal(text) => push_escaped(out, text),
                                Segment::Expr(inner) => {
                                    out.push_str("<span class=\"hl-nested\">");
                                    write_fragments(out, inner);
                                    out.push_str("</span>");
                                }
                            }
                        }
                    }
                    None => push_escaped(out, &token.text),
                }
                out.push_str("</span>");
            }
        }
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

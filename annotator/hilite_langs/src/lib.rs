//! Per-language category definition sets.
//!
//! Each language is a bag of configuration data passed into the core:
//! an ordered `(category, pattern)` slice (order is precedence) plus an
//! optional interpolation rule. No annotation logic lives here.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::collections::HashMap;

use hilite_core::{Annotator, Interpolation, PatternError, TokenMatcher};
use lazy_static::lazy_static;

/// A language's token category configuration.
#[derive(Debug, Clone, Copy)]
pub struct Language {
    /// Registry name of the language.
    pub name: &'static str,
    /// Ordered category definition set; earlier categories win ties.
    pub categories: &'static [(&'static str, &'static str)],
    /// `(string-like category, marker prefix)` when string tokens carrying
    /// the marker should have their embedded expressions re-annotated.
    pub interpolation: Option<(&'static str, char)>,
}

impl Language {
    /// Build an annotator for this language.
    ///
    /// A `PatternError` here means the shipped definitions are defective;
    /// the registry's definitions are covered by tests.
    pub fn annotator(&self) -> Result<Annotator, PatternError> {
        let matcher = TokenMatcher::new(self.categories.iter().copied())?;
        Ok(match self.interpolation {
            Some((category, marker)) => {
                Annotator::with_interpolation(matcher, Interpolation::new(category, marker))
            }
            None => Annotator::new(matcher),
        })
    }
}

/// Python: strings (f-strings interpolate), comments, keywords, builtins
/// and numeric literals.
pub static PYTHON: Language = Language {
    name: "python",
    categories: &[
        ("string", r#"f?(?:".*?"|'.*?')"#),
        ("comment", "#.*"),
        (
            "keyword",
            r"\b(?:assert|for|in|from|import|class|def|if|elif|else|return|None|while|with|as)\b",
        ),
        (
            "builtin",
            r"\b(?:print|int|range|input|exit|__init__|self|__name__|len|max|open|hex)\b",
        ),
        // No look-around in the engine: the upstream negative look-behind
        // before the sign is approximated by `-?\b`.
        ("literal", r"-?\b(?i:0x_*[\da-f][\da-f_]*|_*\d[\d_]*)"),
    ],
    interpolation: Some(("string", 'f')),
};

/// C: comments, strings and character constants, keywords, common typedef
/// builtins and integer literals.
pub static C: Language = Language {
    name: "c",
    categories: &[
        ("comment", r"/\*.*?\*/"),
        ("string", r#"".*?"|'.'"#),
        ("keyword", r"\b(?:if|goto|unsigned|char)\b"),
        ("builtin", r"\b(?:uint32_t|size_t|NULL)\b"),
        ("literal", r"-?\d+"),
    ],
    interpolation: None,
};

lazy_static! {
    static ref REGISTRY: HashMap<&'static str, &'static Language> = {
        let mut map = HashMap::new();
        map.insert(PYTHON.name, &PYTHON);
        map.insert(C.name, &C);
        map
    };
}

/// Look up a language by registry name.
pub fn lookup(name: &str) -> Option<&'static Language> {
    REGISTRY.get(name).copied()
}

/// Registry names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilite_core::{plain_text, Fragment, Segment};
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_lists_shipped_languages() {
        assert_eq!(names(), vec!["c", "python"]);
        assert!(lookup("python").is_some());
        assert!(lookup("cobol").is_none());
    }

    #[test]
    fn shipped_definitions_compile() {
        for name in names() {
            let language = lookup(name).unwrap();
            language
                .annotator()
                .unwrap_or_else(|e| panic!("definitions for '{name}' are defective: {e}"));
        }
    }

    #[test]
    fn python_categorizes_a_snippet() {
        let annotator = PYTHON.annotator().unwrap();
        let input = "def f(n):  # doc\n    return n - 0x1F";
        let fragments = annotator.annotate(input).unwrap();
        assert_eq!(plain_text(&fragments), input);

        let categories: Vec<_> = fragments
            .iter()
            .filter_map(|f| match f {
                Fragment::Token(t) => Some((t.category.as_str(), t.text.as_str())),
                Fragment::Text(_) => None,
            })
            .collect();
        assert_eq!(
            categories,
            vec![
                ("keyword", "def"),
                ("comment", "# doc"),
                ("keyword", "return"),
                ("literal", "0x1F"),
            ]
        );
    }

    #[test]
    fn python_fstring_interpolates() {
        let annotator = PYTHON.annotator().unwrap();
        let fragments = annotator.annotate(r#"print(f"n={n + 1}")"#).unwrap();

        let nested = fragments
            .iter()
            .find_map(|f| match f {
                Fragment::Token(t) if t.category == "string" => t.nested.as_ref(),
                _ => None,
            })
            .expect("f-string should carry nested segments");

        let exprs: Vec<_> = nested
            .iter()
            .filter_map(|s| match s {
                Segment::Expr(inner) => Some(plain_text(inner)),
                Segment::Literal(_) => None,
            })
            .collect();
        assert_eq!(exprs, vec!["n + 1"]);
    }

    #[test]
    fn python_plain_string_does_not_interpolate() {
        let annotator = PYTHON.annotator().unwrap();
        let fragments = annotator.annotate(r#""n={n}""#).unwrap();
        let Fragment::Token(token) = &fragments[0] else {
            panic!("expected a string token");
        };
        assert_eq!(token.category, "string");
        assert!(token.nested.is_none());
    }

    #[test]
    fn c_categorizes_a_snippet() {
        let annotator = C.annotator().unwrap();
        let input = "/* len */ unsigned char c = 'x'; if (n) goto done;";
        let fragments = annotator.annotate(input).unwrap();
        assert_eq!(plain_text(&fragments), input);

        let categories: Vec<_> = fragments
            .iter()
            .filter_map(|f| match f {
                Fragment::Token(t) => Some((t.category.as_str(), t.text.as_str())),
                Fragment::Text(_) => None,
            })
            .collect();
        assert_eq!(
            categories,
            vec![
                ("comment", "/* len */"),
                ("keyword", "unsigned"),
                ("keyword", "char"),
                ("string", "'x'"),
                ("keyword", "if"),
                ("keyword", "goto"),
            ]
        );
    }
}

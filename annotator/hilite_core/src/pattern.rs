//! The pattern combiner: turns an ordered category definition set into a
//! single tagged alternation.

use regex::Regex;
use thiserror::Error;

use crate::interner::InternedString;

/// Errors raised while combining a category definition set.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The definition set contains no categories.
    #[error("category definition set is empty")]
    NoCategories,

    /// A category pattern failed to compile.
    #[error("pattern for category '{category}' does not compile: {source}")]
    InvalidPattern {
        /// The offending category name.
        category: String,
        /// The underlying regex error.
        #[source]
        source: Box<regex::Error>,
    },

    /// A category pattern can match the empty string, which would stall
    /// the annotator's cursor.
    #[error("pattern for category '{category}' can match the empty string")]
    EmptyMatch {
        /// The offending category name.
        category: String,
    },
}

/// The result of applying the combined pattern at or after an offset.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch {
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Byte offset one past the last matched character.
    pub end: usize,
    /// The single category this match satisfied.
    pub category: InternedString,
}

/// A unified matcher over an ordered category definition set.
///
/// Each category's pattern becomes one alternative of a single regex,
/// wrapped in a synthesized named group (`t0`, `t1`, ...). The synthesized
/// names, rather than the category names themselves, carry the tagging, so
/// category names need not be valid group identifiers and supplied patterns
/// may contain their own capture groups. Alternation order is definition
/// order: when several categories can match at the same leftmost position,
/// the first-listed one wins.
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    regex: Regex,
    categories: Vec<InternedString>,
}

impl TokenMatcher {
    /// Combine an ordered `(name, pattern)` definition set.
    ///
    /// Fails fast on an empty set, on a pattern that does not compile, and
    /// on a pattern capable of a zero-length match.
    pub fn new<'a, I>(defs: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut alternatives = Vec::new();
        let mut categories = Vec::new();

        for (index, (name, pattern)) in defs.into_iter().enumerate() {
            let alone = Regex::new(pattern).map_err(|source| PatternError::InvalidPattern {
                category: name.to_string(),
                source: Box::new(source),
            })?;
            // A zero-length match would stall the annotator's cursor. The
            // empty haystack alone misses assertions that need a neighboring
            // character (a bare `\b` matches nothing on ""), so probe a few
            // one-character haystacks as well; any empty match on any probe
            // is a zero-length match.
            const PROBES: [&str; 4] = ["", "a", " ", "0"];
            if PROBES
                .iter()
                .any(|h| alone.find(h).is_some_and(|m| m.is_empty()))
            {
                return Err(PatternError::EmptyMatch {
                    category: name.to_string(),
                });
            }
            alternatives.push(format!("(?P<t{index}>{pattern})"));
            categories.push(InternedString::new(name));
        }

        if categories.is_empty() {
            return Err(PatternError::NoCategories);
        }

        // The composed alternation can fail where the lone patterns did not,
        // e.g. a pattern ending in an unbalanced group opener.
        let regex =
            Regex::new(&alternatives.join("|")).map_err(|source| PatternError::InvalidPattern {
                category: "<combined>".to_string(),
                source: Box::new(source),
            })?;

        Ok(Self { regex, categories })
    }

    /// Number of categories in the set.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the set is empty. Construction rejects empty sets, so this
    /// is always false on a built matcher.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Find the match nearest to `start`, tagged with its category.
    ///
    /// `start` must lie on a character boundary; the annotator only ever
    /// passes previous match ends, which do.
    pub fn find_at(&self, text: &str, start: usize) -> Option<TokenMatch> {
        let caps = self.regex.captures_at(text, start)?;
        // Exactly one synthesized group participates in any match: the
        // alternative the engine selected at the leftmost position.
        (0..self.categories.len()).find_map(|index| {
            caps.name(&format!("t{index}")).map(|m| TokenMatch {
                start: m.start(),
                end: m.end(),
                category: self.categories[index].clone(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_definition_set() {
        let err = TokenMatcher::new([]).unwrap_err();
        assert!(matches!(err, PatternError::NoCategories));
    }

    #[test]
    fn rejects_uncompilable_pattern() {
        let err = TokenMatcher::new([("broken", "(")]).unwrap_err();
        match err {
            PatternError::InvalidPattern { category, .. } => assert_eq!(category, "broken"),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_length_capable_pattern() {
        let err = TokenMatcher::new([("stall", "a*")]).unwrap_err();
        match err {
            PatternError::EmptyMatch { category } => assert_eq!(category, "stall"),
            other => panic!("expected EmptyMatch, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_width_assertion_pattern() {
        // `\b` never matches the empty haystack but is zero-width wherever
        // it does match; the probe haystacks must still catch it.
        let err = TokenMatcher::new([("boundary", r"\b")]).unwrap_err();
        match err {
            PatternError::EmptyMatch { category } => assert_eq!(category, "boundary"),
            other => panic!("expected EmptyMatch, got {other:?}"),
        }
    }

    #[test]
    fn finds_nearest_match_after_offset() {
        let matcher = TokenMatcher::new([("number", r"\d+")]).unwrap();
        let m = matcher.find_at("a 12 b 34", 4).unwrap();
        assert_eq!((m.start, m.end), (7, 9));
        assert_eq!(m.category, "number");
    }

    #[test]
    fn first_listed_category_wins_at_shared_start() {
        let matcher = TokenMatcher::new([("keyword", r"\bif\b"), ("word", "[a-z]+")]).unwrap();
        let m = matcher.find_at("if", 0).unwrap();
        assert_eq!(m.category, "keyword");

        let matcher = TokenMatcher::new([("word", "[a-z]+"), ("keyword", r"\bif\b")]).unwrap();
        let m = matcher.find_at("if", 0).unwrap();
        assert_eq!(m.category, "word");
    }

    #[test]
    fn supplied_patterns_may_contain_their_own_groups() {
        let matcher = TokenMatcher::new([("pair", r"(\d)=(\d)"), ("word", "[a-z]+")]).unwrap();
        let m = matcher.find_at("1=2 ok", 0).unwrap();
        assert_eq!(m.category, "pair");
        assert_eq!((m.start, m.end), (0, 3));

        let m = matcher.find_at("1=2 ok", 3).unwrap();
        assert_eq!(m.category, "word");
    }
}

//! Lexical annotation core
//!
//! This crate partitions source text into a sequence of typed fragments
//! (plain text vs. categorized tokens) by scanning with a set of named
//! token patterns, and recursively re-annotates interpolated expressions
//! embedded inside string tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod annotate;
pub mod fragment;
pub mod interner;
pub mod pattern;

// Re-export the main types for convenience
pub use annotate::{AnnotateError, Annotator, Interpolation, MAX_DEPTH};
pub use fragment::{plain_text, Fragment, Segment, TokenFragment};
pub use interner::InternedString;
pub use pattern::{PatternError, TokenMatch, TokenMatcher};

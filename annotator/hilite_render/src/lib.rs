//! Presentation adapters: materialize a fragment sequence into HTML
//! markup, ANSI-colored terminal text, or JSON.
//!
//! The core's contract ends at the fragment sequence; everything here is
//! a consumer walking that sequence.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ansi;
pub mod html;
pub mod json;

pub use ansi::{to_ansi, Theme};
pub use html::to_html;
pub use json::to_json;

//! JSON serialization of a fragment sequence.

use hilite_core::Fragment;

/// Serialize a fragment sequence as pretty-printed JSON.
pub fn to_json(fragments: &[Fragment]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(fragments)
}

//! Category name interning.
//!
//! Category names repeat once per token fragment, so fragments hold a
//! reference-counted interned string instead of a fresh allocation each.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;

lazy_static! {
    static ref INTERNER: Mutex<HashSet<Arc<str>>> = Mutex::new(HashSet::new());
}

/// A reference-counted, interned string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InternedString(Arc<str>);

impl InternedString {
    /// Intern `s`, returning a handle shared with every other equal string.
    pub fn new(s: &str) -> Self {
        let mut set = INTERNER.lock().unwrap();
        match set.get(s) {
            Some(existing) => InternedString(Arc::clone(existing)),
            None => {
                let arc: Arc<str> = Arc::from(s);
                set.insert(Arc::clone(&arc));
                InternedString(arc)
            }
        }
    }

    /// Get the string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InternedString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for InternedString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for InternedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::fmt::Display for InternedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for InternedString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

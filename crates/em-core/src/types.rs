//! Core type definitions and text bounds.

use std::fmt;

/// Maximum number of characters kept for event and attribute names.
pub const NAME_LIMIT: usize = 49;

/// Maximum number of characters kept for an event date (`DD-MM-YYYY`).
pub const DATE_LIMIT: usize = 10;

/// Handle to an event stored in a [`Catalog`](crate::Catalog).
///
/// Handles are only meaningful for the catalog that issued them. They stay
/// valid for the lifetime of that catalog since events are never removed
/// individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(usize);

impl EventId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// Cuts `value` down to at most `limit` characters.
///
/// Returns the kept text and whether anything was dropped. Never splits a
/// multi-byte character.
pub fn truncate_chars(value: &str, limit: usize) -> (&str, bool) {
    match value.char_indices().nth(limit) {
        Some((byte_index, _)) => (&value[..byte_index], true),
        None => (value, false),
    }
}

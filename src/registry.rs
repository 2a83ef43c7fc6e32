use crate::canonical::{canonicalize, CanonicalKey};
use std::{collections::HashSet, hash::Hash};

/// Canonical keys of every subset emitted so far by one enumeration.
///
/// Grows monotonically and lives exactly as long as the enumeration that
/// owns it.
pub struct SeenRegistry<'a, E> {
    keys: HashSet<CanonicalKey<'a, E>, ahash::RandomState>,
}

impl<'a, E: Ord + Hash> SeenRegistry<'a, E> {
    pub fn new() -> Self {
        Self {
            keys: HashSet::with_hasher(ahash::RandomState::new()),
        }
    }

    /// Registers `subset` and returns `true`, unless an equal subset was
    /// already registered, in which case nothing changes and `false` is
    /// returned.
    pub fn mark_if_new(&mut self, subset: &[&'a E]) -> bool {
        self.keys.insert(canonicalize(subset))
    }

    pub fn contains(&self, subset: &[&'a E]) -> bool {
        self.keys.contains(&canonicalize(subset))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<E: Ord + Hash> Default for SeenRegistry<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

use std::hash::{Hash, Hasher};

/// A subset's elements sorted by their total order.
///
/// Two subsets are the same subset iff their keys are equal, whatever
/// order their elements were produced in.
pub struct CanonicalKey<'a, E> {
    elements: Vec<&'a E>,
}

pub fn canonicalize<'a, E: Ord>(subset: &[&'a E]) -> CanonicalKey<'a, E> {
    let mut elements = subset.to_vec();
    elements.sort_unstable();
    CanonicalKey { elements }
}

impl<'a, E> CanonicalKey<'a, E> {
    pub fn as_subset(&self) -> &[&'a E] {
        &self.elements
    }

    pub fn into_subset(self) -> Vec<&'a E> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, e: &E) -> bool
    where
        E: Ord,
    {
        self.elements.binary_search_by(|x| (*x).cmp(e)).is_ok()
    }
}

impl<E> Clone for CanonicalKey<'_, E> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<E: PartialEq> PartialEq for CanonicalKey<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: Eq> Eq for CanonicalKey<'_, E> {}

impl<E: Hash> Hash for CanonicalKey<'_, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for CanonicalKey<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}
